// src/extractor/job.rs
//! Heuristic job-posting extraction: skills with requirement levels,
//! experience and education demands, and the benefits the posting advertises.

use crate::keywords::contains_term;
use crate::taxonomy::SkillTaxonomy;
use crate::types::{ExtractedJobPosting, RequirementLevel, SkillRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static REQUIRED_WORDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)required|must have|must-have|essential").unwrap());
static PREFERRED_WORDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)preferred|nice to have|nice-to-have|desirable").unwrap());
static EXPERIENCE_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*\+?\s*years?").unwrap());
static EXPERIENCE_LEVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(intern|entry[- ]level|junior|mid[- ]level|senior|staff|principal|lead)\b").unwrap());
static EDUCATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)degree|bachelor|master|phd|doctorate|diploma|bsc|msc").unwrap()
});
static TITLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)engineer|developer|architect|analyst|scientist|designer|manager|consultant")
        .unwrap()
});
static COMPANY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(at|company:|about)\s+(.{2,60})$").unwrap());

const BENEFIT_TERMS: [&str; 10] = [
    "remote",
    "hybrid",
    "health insurance",
    "dental",
    "401k",
    "pension",
    "equity",
    "stock options",
    "flexible hours",
    "paid time off",
];

pub fn extract_job_posting(text: &str, taxonomy: &SkillTaxonomy) -> ExtractedJobPosting {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let mut required_skills: Vec<SkillRecord> = Vec::new();
    let mut preferred_skills: Vec<SkillRecord> = Vec::new();

    for (category, keyword) in taxonomy.entries() {
        // A skill's strongest mention across the posting decides its level.
        let mentions: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| contains_term(line, keyword))
            .collect();
        if mentions.is_empty() {
            continue;
        }
        if required_skills
            .iter()
            .chain(preferred_skills.iter())
            .any(|s| s.name.eq_ignore_ascii_case(keyword))
        {
            continue;
        }

        let requirement = if mentions.iter().any(|l| REQUIRED_WORDING.is_match(l)) {
            RequirementLevel::Required
        } else if mentions.iter().any(|l| PREFERRED_WORDING.is_match(l)) {
            RequirementLevel::Preferred
        } else {
            RequirementLevel::Bonus
        };

        let record = SkillRecord {
            name: keyword.to_string(),
            category,
            requirement: Some(requirement),
            proficiency: None,
            evidence: mentions.iter().take(2).map(|l| l.to_string()).collect(),
        };
        match requirement {
            RequirementLevel::Required => required_skills.push(record),
            _ => preferred_skills.push(record),
        }
    }

    // A posting with no explicit requirement wording still has a hard skill
    // list; treat plain mentions as required when nothing was marked so.
    if required_skills.is_empty() && !preferred_skills.is_empty() {
        let (bonus, rest): (Vec<_>, Vec<_>) = preferred_skills
            .into_iter()
            .partition(|s| s.requirement == Some(RequirementLevel::Bonus));
        required_skills = bonus;
        preferred_skills = rest;
        for skill in &mut required_skills {
            skill.requirement = Some(RequirementLevel::Required);
        }
    }

    ExtractedJobPosting {
        title: extract_title(&lines),
        company: extract_company(&lines),
        source_url: None,
        required_skills,
        preferred_skills,
        min_experience_years: extract_min_experience(text),
        experience_level: EXPERIENCE_LEVEL
            .find(text)
            .map(|m| m.as_str().to_lowercase()),
        education_requirements: lines
            .iter()
            .filter(|line| !line.is_empty() && EDUCATION_LINE.is_match(line))
            .map(|line| line.to_string())
            .collect(),
        benefits: BENEFIT_TERMS
            .iter()
            .filter(|term| contains_term(text, term))
            .map(|term| term.to_string())
            .collect(),
    }
}

fn extract_title(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|line| !line.is_empty() && line.len() < 80 && TITLE_LINE.is_match(line))
        .or_else(|| lines.iter().find(|line| !line.is_empty()))
        .map(|line| line.to_string())
        .unwrap_or_default()
}

fn extract_company(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| {
            COMPANY_LINE
                .captures(line)
                .map(|caps| caps[2].trim().to_string())
        })
        .unwrap_or_default()
}

/// Smallest explicit year requirement in the posting, if any.
fn extract_min_experience(text: &str) -> Option<u32> {
    EXPERIENCE_YEARS
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .filter(|years| (1..=40).contains(years))
        .min()
}
