// src/extractor/profile.rs
//! Heuristic résumé extraction. Total: any input, including empty text,
//! yields a valid (possibly mostly empty) profile.

use crate::extractor::sections::{Section, SectionSplitter};
use crate::keywords::contains_term;
use crate::taxonomy::SkillTaxonomy;
use crate::types::{
    EducationEntry, ExperienceEntry, ExtractedProfile, PersonalInfo, Proficiency, SkillRecord,
};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EVIDENCE_LINES: usize = 3;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s().-]{7,}\d").unwrap());
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());
static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/[A-Za-z0-9_-]+").unwrap());
static YEAR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(19|20)\d{2}\s*[-–to]+\s*((19|20)\d{2}|present|current)").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());
static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bachelor|master|phd|doctorate|b\.?s\.?c?|m\.?s\.?c?|mba|associate|diploma)\b")
        .unwrap()
});

pub fn extract_profile(
    text: &str,
    taxonomy: &SkillTaxonomy,
    splitter: &dyn SectionSplitter,
) -> ExtractedProfile {
    let sections = splitter.split(text);

    ExtractedProfile {
        personal: extract_personal(text),
        summary: sections.get(&Section::Summary).cloned().unwrap_or_default(),
        skills: extract_skills(text, taxonomy),
        experience: sections
            .get(&Section::Experience)
            .map(|block| extract_experience(block))
            .unwrap_or_default(),
        education: sections
            .get(&Section::Education)
            .map(|block| extract_education(block))
            .unwrap_or_default(),
        certifications: sections
            .get(&Section::Certifications)
            .map(|block| {
                block
                    .lines()
                    .map(|l| l.trim().trim_start_matches(['-', '*', '•']).trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn extract_personal(text: &str) -> PersonalInfo {
    let name = text
        .lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && line.len() < 60
                && !EMAIL.is_match(line)
                && !line.chars().any(|c| c.is_ascii_digit())
        })
        .map(String::from);

    PersonalInfo {
        name,
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().trim().to_string()),
        linkedin: LINKEDIN.find(text).map(|m| m.as_str().to_string()),
        github: GITHUB.find(text).map(|m| m.as_str().to_string()),
    }
}

/// Scan the whole text for taxonomy skills, keeping up to three evidence
/// lines per skill and a proficiency guess from adjacent wording.
pub fn extract_skills(text: &str, taxonomy: &SkillTaxonomy) -> Vec<SkillRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let mut found: Vec<SkillRecord> = Vec::new();

    for (category, keyword) in taxonomy.entries() {
        let evidence: Vec<String> = lines
            .iter()
            .filter(|line| contains_term(line, keyword))
            .take(MAX_EVIDENCE_LINES)
            .map(|line| line.trim().to_string())
            .collect();
        if evidence.is_empty() {
            continue;
        }
        // skip duplicates when a keyword repeats across categories
        if found
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(keyword))
        {
            continue;
        }
        let proficiency = infer_proficiency(&evidence);
        found.push(SkillRecord {
            name: keyword.to_string(),
            category,
            requirement: None,
            proficiency: Some(proficiency),
            evidence,
        });
    }
    found
}

fn infer_proficiency(evidence: &[String]) -> Proficiency {
    let joined = evidence.join(" ").to_lowercase();
    if joined.contains("expert") {
        Proficiency::Expert
    } else if joined.contains("senior") || joined.contains("advanced") {
        Proficiency::Advanced
    } else if joined.contains("junior") || joined.contains("basic") {
        Proficiency::Beginner
    } else {
        Proficiency::Intermediate
    }
}

/// Parse an experience block: lines with a year range start a new entry, the
/// first preceding text line names the position, remaining lines describe it.
fn extract_experience(block: &str) -> Vec<ExperienceEntry> {
    let mut entries: Vec<ExperienceEntry> = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(range) = YEAR_RANGE.find(line) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            let heading = line.replace(range.as_str(), "");
            let (position, company) = split_position_company(heading.trim());
            current = Some(ExperienceEntry {
                position,
                company,
                duration: range.as_str().to_string(),
                description: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(entry) if entry.position.is_empty() => {
                    let (position, company) = split_position_company(line);
                    entry.position = position;
                    entry.company = company;
                }
                Some(entry) => {
                    if !entry.description.is_empty() {
                        entry.description.push(' ');
                    }
                    entry.description.push_str(line.trim_start_matches(['-', '*', '•']).trim());
                }
                None => {
                    let (position, company) = split_position_company(line);
                    current = Some(ExperienceEntry {
                        position,
                        company,
                        duration: String::new(),
                        description: String::new(),
                    });
                }
            }
        }
    }
    if let Some(entry) = current {
        entries.push(entry);
    }
    entries
}

fn split_position_company(line: &str) -> (String, String) {
    let cleaned = line.trim_matches(|c: char| c == ',' || c == '|' || c.is_whitespace());
    for separator in [" at ", " @ ", " - ", " | ", ", "] {
        if let Some((position, company)) = cleaned.split_once(separator) {
            return (position.trim().to_string(), company.trim().to_string());
        }
    }
    (cleaned.to_string(), String::new())
}

fn extract_education(block: &str) -> Vec<EducationEntry> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| DEGREE.is_match(line) || YEAR.is_match(line))
        .map(|line| {
            let degree = DEGREE
                .find(line)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let year = YEAR
                .find(line)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let field = line
                .split_once(" in ")
                .map(|(_, rest)| {
                    rest.split(|c: char| c == ',' || c == '|')
                        .next()
                        .unwrap_or("")
                        .trim()
                        .to_string()
                })
                .unwrap_or_default();
            let institution = line
                .split(|c: char| c == ',' || c == '|')
                .map(str::trim)
                .find(|part| {
                    let lower = part.to_lowercase();
                    lower.contains("university")
                        || lower.contains("college")
                        || lower.contains("institute")
                        || lower.contains("school")
                })
                .unwrap_or("")
                .to_string();
            EducationEntry {
                degree,
                field,
                institution,
                year,
            }
        })
        .collect()
}
