// src/scoring.rs
//! Weighted composite scoring: the ATS category breakdown and the lighter
//! four-factor match score used for the quick summary.

use crate::config::{CategoryWeights, ScoreWeights};
use crate::keywords::{contains_term, stem_tokens};
use crate::taxonomy::SkillCategory;
use crate::types::ExtractedJobPosting;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EXPERIENCE_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)years?|experience|senior|junior|lead|manager|director").unwrap());
static EDUCATION_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)degree|bachelor|master|phd|diploma").unwrap());
static CERTIFICATION_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)certif").unwrap());

/// Categories of the ATS composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    TechnicalSkills,
    SoftSkills,
    Experience,
    Education,
    Certifications,
    ToolsTechnologies,
    IndustryTerms,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::TechnicalSkills,
        ScoreCategory::SoftSkills,
        ScoreCategory::Experience,
        ScoreCategory::Education,
        ScoreCategory::Certifications,
        ScoreCategory::ToolsTechnologies,
        ScoreCategory::IndustryTerms,
    ];

    fn weight(&self, weights: &CategoryWeights) -> f64 {
        match self {
            ScoreCategory::TechnicalSkills => weights.technical_skills,
            ScoreCategory::SoftSkills => weights.soft_skills,
            ScoreCategory::Experience => weights.experience,
            ScoreCategory::Education => weights.education,
            ScoreCategory::Certifications => weights.certifications,
            ScoreCategory::ToolsTechnologies => weights.tools_technologies,
            ScoreCategory::IndustryTerms => weights.industry_terms,
        }
    }
}

/// Map a taxonomy skill category onto its scoring category.
fn score_category_for(skill_category: SkillCategory) -> ScoreCategory {
    match skill_category {
        SkillCategory::SoftSkills => ScoreCategory::SoftSkills,
        SkillCategory::Tools => ScoreCategory::ToolsTechnologies,
        _ => ScoreCategory::TechnicalSkills,
    }
}

/// Assign a free keyword (not a taxonomy skill) to a scoring category.
fn score_category_for_keyword(keyword: &str) -> ScoreCategory {
    if CERTIFICATION_TERM.is_match(keyword) {
        ScoreCategory::Certifications
    } else if EDUCATION_TERM.is_match(keyword) {
        ScoreCategory::Education
    } else if EXPERIENCE_TERM.is_match(keyword) {
        ScoreCategory::Experience
    } else {
        ScoreCategory::IndustryTerms
    }
}

/// Per-category scores: `100 * matched / required`, 0 when the posting has
/// no terms in that category. All categories are present in the output map.
pub fn category_scores(
    posting: &ExtractedJobPosting,
    jd_keywords: &[String],
    resume_text: &str,
) -> BTreeMap<ScoreCategory, f64> {
    let resume_stems = stem_tokens(resume_text);
    let mut required: BTreeMap<ScoreCategory, usize> = BTreeMap::new();
    let mut matched: BTreeMap<ScoreCategory, usize> = BTreeMap::new();

    let mut tally = |category: ScoreCategory, hit: bool| {
        *required.entry(category).or_insert(0) += 1;
        if hit {
            *matched.entry(category).or_insert(0) += 1;
        }
    };

    // Skill names are surface forms, keywords are stems; each side is
    // matched in its own normalization.
    for skill in posting.all_skills() {
        tally(
            score_category_for(skill.category),
            contains_term(resume_text, &skill.name),
        );
    }
    for keyword in jd_keywords {
        tally(
            score_category_for_keyword(keyword),
            resume_stems.contains(keyword.as_str()),
        );
    }

    ScoreCategory::ALL
        .iter()
        .map(|&category| {
            let total = required.get(&category).copied().unwrap_or(0);
            let hits = matched.get(&category).copied().unwrap_or(0);
            let score = if total == 0 {
                0.0
            } else {
                (hits as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
            };
            (category, score)
        })
        .collect()
}

/// Weighted composite over the category scores, rounded to [0, 100].
pub fn ats_score(scores: &BTreeMap<ScoreCategory, f64>, weights: &CategoryWeights) -> u8 {
    let total: f64 = scores
        .iter()
        .map(|(category, score)| score * category.weight(weights))
        .sum();
    total.round().clamp(0.0, 100.0) as u8
}

/// `100 * exact / (exact + missing)`, 0 when the universe is empty.
pub fn keyword_density(exact_matches: usize, missing_keywords: usize) -> f64 {
    let universe = exact_matches + missing_keywords;
    if universe == 0 {
        0.0
    } else {
        exact_matches as f64 / universe as f64 * 100.0
    }
}

/// Presence heuristic: 100 when the résumé shows the signal, 50 otherwise.
fn presence_signal(resume_lower: &str, terms: &[&str]) -> f64 {
    if terms.iter().any(|t| resume_lower.contains(t)) {
        100.0
    } else {
        50.0
    }
}

/// The lightweight résumé-vs-JD match score: weighted sum of the skill match
/// ratio, keyword density, and two presence heuristics, each in [0, 100].
pub fn match_score(
    weights: &ScoreWeights,
    matched_skills: usize,
    jd_skills: usize,
    density: f64,
    resume_text: &str,
) -> u8 {
    let skill_ratio = if jd_skills == 0 {
        0.0
    } else {
        matched_skills as f64 / jd_skills as f64 * 100.0
    };

    let resume_lower = resume_text.to_lowercase();
    let experience_signal = presence_signal(&resume_lower, &["experience", "years"]);
    let education_signal = presence_signal(&resume_lower, &["education", "degree"]);

    let score = skill_ratio * weights.skills
        + density * weights.keywords
        + experience_signal * weights.experience
        + education_signal * weights.education;
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;
    use crate::types::SkillRecord;

    fn skill(name: &str, category: SkillCategory) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            category,
            requirement: None,
            proficiency: None,
            evidence: Vec::new(),
        }
    }

    #[test]
    fn test_keyword_density() {
        assert_eq!(keyword_density(6, 4), 60.0);
        assert_eq!(keyword_density(0, 0), 0.0);
        assert_eq!(keyword_density(3, 0), 100.0);
    }

    #[test]
    fn test_category_scores_partition() {
        let posting = ExtractedJobPosting {
            required_skills: vec![
                skill("JavaScript", SkillCategory::Programming),
                skill("Communication", SkillCategory::SoftSkills),
                skill("Git", SkillCategory::Tools),
            ],
            ..Default::default()
        };
        let scores = category_scores(
            &posting,
            &[],
            "Fluent in JavaScript with strong communication.",
        );
        assert_eq!(scores[&ScoreCategory::TechnicalSkills], 100.0);
        assert_eq!(scores[&ScoreCategory::SoftSkills], 100.0);
        assert_eq!(scores[&ScoreCategory::ToolsTechnologies], 0.0);
        // no required terms in that category at all
        assert_eq!(scores[&ScoreCategory::Education], 0.0);
    }

    #[test]
    fn test_stemmed_keywords_match_surface_forms() {
        let posting = ExtractedJobPosting::default();
        let scores = category_scores(
            &posting,
            &["manage".to_string()],
            "Management of a five-person team, management duties daily.",
        );
        assert_eq!(scores[&ScoreCategory::IndustryTerms], 100.0);
    }

    #[test]
    fn test_ats_score_full_match_is_weighted_sum() {
        let posting = ExtractedJobPosting {
            required_skills: vec![skill("Python", SkillCategory::Programming)],
            ..Default::default()
        };
        let scores = category_scores(&posting, &[], "python everywhere");
        let ats = ats_score(&scores, &CategoryWeights::default());
        // only technical skills carry signal: 100 * 0.25
        assert_eq!(ats, 25);
    }

    #[test]
    fn test_match_score_bounds_and_signals() {
        let weights = ScoreWeights::default();
        // full skills + full density + both presence signals
        let full = match_score(&weights, 3, 3, 100.0, "experience and education");
        assert_eq!(full, 100);

        // empty resume: no skills, no keywords, low presence signals
        let empty = match_score(&weights, 0, 0, 0.0, "");
        assert_eq!(empty, 15);
    }

    #[test]
    fn test_match_score_two_thirds_skills() {
        let weights = ScoreWeights::default();
        // 2/3 skills -> 26.7 from the skill term alone
        let score = match_score(&weights, 2, 3, 0.0, "");
        assert_eq!(score, (2.0_f64 / 3.0 * 40.0 + 15.0).round() as u8);
    }
}
