// src/suggestions.rs
//! Gap analysis: ranked improvement suggestions, next steps and the hiring
//! probability projection derived from them.

use crate::types::{
    ExtractedJobPosting, ExtractedProfile, HiringProbability, KeywordAnalysis, MatchResult,
    Suggestion, SuggestionType,
};
use once_cell::sync::Lazy;
use regex::Regex;

static QUANTIFIED_ACHIEVEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$\d+|\d+\+?\s*years").unwrap());

const MISSING_SKILLS_LISTED: usize = 5;
const MISSING_SKILLS_MAX_IMPACT: f64 = 20.0;
const MISSING_SKILLS_MIN_IMPACT: f64 = 5.0;
const KEYWORD_GAP_IMPACT: f64 = 12.0;
const LOW_DENSITY_IMPACT: f64 = 8.0;
const ACHIEVEMENTS_IMPACT: f64 = 10.0;
const FOCUS_IMPACT: f64 = 5.0;
const EDUCATION_IMPACT: f64 = 10.0;

pub struct SuggestionInput<'a> {
    pub resume_text: &'a str,
    pub profile: &'a ExtractedProfile,
    pub posting: &'a ExtractedJobPosting,
    pub skills: &'a MatchResult,
    pub keywords: &'a KeywordAnalysis,
    pub keyword_gap_threshold: usize,
    pub surplus_skill_threshold: usize,
    pub low_density_threshold: f64,
}

/// Build the full suggestion list, sorted ascending by priority.
pub fn build_suggestions(input: &SuggestionInput<'_>) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let jd_skill_count = input.skills.matched.len() + input.skills.missing.len();
    if !input.skills.missing.is_empty() {
        // Impact scales with how much of the posting's skill set is absent.
        let fraction = input.skills.missing.len() as f64 / jd_skill_count as f64;
        let impact = (MISSING_SKILLS_MAX_IMPACT * fraction)
            .round()
            .max(MISSING_SKILLS_MIN_IMPACT);
        suggestions.push(Suggestion {
            kind: SuggestionType::Critical,
            category: "Skills".to_string(),
            title: "Add missing required skills".to_string(),
            description: format!(
                "The posting asks for {} skills your resume does not mention: {}.",
                input.skills.missing.len(),
                input.skills.missing[..input.skills.missing.len().min(MISSING_SKILLS_LISTED)]
                    .join(", ")
            ),
            action: "Add the skills you genuinely have to your skills section with supporting project or work examples.".to_string(),
            priority: 1,
            expected_impact: impact,
        });
    }

    if input.posting.requires_education() && input.profile.education.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionType::Critical,
            category: "Education".to_string(),
            title: "Add an education section".to_string(),
            description: "The posting states education requirements but your resume lists no education.".to_string(),
            action: "Add your degrees, certifications or relevant coursework in a dedicated education section.".to_string(),
            priority: 2,
            expected_impact: EDUCATION_IMPACT,
        });
    }

    if input.keywords.missing_keywords.len() > input.keyword_gap_threshold {
        suggestions.push(Suggestion {
            kind: SuggestionType::Critical,
            category: "Keywords".to_string(),
            title: "Close the keyword gap".to_string(),
            description: format!(
                "{} important terms from the posting never appear in your resume.",
                input.keywords.missing_keywords.len()
            ),
            action: "Work the posting's recurring terminology into your summary and experience bullets where it is accurate.".to_string(),
            priority: 2,
            expected_impact: KEYWORD_GAP_IMPACT,
        });
    }

    if input.keywords.density < input.low_density_threshold {
        suggestions.push(Suggestion {
            kind: SuggestionType::Enhancement,
            category: "Content".to_string(),
            title: "Increase keyword coverage".to_string(),
            description: format!(
                "Only {:.0}% of the posting's keywords appear verbatim in your resume.",
                input.keywords.density
            ),
            action: "Mirror the posting's phrasing for the skills and duties you already cover.".to_string(),
            priority: 3,
            expected_impact: LOW_DENSITY_IMPACT,
        });
    }

    if !QUANTIFIED_ACHIEVEMENT.is_match(input.resume_text) {
        suggestions.push(Suggestion {
            kind: SuggestionType::Enhancement,
            category: "Achievements".to_string(),
            title: "Quantify your achievements".to_string(),
            description: "No measurable results (percentages, amounts, durations) were found in your resume.".to_string(),
            action: "Rewrite experience bullets around concrete numbers: growth percentages, revenue, users, time saved.".to_string(),
            priority: 4,
            expected_impact: ACHIEVEMENTS_IMPACT,
        });
    }

    if input.skills.extra.len() > input.surplus_skill_threshold {
        suggestions.push(Suggestion {
            kind: SuggestionType::Optimization,
            category: "Focus".to_string(),
            title: "Trim unrelated skills".to_string(),
            description: format!(
                "{} listed skills are not relevant to this posting and dilute its focus.",
                input.skills.extra.len()
            ),
            action: "Move skills the posting does not ask for to the end of the list or drop them for this application.".to_string(),
            priority: 5,
            expected_impact: FOCUS_IMPACT,
        });
    }

    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

/// Project hiring probability: critical fixes raise the current score, capped
/// at 100. `current <= optimized <= 100` always holds.
pub fn project_hiring_probability(match_score: u8, suggestions: &[Suggestion]) -> HiringProbability {
    let critical_impact: f64 = suggestions
        .iter()
        .filter(|s| s.kind == SuggestionType::Critical)
        .map(|s| s.expected_impact)
        .sum();
    let current = match_score.min(100);
    let optimized = (current as f64 + critical_impact).round().min(100.0) as u8;
    HiringProbability {
        current,
        optimized,
        improvement: optimized - current,
    }
}

/// Short prioritized to-do list shown alongside the suggestions.
pub fn next_steps(keywords: &KeywordAnalysis) -> Vec<String> {
    let mut steps = Vec::new();
    if keywords.missing_keywords.len() > 5 {
        steps.push(
            "High priority: add the posting's missing keywords to your resume where truthful."
                .to_string(),
        );
    }
    if !keywords.similar_matches.is_empty() {
        steps.push(
            "Medium priority: align your wording with the posting's exact terms instead of near-synonyms."
                .to_string(),
        );
    }
    let universe = keywords.exact_matches.len() + keywords.missing_keywords.len();
    if universe > 0 && keywords.density < 50.0 {
        steps.push(
            "Focus: fewer than half of the posting's keywords are covered; close that gap before applying."
                .to_string(),
        );
    }
    if steps.is_empty() {
        steps.push(
            "Your resume aligns well with this posting. Review phrasing once more and apply."
                .to_string(),
        );
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input<'a>(
        resume_text: &'a str,
        profile: &'a ExtractedProfile,
        posting: &'a ExtractedJobPosting,
        skills: &'a MatchResult,
        keywords: &'a KeywordAnalysis,
    ) -> SuggestionInput<'a> {
        SuggestionInput {
            resume_text,
            profile,
            posting,
            skills,
            keywords,
            keyword_gap_threshold: 5,
            surplus_skill_threshold: 5,
            low_density_threshold: 50.0,
        }
    }

    #[test]
    fn test_missing_skills_impact_is_proportional() {
        let profile = ExtractedProfile::default();
        let posting = ExtractedJobPosting::default();
        let skills = MatchResult {
            matched: vec!["rust".to_string()],
            missing: vec!["go".to_string()],
            ..Default::default()
        };
        let keywords = KeywordAnalysis {
            density: 100.0,
            ..Default::default()
        };
        let input = base_input(
            "Grew revenue 40% over 3+ years",
            &profile,
            &posting,
            &skills,
            &keywords,
        );
        let suggestions = build_suggestions(&input);
        let skill_fix = suggestions.iter().find(|s| s.category == "Skills").unwrap();
        // half the skill set missing: 20 * 0.5
        assert_eq!(skill_fix.expected_impact, 10.0);
        assert_eq!(skill_fix.kind, SuggestionType::Critical);
    }

    #[test]
    fn test_missing_skills_impact_has_floor() {
        let profile = ExtractedProfile::default();
        let posting = ExtractedJobPosting::default();
        let skills = MatchResult {
            matched: (0..19).map(|i| format!("skill{}", i)).collect(),
            missing: vec!["rust".to_string()],
            ..Default::default()
        };
        let keywords = KeywordAnalysis {
            density: 100.0,
            ..Default::default()
        };
        let input = base_input("Saved $2000", &profile, &posting, &skills, &keywords);
        let suggestions = build_suggestions(&input);
        let skill_fix = suggestions.iter().find(|s| s.category == "Skills").unwrap();
        // 20 * 1/20 rounds to 1, floored at 5
        assert_eq!(skill_fix.expected_impact, 5.0);
    }

    #[test]
    fn test_suggestions_sorted_by_priority() {
        let profile = ExtractedProfile::default();
        let posting = ExtractedJobPosting {
            education_requirements: vec!["Bachelor's degree".to_string()],
            ..Default::default()
        };
        let skills = MatchResult {
            missing: vec!["rust".to_string()],
            extra: (0..8).map(|i| format!("extra{}", i)).collect(),
            ..Default::default()
        };
        let keywords = KeywordAnalysis {
            missing_keywords: (0..7).map(|i| format!("kw{}", i)).collect(),
            density: 20.0,
            ..Default::default()
        };
        let input = base_input("no numbers here", &profile, &posting, &skills, &keywords);
        let suggestions = build_suggestions(&input);
        assert_eq!(suggestions.len(), 6);
        for pair in suggestions.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn test_education_suggestion_requires_jd_demand() {
        let profile = ExtractedProfile::default();
        let posting = ExtractedJobPosting::default();
        let skills = MatchResult::default();
        let keywords = KeywordAnalysis {
            density: 100.0,
            ..Default::default()
        };
        let input = base_input("Grew 10%", &profile, &posting, &skills, &keywords);
        let suggestions = build_suggestions(&input);
        assert!(suggestions.iter().all(|s| s.category != "Education"));
    }

    #[test]
    fn test_hiring_probability_invariants() {
        let suggestions = vec![Suggestion {
            kind: SuggestionType::Critical,
            category: "Skills".to_string(),
            title: String::new(),
            description: String::new(),
            action: String::new(),
            priority: 1,
            expected_impact: 20.0,
        }];
        let low = project_hiring_probability(40, &suggestions);
        assert_eq!(low.current, 40);
        assert_eq!(low.optimized, 60);
        assert_eq!(low.improvement, 20);

        let high = project_hiring_probability(95, &suggestions);
        assert_eq!(high.optimized, 100);
        assert_eq!(high.improvement, 5);
        assert!(high.current <= high.optimized && high.optimized <= 100);
    }

    #[test]
    fn test_non_critical_suggestions_do_not_move_probability() {
        let suggestions = vec![Suggestion {
            kind: SuggestionType::Enhancement,
            category: "Content".to_string(),
            title: String::new(),
            description: String::new(),
            action: String::new(),
            priority: 3,
            expected_impact: 8.0,
        }];
        let projected = project_hiring_probability(50, &suggestions);
        assert_eq!(projected.current, projected.optimized);
        assert_eq!(projected.improvement, 0);
    }

    #[test]
    fn test_next_steps_default_is_positive() {
        let steps = next_steps(&KeywordAnalysis::default());
        assert_eq!(steps.len(), 1);
        assert!(steps[0].contains("aligns well"));
    }

    #[test]
    fn test_low_keyword_coverage_adds_focus_step() {
        let keywords = KeywordAnalysis {
            exact_matches: vec!["rust".to_string()],
            missing_keywords: vec![
                "docker".to_string(),
                "terraform".to_string(),
                "ansible".to_string(),
            ],
            density: 25.0,
            ..Default::default()
        };
        let steps = next_steps(&keywords);
        assert!(steps.iter().any(|s| s.starts_with("Focus:")));
    }

    #[test]
    fn test_full_keyword_coverage_has_no_focus_step() {
        let keywords = KeywordAnalysis {
            exact_matches: vec!["rust".to_string(), "tokio".to_string()],
            density: 100.0,
            ..Default::default()
        };
        let steps = next_steps(&keywords);
        assert!(steps.iter().all(|s| !s.starts_with("Focus:")));
    }
}
