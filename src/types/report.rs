// src/types/report.rs
//! The JSON-serializable analysis report and its building blocks.

use crate::scoring::ScoreCategory;
use crate::similarity::SimilarSkill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Skill-level comparison between the résumé and the posting.
///
/// `matched` and `missing` partition the posting's skill set: every JD skill
/// lands in exactly one of the two buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub similar: Vec<SimilarSkill>,
}

/// A JD keyword paired with the résumé terms it loosely matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub matches: Vec<String>,
    pub similarity: f64,
}

/// Keyword-level comparison derived from one shared keyword universe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub exact_matches: Vec<String>,
    pub similar_matches: Vec<KeywordMatch>,
    pub related_terms: Vec<KeywordMatch>,
    pub missing_keywords: Vec<String>,
    /// Percentage of JD keywords found exactly, in [0, 100].
    pub density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Critical,
    Enhancement,
    Optimization,
}

/// One ranked, actionable improvement. Lists of suggestions are always
/// sorted ascending by `priority` (1 = most urgent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub category: String,
    pub title: String,
    pub description: String,
    pub action: String,
    pub priority: u8,
    pub expected_impact: f64,
}

/// Current vs. post-optimization hiring probability.
/// Invariant: `current <= optimized <= 100`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HiringProbability {
    pub current: u8,
    pub optimized: u8,
    pub improvement: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceAssessment {
    pub alignment: u8,
    pub gaps: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationAssessment {
    pub meets_requirements: bool,
    pub notes: String,
}

/// Top-level output of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Weighted composite match score in [0, 100].
    pub match_score: u8,
    /// ATS-category composite score in [0, 100].
    pub ats_score: u8,
    pub category_scores: BTreeMap<ScoreCategory, f64>,
    pub keywords: KeywordAnalysis,
    pub skills_match: MatchResult,
    pub experience: ExperienceAssessment,
    pub education: EducationAssessment,
    pub suggestions: Vec<Suggestion>,
    pub next_steps: Vec<String>,
    pub hiring_probability: HiringProbability,
    pub analyzed_at: DateTime<Utc>,
}
