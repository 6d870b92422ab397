// src/types/profile.rs
//! Entities produced by the extractors. Created fresh per analysis call,
//! never mutated afterwards, discarded at the end of the request.

use crate::taxonomy::SkillCategory;
use serde::{Deserialize, Serialize};

/// How strongly a job posting asks for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementLevel {
    Required,
    Preferred,
    Bonus,
}

/// Self-reported skill level inferred from résumé wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A single detected skill with the evidence lines it was found in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub category: SkillCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<RequirementLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub year: String,
}

/// Structured view of a résumé. Total extraction: every field has a valid
/// default, so arbitrary input (including empty text) produces a usable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub personal: PersonalInfo,
    pub summary: String,
    pub skills: Vec<SkillRecord>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
}

impl ExtractedProfile {
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// Structured view of a job posting.
///
/// Skills classified at the `bonus` level live in `preferred_skills`; the
/// per-record `requirement` field keeps the distinction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedJobPosting {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub required_skills: Vec<SkillRecord>,
    pub preferred_skills: Vec<SkillRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    pub education_requirements: Vec<String>,
    pub benefits: Vec<String>,
}

impl ExtractedJobPosting {
    /// Every skill the posting mentions, regardless of requirement level.
    pub fn all_skills(&self) -> impl Iterator<Item = &SkillRecord> {
        self.required_skills.iter().chain(self.preferred_skills.iter())
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.all_skills().map(|s| s.name.clone()).collect()
    }

    pub fn requires_education(&self) -> bool {
        !self.education_requirements.is_empty()
    }
}
