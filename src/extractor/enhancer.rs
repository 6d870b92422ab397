// src/extractor/enhancer.rs
//! Optional enrichment port. An enhancer sees the raw text plus the heuristic
//! draft and may return partial overrides; absent fields keep the draft value.

use crate::types::{
    EducationEntry, ExperienceEntry, ExtractedJobPosting, ExtractedProfile, SkillRecord,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Partial override for an extracted profile. Every field is optional;
/// `None` means "keep what the heuristics produced".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

impl ProfilePatch {
    pub fn apply(self, mut draft: ExtractedProfile) -> ExtractedProfile {
        if let Some(summary) = self.summary {
            draft.summary = summary;
        }
        if let Some(skills) = self.skills {
            draft.skills = skills;
        }
        if let Some(experience) = self.experience {
            draft.experience = experience;
        }
        if let Some(education) = self.education {
            draft.education = education;
        }
        if let Some(certifications) = self.certifications {
            draft.certifications = certifications;
        }
        draft
    }
}

/// Partial override for an extracted job posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPostingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<SkillRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<SkillRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_requirements: Option<Vec<String>>,
}

impl JobPostingPatch {
    pub fn apply(self, mut draft: ExtractedJobPosting) -> ExtractedJobPosting {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(required) = self.required_skills {
            draft.required_skills = required;
        }
        if let Some(preferred) = self.preferred_skills {
            draft.preferred_skills = preferred;
        }
        if let Some(years) = self.min_experience_years {
            draft.min_experience_years = Some(years);
        }
        if let Some(education) = self.education_requirements {
            draft.education_requirements = education;
        }
        draft
    }
}

/// Enrichment backend. Implementations are queried under a bounded timeout;
/// errors are logged and the heuristic draft is used as-is.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance_profile(&self, text: &str, draft: &ExtractedProfile) -> Result<ProfilePatch>;

    async fn enhance_job_posting(
        &self,
        text: &str,
        draft: &ExtractedJobPosting,
    ) -> Result<JobPostingPatch>;
}

/// Default enhancer: returns empty patches, keeping heuristic output.
#[derive(Debug, Default, Clone)]
pub struct NoopEnhancer;

#[async_trait]
impl Enhancer for NoopEnhancer {
    async fn enhance_profile(&self, _text: &str, _draft: &ExtractedProfile) -> Result<ProfilePatch> {
        Ok(ProfilePatch::default())
    }

    async fn enhance_job_posting(
        &self,
        _text: &str,
        _draft: &ExtractedJobPosting,
    ) -> Result<JobPostingPatch> {
        Ok(JobPostingPatch::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_keeps_draft() {
        let draft = ExtractedProfile {
            summary: "engineer".to_string(),
            ..Default::default()
        };
        let patched = ProfilePatch::default().apply(draft.clone());
        assert_eq!(patched.summary, draft.summary);
    }

    #[test]
    fn test_patch_overrides_only_present_fields() {
        let draft = ExtractedJobPosting {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };
        let patch = JobPostingPatch {
            title: Some("Senior Engineer".to_string()),
            ..Default::default()
        };
        let patched = patch.apply(draft);
        assert_eq!(patched.title, "Senior Engineer");
        assert_eq!(patched.company, "Acme");
    }
}
