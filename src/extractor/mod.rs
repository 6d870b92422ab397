// src/extractor/mod.rs
//! Text-to-structure extraction: heuristic parsers for résumés and job
//! postings, plus an optional enrichment hop behind a bounded timeout.

pub mod enhancer;
pub mod http;
pub mod job;
pub mod profile;
pub mod sections;

pub use enhancer::{Enhancer, JobPostingPatch, NoopEnhancer, ProfilePatch};
pub use http::HttpEnhancer;
pub use sections::{HeadingSplitter, Section, SectionSplitter};

use crate::taxonomy::SkillTaxonomy;
use crate::types::{ExtractedJobPosting, ExtractedProfile};
use std::time::Duration;
use tracing::warn;

/// Extract a résumé, then let the enhancer refine the draft. Enhancer
/// failure or timeout falls back to the heuristic draft.
pub async fn extract_profile_enhanced(
    text: &str,
    taxonomy: &SkillTaxonomy,
    splitter: &dyn SectionSplitter,
    enhancer: &dyn Enhancer,
    timeout: Duration,
) -> ExtractedProfile {
    let draft = profile::extract_profile(text, taxonomy, splitter);
    match tokio::time::timeout(timeout, enhancer.enhance_profile(text, &draft)).await {
        Ok(Ok(patch)) => patch.apply(draft),
        Ok(Err(e)) => {
            warn!("Profile enhancer failed, using heuristic draft: {:#}", e);
            draft
        }
        Err(_) => {
            warn!("Profile enhancer timed out after {:?}", timeout);
            draft
        }
    }
}

/// Job-posting counterpart of [`extract_profile_enhanced`].
pub async fn extract_job_posting_enhanced(
    text: &str,
    taxonomy: &SkillTaxonomy,
    enhancer: &dyn Enhancer,
    timeout: Duration,
) -> ExtractedJobPosting {
    let draft = job::extract_job_posting(text, taxonomy);
    match tokio::time::timeout(timeout, enhancer.enhance_job_posting(text, &draft)).await {
        Ok(Ok(patch)) => patch.apply(draft),
        Ok(Err(e)) => {
            warn!("Job enhancer failed, using heuristic draft: {:#}", e);
            draft
        }
        Err(_) => {
            warn!("Job enhancer timed out after {:?}", timeout);
            draft
        }
    }
}
