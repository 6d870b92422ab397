// src/lib.rs
//! Resume and job-posting matching engine.
//!
//! Takes the raw text of a résumé and a job posting, extracts structured
//! profiles from both, and produces a JSON-serializable report: match and
//! ATS scores, keyword and skill gaps, ranked suggestions and a hiring
//! probability projection. Extraction heuristics can optionally be refined
//! by an external enhancer behind a bounded timeout.

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod error;
pub mod extractor;
pub mod keywords;
pub mod scoring;
pub mod similarity;
pub mod suggestions;
pub mod taxonomy;
pub mod types;

pub use analyzer::ResumeAnalyzer;
pub use cache::AnalysisCache;
pub use config::{CategoryWeights, EngineConfig, ScoreWeights};
pub use error::EngineError;
pub use extractor::{Enhancer, HeadingSplitter, HttpEnhancer, NoopEnhancer, SectionSplitter};
pub use scoring::ScoreCategory;
pub use taxonomy::{SkillCategory, SkillTaxonomy};
pub use types::AnalysisReport;

/// Analyze with default configuration and taxonomy.
pub async fn analyze_resume(
    resume_text: &str,
    job_text: &str,
) -> Result<AnalysisReport, EngineError> {
    let analyzer = ResumeAnalyzer::new(EngineConfig::default(), SkillTaxonomy::default())?;
    Ok(analyzer.analyze(resume_text, job_text).await)
}
