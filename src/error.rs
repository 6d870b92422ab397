// src/error.rs
use thiserror::Error;

/// Errors surfaced by the matching engine.
///
/// Analysis itself is total: any pair of input strings produces a report.
/// The only fallible surface is construction-time validation of the
/// configuration and skill taxonomy.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("category weights must sum to 1.0, got {0}")]
    InvalidWeights(f64),

    #[error("similarity threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    #[error("skill taxonomy contains no keywords")]
    EmptyTaxonomy,

    #[error("failed to parse taxonomy file: {0}")]
    TaxonomyParse(#[from] toml::de::Error),
}
