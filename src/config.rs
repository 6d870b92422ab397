// src/config.rs
//! Engine configuration. All scoring constants are hand-tuned defaults, not
//! normative requirements; everything here can be overridden at construction.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weights for the ATS category composite. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub experience: f64,
    pub education: f64,
    pub certifications: f64,
    pub tools_technologies: f64,
    pub industry_terms: f64,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.technical_skills
            + self.soft_skills
            + self.experience
            + self.education
            + self.certifications
            + self.tools_technologies
            + self.industry_terms
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            technical_skills: 0.25,
            soft_skills: 0.15,
            experience: 0.20,
            education: 0.10,
            certifications: 0.10,
            tools_technologies: 0.15,
            industry_terms: 0.05,
        }
    }
}

/// Weights for the lightweight match score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub keywords: f64,
    pub experience: f64,
    pub education: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.keywords + self.experience + self.education
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            keywords: 0.30,
            experience: 0.20,
            education: 0.10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub category_weights: CategoryWeights,
    pub score_weights: ScoreWeights,
    /// Minimum bigram similarity for fuzzy keyword/skill matches.
    pub similarity_threshold: f64,
    /// Minimum stemmed-token frequency for résumé keywords.
    pub min_keyword_frequency_resume: usize,
    /// Minimum stemmed-token frequency for job-posting keywords.
    pub min_keyword_frequency_job: usize,
    /// Missing-keyword count above which a critical suggestion fires.
    pub keyword_gap_threshold: usize,
    /// Résumé-only skill count above which a de-emphasis suggestion fires.
    pub surplus_skill_threshold: usize,
    /// Keyword density below which an enhancement suggestion fires.
    pub low_density_threshold: f64,
    /// Upper bound on one enhancer call before falling back.
    pub enhancer_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            category_weights: CategoryWeights::default(),
            score_weights: ScoreWeights::default(),
            similarity_threshold: 0.6,
            min_keyword_frequency_resume: 2,
            min_keyword_frequency_job: 1,
            keyword_gap_threshold: 5,
            surplus_skill_threshold: 5,
            low_density_threshold: 50.0,
            enhancer_timeout_secs: 8,
        }
    }
}

impl EngineConfig {
    pub fn with_category_weights(mut self, weights: CategoryWeights) -> Self {
        self.category_weights = weights;
        self
    }

    pub fn with_score_weights(mut self, weights: ScoreWeights) -> Self {
        self.score_weights = weights;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_enhancer_timeout(mut self, timeout: Duration) -> Self {
        self.enhancer_timeout_secs = timeout.as_secs();
        self
    }

    pub fn enhancer_timeout(&self) -> Duration {
        Duration::from_secs(self.enhancer_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let category_sum = self.category_weights.sum();
        if (category_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EngineError::InvalidWeights(category_sum));
        }
        let score_sum = self.score_weights.sum();
        if (score_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EngineError::InvalidWeights(score_sum));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(EngineError::InvalidThreshold(self.similarity_threshold));
        }
        Ok(())
    }
}
