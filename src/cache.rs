// src/cache.rs
//! Content-addressed cache for analysis reports. The key covers both input
//! texts and the scoring configuration, so a config change never serves a
//! stale report.

use crate::analyzer::ResumeAnalyzer;
use crate::types::AnalysisReport;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Default)]
pub struct AnalysisCache {
    entries: Mutex<HashMap<String, Arc<AnalysisReport>>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(analyzer: &ResumeAnalyzer, resume_text: &str, job_text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(resume_text.as_bytes());
        hasher.update([0u8]);
        hasher.update(job_text.as_bytes());
        hasher.update([0u8]);
        // Config is serializable; its JSON form fingerprints the weights.
        if let Ok(config) = serde_json::to_vec(analyzer.config()) {
            hasher.update(&config);
        }
        format!("{:x}", hasher.finalize())
    }

    /// Run the analysis, reusing a cached report for identical inputs.
    pub async fn analyze(
        &self,
        analyzer: &ResumeAnalyzer,
        resume_text: &str,
        job_text: &str,
    ) -> Arc<AnalysisReport> {
        let key = Self::key(analyzer, resume_text, job_text);
        if let Some(report) = self.entries.lock().unwrap().get(&key) {
            debug!("cache hit for {}", &key[..12]);
            return Arc::clone(report);
        }

        let report = Arc::new(analyzer.analyze(resume_text, job_text).await);
        self.entries
            .lock()
            .unwrap()
            .insert(key, Arc::clone(&report));
        report
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
