// src/extractor/http.rs
//! HTTP-backed enhancer. Posts the raw text plus the heuristic draft to an
//! external extraction service and returns whatever overrides it produces.

use super::enhancer::{Enhancer, JobPostingPatch, ProfilePatch};
use crate::types::{ExtractedJobPosting, ExtractedProfile};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::env;
use tracing::info;

#[derive(Serialize)]
struct EnhanceRequest<'a, T: Serialize> {
    text: &'a str,
    draft: &'a T,
}

pub struct HttpEnhancer {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl HttpEnhancer {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let api_key = env::var("ENHANCER_API_KEY").ok();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    async fn post<T: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        text: &str,
        draft: &T,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        info!("Sending extraction request to {}", url);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&EnhanceRequest { text, draft });
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to enhancer service")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Enhancer service returned error {}: {}", status, error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse enhancer response")
    }
}

#[async_trait]
impl Enhancer for HttpEnhancer {
    async fn enhance_profile(&self, text: &str, draft: &ExtractedProfile) -> Result<ProfilePatch> {
        self.post("/extract/resume", text, draft).await
    }

    async fn enhance_job_posting(
        &self,
        text: &str,
        draft: &ExtractedJobPosting,
    ) -> Result<JobPostingPatch> {
        self.post("/extract/job", text, draft).await
    }
}
