//! HTTP client for the enhancer proxy.
//!
//! Provides a minimal client plus the enhancement orchestrator: one
//! multipart upload per call with a fixed sequence of synthetic progress
//! notifications around it.

pub mod enhance;

use anyhow::{Context, Result};
use reqwest::Client;

/// HTTP client for the enhancer proxy API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        // No client-side deadline: the proxy enforces the processing window
        // and answers 408 itself; once issued, a request cannot be cancelled
        // from this side.
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: ENHANCER_API_URL (or API_URL),
    /// default `http://localhost:3000`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ENHANCER_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export the domain types callers need.
pub use enhancer_core::{
    EnhanceOptions, ProcessingProgress, ProcessingResult, ProgressStage, ProgressObserver,
    UpscaleModel,
};
