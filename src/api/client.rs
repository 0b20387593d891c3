use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{HealthStatus, Reading, Statistics, TimeRange};

/// HTTP client for the thermostat-monitoring API.
/// `reqwest::Client` is `Clone + Send + Sync`, so clones share one pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest reading. The API answers 404 when it has no data yet.
    pub async fn current(&self) -> Result<Reading> {
        self.get_json("/api/current", &[]).await
    }

    pub async fn temperatures(&self, range: TimeRange) -> Result<Vec<Reading>> {
        self.get_json("/api/temperatures", &[("hours", range.hours())])
            .await
    }

    pub async fn statistics(&self, range: TimeRange) -> Result<Statistics> {
        self.get_json("/api/statistics", &[("hours", range.hours())])
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, u32)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("failed to read body from {path}"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "{path} returned {status}: {}",
                String::from_utf8_lossy(&body)
            ));
        }

        serde_json::from_slice(&body).with_context(|| format!("invalid JSON from {path}"))
    }
}
