//! HTTP client for probing the rendering server

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProbeClientError {
    #[error("HTTP client build failed: {0}")]
    Build(#[from] reqwest::Error),
}

/// Probe client configuration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            // Short per-request cap so a hung server cannot stall an
            // attempt indefinitely.
            request_timeout: Duration::from_secs(5),
            user_agent: "comfygate/0.1.0".to_string(),
        }
    }
}

/// Readiness prober for a single rendering server instance.
pub struct ProbeClient {
    client: Client,
    base_url: String,
}

impl ProbeClient {
    /// Create a new probe client.
    ///
    /// * `base_url` - Base HTTP URL of the rendering server, e.g.
    ///   `http://127.0.0.1:8188`.
    pub fn new(config: ProbeConfig, base_url: String) -> Result<Self, ProbeClientError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one readiness probe.
    ///
    /// `Ok(true)` only for status 200 exactly. The server answers
    /// other statuses while extensions are still loading, so the
    /// success range is deliberately not widened to all of 2xx.
    /// Transport failures surface as the `Err` branch for the caller
    /// to absorb.
    pub async fn probe_once(&self) -> Result<bool, reqwest::Error> {
        let response = self.client.get(&self.base_url).send().await?;

        let status = response.status();
        debug!(url = %self.base_url, status = status.as_u16(), "Probe response");

        Ok(status == StatusCode::OK)
    }
}
