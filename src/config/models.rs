use crate::humanize::ByteSize;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Rendering server endpoint and probe tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base HTTP URL of the rendering server
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Readiness probe attempts before giving up
    #[serde(default = "default_probe_retries")]
    pub probe_retries: u32,
    /// Fixed delay between probe attempts, in milliseconds
    #[serde(default = "default_probe_delay_ms")]
    pub probe_delay_ms: u64,
    /// Per-probe request timeout, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            probe_retries: default_probe_retries(),
            probe_delay_ms: default_probe_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8188".to_string()
}

fn default_probe_retries() -> u32 {
    500
}

fn default_probe_delay_ms() -> u64 {
    50
}

fn default_request_timeout_secs() -> u64 {
    5
}

/// Job payload limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: ByteSize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_max_payload_bytes() -> ByteSize {
    ByteSize(5 * 1024 * 1024) // 5 MB
}
