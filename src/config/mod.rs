//! Configuration management for comfygate
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use comfygate::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Rendering server at: {}", config.upstream.base_url);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `COMFYGATE__<section>__<key>`
//!
//! Examples:
//! - `COMFYGATE__UPSTREAM__BASE_URL=http://render-host:8188`
//! - `COMFYGATE__UPSTREAM__PROBE_RETRIES=50`
//! - `COMFYGATE__INPUT__MAX_PAYLOAD_BYTES=10MB`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/comfygate.toml`.
//! This can be overridden using the `COMFYGATE_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

// Re-export public types
pub use crate::humanize::ByteSize;
pub use models::{Config, InputConfig, UpstreamConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`COMFYGATE__*`)
    /// 2. TOML file (default: `config/comfygate.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (bad URL scheme, zero budgets, etc.)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
