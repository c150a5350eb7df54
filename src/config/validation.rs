use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Upstream base URL '{url}' must use http:// or https://")]
    InvalidUpstreamScheme { url: String },

    #[error("Probe retry budget must be positive")]
    ZeroProbeRetries,

    #[error("Per-probe request timeout must be positive")]
    ZeroRequestTimeout,

    #[error("max_payload_bytes must be positive")]
    ZeroPayloadLimit,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_upstream(config)?;
    validate_input_limits(config)?;
    Ok(())
}

fn validate_upstream(config: &Config) -> Result<(), ValidationError> {
    let url = &config.upstream.base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUpstreamScheme { url: url.clone() });
    }

    if config.upstream.probe_retries == 0 {
        return Err(ValidationError::ZeroProbeRetries);
    }

    if config.upstream.request_timeout_secs == 0 {
        return Err(ValidationError::ZeroRequestTimeout);
    }

    Ok(())
}

fn validate_input_limits(config: &Config) -> Result<(), ValidationError> {
    if config.input.max_payload_bytes.as_u64() == 0 {
        return Err(ValidationError::ZeroPayloadLimit);
    }

    Ok(())
}
