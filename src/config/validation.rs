use crate::config::types::{Config, FetchConfig, HarvestConfig, LanguageConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};

/// Longest fetch timeout accepted (5 minutes)
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Largest worker pool accepted for batch harvesting
const MAX_CONCURRENT_SOURCES: u32 = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_language_config(&config.language)?;
    validate_harvest_config(&config.harvest)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_ms < 1 || config.timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be between 1 and {}, got {}",
            MAX_TIMEOUT_MS, config.timeout_ms
        )));
    }

    for (name, value) in &config.headers {
        validate_header(name, value)?;
    }

    Ok(())
}

/// Validates a single request header
fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;

    HeaderValue::from_str(value).map_err(|_| {
        ConfigError::InvalidHeader(format!("invalid value for header '{}'", name))
    })?;

    Ok(())
}

/// Validates language configuration
fn validate_language_config(config: &LanguageConfig) -> Result<(), ConfigError> {
    if config.fallback.trim().is_empty() {
        return Err(ConfigError::Validation(
            "language fallback cannot be empty".to_string(),
        ));
    }

    // An empty entry would be a substring of every declared language
    if config.allow_list.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "language allow-list cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

/// Validates batch harvesting configuration
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_sources < 1 || config.max_concurrent_sources > MAX_CONCURRENT_SOURCES
    {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-sources must be between 1 and {}, got {}",
            MAX_CONCURRENT_SOURCES, config.max_concurrent_sources
        )));
    }

    Ok(())
}
