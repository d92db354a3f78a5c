use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// The hash is logged when a harvest starts so that reports can be tied back to the
/// exact configuration that produced them.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
timeout-ms = 2500

[fetch.headers]
User-Agent = "TestAgent/1.0"

[language]
allow-list = ["en", "pl", "de"]
fallback = "pl-PL"

[harvest]
max-concurrent-sources = 8
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.timeout_ms, 2500);
        assert_eq!(config.fetch.headers.len(), 1);
        assert_eq!(config.fetch.headers["User-Agent"], "TestAgent/1.0");
        assert_eq!(config.language.allow_list, vec!["en", "pl", "de"]);
        assert_eq!(config.language.fallback, "pl-PL");
        assert_eq!(config.harvest.max_concurrent_sources, 8);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.fetch.timeout_ms, 10_000);
        assert!(config.fetch.headers.contains_key("User-Agent"));
        assert_eq!(config.language.allow_list, vec!["en", "pl"]);
        assert_eq!(config.language.fallback, "en-US");
        assert_eq!(config.harvest.max_concurrent_sources, 4);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[language]\nfallback = \"pl\"\n").unwrap();

        assert_eq!(config.language.fallback, "pl");
        assert_eq!(config.language.allow_list, vec!["en", "pl"]);
        assert_eq!(config.fetch.timeout_ms, 10_000);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[fetch]\ntimeout-ms = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("[fetch]\ntimeout-ms = 1000\n");
        let file2 = create_temp_config("[fetch]\ntimeout-ms = 2000\n");

        let (_, hash1) = load_config_with_hash(file1.path()).unwrap();
        let (_, hash2) = load_config_with_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
