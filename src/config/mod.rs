//! Configuration module for Page-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to the defaults used by
//! [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use page_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Fetch timeout: {}ms", config.fetch.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_headers, Config, FetchConfig, HarvestConfig, LanguageConfig, DEFAULT_LANGUAGE_FALLBACK,
    DEFAULT_TIMEOUT_MS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
