//! Page-Harvest: a fault-tolerant page metadata and link extractor
//!
//! This crate fetches a source page once, derives its title, declared language and
//! origin, and harvests same-origin links for use as discovery seeds. Markup is never
//! parsed into a tree; every deriver is built on a small delimiter scanner that
//! tolerates malformed or truncated HTML.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod output;
pub mod page;
pub mod scan;

use thiserror::Error;

/// Main error type for Page-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Worker pool closed: {0}")]
    Acquire(#[from] tokio::sync::AcquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid header in config: {0}")]
    InvalidHeader(String),
}

/// Malformed source URL
///
/// This is the only hard failure of the extraction path: it describes a broken input
/// rather than an unavailable page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {reason}")]
    Parse { url: String, reason: String },

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for Page-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{
    derive_domain, derive_language, derive_title, extract_metadata, harvest_links,
    ExtractedMetadata, LinkSet,
};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use page::{FetchState, Resource};
