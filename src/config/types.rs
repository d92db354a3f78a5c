use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default timeout for a single page fetch (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Language reported when a page declares nothing usable
pub const DEFAULT_LANGUAGE_FALLBACK: &str = "en-US";

/// Main configuration structure for Page-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub language: LanguageConfig,
    pub harvest: HarvestConfig,
}

/// Network retrieval configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request headers sent with every fetch
    pub headers: BTreeMap<String, String>,

    /// Upper bound on a single fetch, connection included (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            headers: default_headers(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Language detection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Substrings a declared language must contain to be accepted
    #[serde(rename = "allow-list")]
    pub allow_list: Vec<String>,

    /// Language reported when the page declares none or an unlisted one
    pub fallback: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            allow_list: vec!["en".to_string(), "pl".to_string()],
            fallback: DEFAULT_LANGUAGE_FALLBACK.to_string(),
        }
    }
}

/// Batch harvesting configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Maximum number of sources fetched at the same time
    #[serde(rename = "max-concurrent-sources")]
    pub max_concurrent_sources: u32,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            max_concurrent_sources: 4,
        }
    }
}

/// Browser-like request headers
///
/// Many sites serve reduced or blocked content to unknown agents, so requests look
/// like a desktop browser by default.
pub fn default_headers() -> BTreeMap<String, String> {
    [
        (
            "User-Agent",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11",
        ),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Accept-Charset", "ISO-8859-1,utf-8;q=0.7,*;q=0.3"),
        ("Accept-Language", "en-US,en;q=0.8"),
        ("Connection", "keep-alive"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}
