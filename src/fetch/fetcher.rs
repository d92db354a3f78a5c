//! HTTP fetcher implementation
//!
//! This module handles the HTTP request for a page:
//! - Building a blocking HTTP client with the configured headers and timeout
//! - A single GET per call, no retries
//! - Strict UTF-8 decoding of the body
//! - Error classification into [`FetchError`]

use crate::config::FetchConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::ConfigError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Blocking HTTP fetcher
///
/// Cloning is cheap and shares the underlying connection pool, so one fetcher can serve
/// many workers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the fetch configuration
    ///
    /// # Errors
    ///
    /// * `HarvestError::Config` - A configured header is not a valid HTTP header
    /// * `HarvestError::Client` - The TLS backend could not be initialised
    pub fn new(config: &FetchConfig) -> crate::Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let result = fetch_body(&self.client, url);

        match &result {
            Ok(body) => tracing::debug!(url, bytes = body.len(), "fetched page"),
            Err(error) => tracing::warn!(url, %error, "page unavailable"),
        }

        result
    }
}

/// Builds a blocking HTTP client with proper configuration
///
/// Every configured header is sent as a default header. The timeout covers the whole
/// request, connection and body included.
///
/// # Example
///
/// ```no_run
/// use page_harvest::config::FetchConfig;
/// use page_harvest::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> crate::Result<Client> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| {
                ConfigError::InvalidHeader(format!("invalid value for header '{}'", name.as_str()))
            })?;
        headers.insert(name, value);
    }

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

fn fetch_body(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response.bytes().map_err(classify_error)?;
    String::from_utf8(bytes.to_vec()).map_err(|e| FetchError::Decode(e.to_string()))
}

fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else {
        FetchError::Network(error.to_string())
    }
}
