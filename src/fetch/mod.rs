//! Page retrieval
//!
//! This module contains the single network boundary of the crate:
//! - The [`Fetcher`] trait used by [`crate::page::Resource`]
//! - [`HttpFetcher`], a blocking HTTP implementation with browser-like headers
//! - [`FetchError`], the typed reason a page is unavailable
//!
//! Fetch failures are soft: they are logged and reported as values, never raised.

mod fetcher;

pub use fetcher::{build_http_client, HttpFetcher};

use thiserror::Error;

/// Why a page's content is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// DNS, connection or transport failure
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body is not valid UTF-8
    #[error("body is not valid UTF-8: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns true for failures caused by the transport rather than the payload
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout | Self::Status(_))
    }
}

/// Retrieves the raw content of a URL
///
/// Implementations perform exactly one attempt per call. Retry policy belongs to the
/// caller.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}
