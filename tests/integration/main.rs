//! Integration tests for Page-Harvest
//!
//! These tests use wiremock to create mock HTTP servers. The fetcher is blocking, so
//! every fetcher is created, used and dropped inside `spawn_blocking`.

mod fetch_tests;
mod harvest_tests;

use page_harvest::config::Config;

/// Runs blocking work off the async test runtime
pub async fn blocking<T, F>(work: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .expect("blocking task panicked")
}

/// Creates a test configuration with a short timeout
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetch.timeout_ms = 2_000;
    config
}
