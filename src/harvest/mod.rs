//! Batch harvesting of source pages
//!
//! Each source gets its own [`Resource`] and is processed on a blocking worker, so
//! several sources can be fetched at once while no state is shared between them. A
//! semaphore bounds the number of sources in flight.

use crate::config::{Config, LanguageConfig};
use crate::extract::{extract_metadata, harvest_links, ExtractedMetadata, LinkSet};
use crate::fetch::{FetchError, Fetcher};
use crate::page::Resource;
use crate::UrlError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Everything derived from one source URL
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub url: String,

    /// Title, language and domain, or the reason the URL was rejected
    pub metadata: Result<ExtractedMetadata, UrlError>,

    /// Same-origin links found on the page
    pub links: LinkSet,

    /// Why the page content was unavailable, if it was
    pub fetch_error: Option<FetchError>,

    pub harvested_at: DateTime<Utc>,
}

impl SourceReport {
    /// Returns true if the page was fetched and the URL was well formed
    pub fn is_success(&self) -> bool {
        self.metadata.is_ok() && self.fetch_error.is_none()
    }
}

/// Harvests a single source on the current thread
///
/// This blocks for at most the fetcher's timeout.
pub fn harvest_source<F: Fetcher>(
    url: &str,
    fetcher: F,
    language: &LanguageConfig,
) -> SourceReport {
    let mut resource = Resource::new(url, fetcher);

    let metadata = extract_metadata(&mut resource, language);
    let links = harvest_links(&mut resource);
    let fetch_error = resource.state().error().cloned();

    match &metadata {
        Ok(meta) => tracing::info!(
            url,
            domain = %meta.domain,
            links = links.len(),
            available = fetch_error.is_none(),
            "harvested source"
        ),
        Err(error) => tracing::warn!(url, %error, "rejected source"),
    }

    SourceReport {
        url: url.to_string(),
        metadata,
        links,
        fetch_error,
        harvested_at: Utc::now(),
    }
}

/// Harvests many sources concurrently, one blocking worker per source
///
/// At most `config.harvest.max_concurrent_sources` sources are fetched at the same
/// time. Reports are returned in the order of `urls`.
///
/// # Errors
///
/// * `HarvestError::Join` - A worker panicked
pub async fn harvest_sources<F>(
    fetcher: &F,
    urls: Vec<String>,
    config: &Config,
) -> crate::Result<Vec<SourceReport>>
where
    F: Fetcher + Clone + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(config.harvest.max_concurrent_sources as usize));
    let language = Arc::new(config.language.clone());
    let mut workers = Vec::with_capacity(urls.len());

    tracing::info!(
        sources = urls.len(),
        workers = config.harvest.max_concurrent_sources,
        "starting harvest"
    );

    for url in urls {
        let permit = semaphore.clone().acquire_owned().await?;
        let fetcher = fetcher.clone();
        let language = language.clone();

        workers.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            harvest_source(&url, fetcher, &language)
        }));
    }

    let mut reports = Vec::with_capacity(workers.len());
    for worker in workers {
        reports.push(worker.await?);
    }

    Ok(reports)
}
