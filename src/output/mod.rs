//! Output module for harvest reports
//!
//! This module handles:
//! - Aggregating per-source reports into a [`HarvestSummary`]
//! - Rendering reports as plain text for the terminal
//! - Generating a markdown summary document

mod markdown;
mod text;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use text::{format_links, format_report};

use crate::harvest::SourceReport;
use chrono::{DateTime, Utc};

/// Aggregated view of a harvest run
#[derive(Debug, Clone)]
pub struct HarvestSummary<'a> {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: Option<String>,
    pub reports: &'a [SourceReport],
}

impl<'a> HarvestSummary<'a> {
    pub fn new(
        reports: &'a [SourceReport],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            started_at,
            finished_at,
            config_hash: None,
            reports,
        }
    }

    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = Some(hash.into());
        self
    }

    pub fn total_sources(&self) -> usize {
        self.reports.len()
    }

    /// Sources whose page was fetched and whose URL was well formed
    pub fn available_sources(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    /// Sources whose page could not be fetched
    pub fn unavailable_sources(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.fetch_error.is_some())
            .count()
    }

    /// Sources rejected for a malformed URL
    pub fn rejected_sources(&self) -> usize {
        self.reports.iter().filter(|r| r.metadata.is_err()).count()
    }

    pub fn total_links(&self) -> usize {
        self.reports.iter().map(|r| r.links.len()).sum()
    }

    /// Calculates the availability rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.reports.is_empty() {
            return 0.0;
        }
        (self.available_sources() as f64 / self.total_sources() as f64) * 100.0
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
