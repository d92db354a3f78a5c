//! Metadata derivers and link harvesting
//!
//! Each deriver is available in two forms: a pure function over HTML text
//! (`*_from_html`) and a form that pulls content through a [`Resource`], sharing its
//! memoized fetch. Derivers are independent: a missing title never affects the
//! language or the links.

mod domain;
mod language;
mod links;
mod title;

pub use domain::derive_domain;
pub use language::{derive_language, language_from_html};
pub use links::{harvest_links, links_from_html};
pub use title::{derive_title, title_from_html};

use crate::config::LanguageConfig;
use crate::fetch::Fetcher;
use crate::page::Resource;
use crate::UrlResult;
use std::collections::HashSet;

/// Absolute same-origin URLs harvested from a page
pub type LinkSet = HashSet<String>;

/// Metadata derived from a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: Option<String>,
    pub language: String,
    /// Origin of the page, `scheme://host`
    pub domain: String,
}

/// Derives title, language and domain for a resource
///
/// The domain is derived first and without network access, so a malformed URL fails
/// before anything is fetched. Unavailable content only degrades the title and
/// language to their defaults.
pub fn extract_metadata<F: Fetcher>(
    resource: &mut Resource<F>,
    language: &LanguageConfig,
) -> UrlResult<ExtractedMetadata> {
    let domain = derive_domain(resource.url())?;

    Ok(ExtractedMetadata {
        title: derive_title(resource),
        language: derive_language(resource, language),
        domain,
    })
}
