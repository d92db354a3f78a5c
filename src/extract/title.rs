use crate::fetch::Fetcher;
use crate::page::Resource;
use crate::scan::{extract_between_ignore_case, find_from, find_from_ignore_case};

const TITLE_OPEN: &str = "<title";
const TITLE_CLOSE: &str = "</title";

/// Derives the page title, or `None` if the page is unavailable or has no title
pub fn derive_title<F: Fetcher>(resource: &mut Resource<F>) -> Option<String> {
    let title = title_from_html(resource.ensure_content()?);
    if title.is_none() {
        tracing::debug!(url = resource.url(), "no title found");
    }
    title
}

/// Extracts the trimmed text of the first `<title>` element
///
/// Attributes on the opening tag are skipped by resuming at the first `>` after
/// `<title`. Tag names match case-insensitively.
pub fn title_from_html(html: &str) -> Option<String> {
    let open = find_from_ignore_case(html, TITLE_OPEN, 0)?;
    let tag_end = find_from(html, ">", open + TITLE_OPEN.len())?;

    extract_between_ignore_case(html, ">", TITLE_CLOSE, tag_end).map(str::to_string)
}
