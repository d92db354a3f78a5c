use crate::extract::{derive_domain, LinkSet};
use crate::fetch::Fetcher;
use crate::page::Resource;
use crate::scan::{extract_between_ignore_case, find_from_ignore_case};
use url::Url;

const ANCHOR_MARKER: &str = "<a href=\"";
const HREF_CLOSE: &str = "\"";

/// Harvests the same-origin links of a page
///
/// Returns an empty set when the page is unavailable. Harvesting the same resource
/// twice yields the same set, since the content is memoized.
pub fn harvest_links<F: Fetcher>(resource: &mut Resource<F>) -> LinkSet {
    let domain = match derive_domain(resource.url()) {
        Ok(domain) => domain,
        Err(error) => {
            tracing::warn!(url = resource.url(), %error, "cannot scope links");
            return LinkSet::new();
        }
    };

    match resource.ensure_content() {
        Some(html) => links_from_html(html, &domain),
        None => LinkSet::new(),
    }
}

/// Collects the `<a href="...">` targets of `html` that belong to `domain`
///
/// Root-relative paths are resolved against `domain`, protocol-relative ones against
/// its scheme. Other relative forms cannot match the origin and are dropped. Links are
/// compared and returned in parsed form, so internationalized hosts match whether the
/// page writes them in Unicode or punycode.
///
/// # Examples
///
/// ```
/// use page_harvest::extract::links_from_html;
///
/// let html = r#"<a href="/x">x</a> <a href="https://other.com/y">y</a>"#;
/// let links = links_from_html(html, "https://site.com");
/// assert!(links.contains("https://site.com/x"));
/// assert_eq!(links.len(), 1);
/// ```
pub fn links_from_html(html: &str, domain: &str) -> LinkSet {
    let mut links = LinkSet::new();

    let origin = match Url::parse(domain) {
        Ok(origin) => origin,
        Err(error) => {
            tracing::warn!(domain, %error, "cannot scope links");
            return links;
        }
    };

    let mut offset = 0;
    while let Some(at) = find_from_ignore_case(html, ANCHOR_MARKER, offset) {
        offset = at + ANCHOR_MARKER.len();

        let Some(href) = extract_between_ignore_case(html, ANCHOR_MARKER, HREF_CLOSE, at) else {
            continue;
        };

        // An unterminated attribute swallows the following markup
        if href
            .chars()
            .any(|c| c.is_ascii_whitespace() || c == '<' || c == '>')
        {
            tracing::trace!(href, "skipping malformed href");
            continue;
        }

        let resolved = resolve_link(href, domain);
        if resolved.len() <= 1 {
            continue;
        }

        let Ok(link) = Url::parse(&resolved) else {
            tracing::trace!(href, "skipping unparsable link");
            continue;
        };

        if !is_same_origin(&link, &origin) {
            tracing::trace!(link = %link, "skipping off-origin link");
            continue;
        }

        tracing::trace!(link = %link, "harvested link");
        links.insert(link.into());
    }

    links
}

/// Resolves root-relative and protocol-relative hrefs against the page origin
fn resolve_link(href: &str, domain: &str) -> String {
    if href.starts_with("//") {
        let scheme = domain.split_once("://").map_or("https", |(scheme, _)| scheme);
        format!("{}:{}", scheme, href)
    } else if href.starts_with('/') {
        format!("{}{}", domain, href)
    } else {
        href.to_string()
    }
}

/// Checks that `link` has the same scheme, host and port as `origin`
fn is_same_origin(link: &Url, origin: &Url) -> bool {
    link.scheme() == origin.scheme()
        && link.host_str().is_some()
        && link.host_str() == origin.host_str()
        && link.port_or_known_default() == origin.port_or_known_default()
}
