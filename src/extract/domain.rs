use crate::{UrlError, UrlResult};
use url::Url;

/// Derives the origin (`scheme://host`) of a URL
///
/// The host is lowercased. A non-default port is kept (`http://127.0.0.1:8080`) so
/// that links can be scoped to the exact server the page came from; default ports are
/// dropped. No network access is involved.
///
/// # Errors
///
/// * `UrlError::Parse` - The string is not an absolute URL
/// * `UrlError::MissingHost` - The URL has no host (`mailto:`, `file:///`)
///
/// # Examples
///
/// ```
/// use page_harvest::derive_domain;
///
/// assert_eq!(derive_domain("https://example.com/a/b").unwrap(), "https://example.com");
/// assert_eq!(derive_domain("https://EXAMPLE.com:443/").unwrap(), "https://example.com");
/// assert!(derive_domain("not a url").is_err());
/// ```
pub fn derive_domain(url: &str) -> UrlResult<String> {
    let parsed = Url::parse(url.trim()).map_err(|e| UrlError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}
