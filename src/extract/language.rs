use crate::config::LanguageConfig;
use crate::fetch::Fetcher;
use crate::page::Resource;
use crate::scan::{extract_between, find_from_ignore_case};

const LANG_MARKER: &str = "lang=";

/// Derives the declared page language, falling back to the configured default
///
/// The fallback is returned when the page is unavailable, declares no language, or
/// declares one matching none of the allow-listed tags.
pub fn derive_language<F: Fetcher>(resource: &mut Resource<F>, config: &LanguageConfig) -> String {
    match resource.ensure_content() {
        Some(html) => language_from_html(html, config),
        None => config.fallback.clone(),
    }
}

/// Returns the declared language if it contains an allow-listed tag, else the fallback
///
/// # Examples
///
/// ```
/// use page_harvest::config::LanguageConfig;
/// use page_harvest::extract::language_from_html;
///
/// let config = LanguageConfig::default();
/// assert_eq!(language_from_html(r#"<html lang="pl">"#, &config), "pl");
/// assert_eq!(language_from_html(r#"<html lang="de">"#, &config), "en-US");
/// ```
pub fn language_from_html(html: &str, config: &LanguageConfig) -> String {
    match declared_language(html) {
        Some(lang) if is_allowed(lang, &config.allow_list) => lang.to_string(),
        Some(lang) => {
            tracing::debug!(lang, "declared language not allowed");
            config.fallback.clone()
        }
        None => config.fallback.clone(),
    }
}

fn is_allowed(lang: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|tag| lang.contains(tag.as_str()))
}

/// Finds the first quoted `lang` attribute value
///
/// Occurrences glued to another word (`hreflang=`) are skipped; `xml:lang=` is
/// accepted. Unquoted or empty values yield `None`.
fn declared_language(html: &str) -> Option<&str> {
    let mut offset = 0;

    while let Some(at) = find_from_ignore_case(html, LANG_MARKER, offset) {
        offset = at + LANG_MARKER.len();

        let preceded_by = at.checked_sub(1).map(|i| html.as_bytes()[i]);
        let is_attribute = match preceded_by {
            Some(byte) => byte.is_ascii_whitespace() || byte == b':',
            None => true,
        };
        if !is_attribute {
            continue;
        }

        let quote = match html.as_bytes().get(offset) {
            Some(b'"') => "\"",
            Some(b'\'') => "'",
            _ => return None,
        };

        return extract_between(html, quote, quote, offset);
    }

    None
}
