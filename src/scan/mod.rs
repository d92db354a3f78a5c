//! Delimiter scanning primitives
//!
//! Every deriver in this crate locates data by scanning for literal markers rather than
//! building a document tree. All offsets are byte offsets into the scanned text, and a
//! missing marker is always reported as `None` so that "not found" can never be confused
//! with a match at offset zero.

/// Finds the first occurrence of `marker` at or after byte offset `from`
///
/// Returns `None` when the marker is empty, when `from` is past the end of the text or
/// not on a character boundary, or when the marker does not occur.
///
/// # Examples
///
/// ```
/// use page_harvest::scan::find_from;
///
/// assert_eq!(find_from("<a><a>", "<a>", 0), Some(0));
/// assert_eq!(find_from("<a><a>", "<a>", 1), Some(3));
/// assert_eq!(find_from("<a><a>", "<b>", 0), None);
/// ```
pub fn find_from(text: &str, marker: &str, from: usize) -> Option<usize> {
    if marker.is_empty() {
        return None;
    }

    text.get(from..)?.find(marker).map(|index| from + index)
}

/// Same as [`find_from`], but ASCII letters in `marker` match regardless of case
pub fn find_from_ignore_case(text: &str, marker: &str, from: usize) -> Option<usize> {
    if marker.is_empty() || !text.is_char_boundary(from) {
        return None;
    }

    let needle = marker.as_bytes();
    text.as_bytes()
        .get(from..)?
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|index| from + index)
}

/// Extracts the text between `open` and `close`, starting the search at `from`
///
/// The first `open` at or after `from` is located, then the first `close` at or after
/// the end of that match. The text strictly between the two is returned trimmed of
/// surrounding whitespace. Returns `None` if either marker is missing or the trimmed
/// text is empty.
///
/// Markers are literal: an open marker such as `<title` leaves the rest of the opening
/// tag in the result. Skipping to the end of the tag is done by
/// [`crate::extract::title_from_html`].
///
/// # Examples
///
/// ```
/// use page_harvest::scan::extract_between;
///
/// let html = "<title>Hello</title>";
/// assert_eq!(extract_between(html, "<title>", "</title", 0), Some("Hello"));
/// assert_eq!(extract_between(html, "<h1>", "</h1>", 0), None);
/// ```
pub fn extract_between<'a>(text: &'a str, open: &str, close: &str, from: usize) -> Option<&'a str> {
    let start = find_from(text, open, from)? + open.len();
    let end = find_from(text, close, start)?;
    non_empty(&text[start..end])
}

/// Same as [`extract_between`], with ASCII case-insensitive marker matching
pub fn extract_between_ignore_case<'a>(
    text: &'a str,
    open: &str,
    close: &str,
    from: usize,
) -> Option<&'a str> {
    let start = find_from_ignore_case(text, open, from)? + open.len();
    let end = find_from_ignore_case(text, close, start)?;
    non_empty(&text[start..end])
}

fn non_empty(slice: &str) -> Option<&str> {
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
