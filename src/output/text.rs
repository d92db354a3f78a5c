//! Plain-text rendering for the terminal

use crate::harvest::SourceReport;

/// Formats one source report as an indented block
pub fn format_report(report: &SourceReport) -> String {
    let mut out = format!("{}\n", report.url);

    match &report.metadata {
        Ok(meta) => {
            out.push_str(&format!(
                "  title:    {}\n",
                meta.title.as_deref().unwrap_or("(none)")
            ));
            out.push_str(&format!("  language: {}\n", meta.language));
            out.push_str(&format!("  domain:   {}\n", meta.domain));
        }
        Err(error) => out.push_str(&format!("  error:    {}\n", error)),
    }

    if let Some(error) = &report.fetch_error {
        out.push_str(&format!("  fetch:    unavailable ({})\n", error));
    }

    out.push_str(&format!("  links:    {}\n", report.links.len()));
    for link in format_links(report) {
        out.push_str(&format!("    {}\n", link));
    }

    out
}

/// Returns the harvested links in sorted order
pub fn format_links(report: &SourceReport) -> Vec<&str> {
    let mut links: Vec<&str> = report.links.iter().map(String::as_str).collect();
    links.sort_unstable();
    links
}
