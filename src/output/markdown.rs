//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a harvest run,
//! including overall statistics, per-source metadata and unavailable sources.

use crate::output::HarvestSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown summary of a harvest to `output_path`
pub fn generate_markdown_summary(summary: &HarvestSummary<'_>, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a harvest summary as markdown
pub fn format_markdown_summary(summary: &HarvestSummary<'_>) -> String {
    let mut md = String::new();

    md.push_str("# Page Harvest Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!("- **Duration**: {} seconds\n", summary.duration_seconds()));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Sources**: {}\n", summary.total_sources()));
    md.push_str(&format!("- **Available**: {}\n", summary.available_sources()));
    md.push_str(&format!("- **Unavailable**: {}\n", summary.unavailable_sources()));
    md.push_str(&format!("- **Rejected URLs**: {}\n", summary.rejected_sources()));
    md.push_str(&format!("- **Links Harvested**: {}\n", summary.total_links()));
    md.push_str(&format!("- **Success Rate**: {:.2}%\n\n", summary.success_rate()));

    // Per-source table
    md.push_str("## Sources\n\n");
    md.push_str("| URL | Title | Language | Domain | Links |\n");
    md.push_str("|-----|-------|----------|--------|-------|\n");
    for report in summary.reports {
        match &report.metadata {
            Ok(meta) => md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                escape_cell(&report.url),
                escape_cell(meta.title.as_deref().unwrap_or("-")),
                escape_cell(&meta.language),
                escape_cell(&meta.domain),
                report.links.len()
            )),
            Err(_) => md.push_str(&format!(
                "| {} | - | - | - | 0 |\n",
                escape_cell(&report.url)
            )),
        }
    }
    md.push('\n');

    // Problems
    let problems: Vec<_> = summary
        .reports
        .iter()
        .filter(|r| !r.is_success())
        .collect();
    if !problems.is_empty() {
        md.push_str("## Problems\n\n");
        for report in problems {
            let reason = match (&report.metadata, &report.fetch_error) {
                (Err(error), _) => error.to_string(),
                (Ok(_), Some(error)) => error.to_string(),
                (Ok(_), None) => continue,
            };
            md.push_str(&format!("- `{}`: {}\n", report.url, reason));
        }
        md.push('\n');
    }

    md
}

/// Keeps page-provided text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}
