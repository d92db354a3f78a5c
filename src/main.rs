//! Page-Harvest main entry point
//!
//! This is the command-line interface for the Page-Harvest extractor.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use page_harvest::config::{load_config_with_hash, Config};
use page_harvest::harvest::harvest_sources;
use page_harvest::output::{format_links, format_report, generate_markdown_summary, HarvestSummary};
use page_harvest::{derive_domain, HttpFetcher};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Harvest: fault-tolerant page metadata and link extraction
///
/// Fetches each source page once, reports its title, declared language and origin,
/// and lists the links that stay on the same origin.
#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Extract page metadata and same-origin links", long_about = None)]
struct Cli {
    /// Source URLs to harvest
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write a markdown summary of the run to this file
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Print only the harvested links, one per line
    #[arg(long)]
    links_only: bool,

    /// Validate config and URLs and show what would be harvested without fetching
    #[arg(long, conflicts_with_all = ["summary", "links_only"])]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    // Malformed inputs are a usage error; unavailable pages are not
    for url in &cli.urls {
        derive_domain(url).with_context(|| format!("invalid source URL '{}'", url))?;
    }

    if cli.dry_run {
        handle_dry_run(&config, &cli.urls);
        return Ok(());
    }

    handle_harvest(&cli, &config, config_hash)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_harvest=info,warn"),
            1 => EnvFilter::new("page_harvest=debug,info"),
            2 => EnvFilter::new("page_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration and sources
fn handle_dry_run(config: &Config, urls: &[String]) {
    println!("=== Page-Harvest Dry Run ===\n");

    println!("Fetch:");
    println!("  Timeout: {}ms", config.fetch.timeout_ms);
    for (name, value) in &config.fetch.headers {
        println!("  {}: {}", name, value);
    }

    println!("\nLanguage:");
    println!("  Allow-list: {}", config.language.allow_list.join(", "));
    println!("  Fallback: {}", config.language.fallback);

    println!("\nHarvest:");
    println!(
        "  Max concurrent sources: {}",
        config.harvest.max_concurrent_sources
    );

    println!("\nSources ({}):", urls.len());
    for url in urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
fn handle_harvest(cli: &Cli, config: &Config, config_hash: Option<String>) -> anyhow::Result<()> {
    // The blocking client is created and dropped outside the async runtime
    let fetcher = HttpFetcher::new(&config.fetch)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let started_at = Utc::now();
    let reports = runtime.block_on(harvest_sources(&fetcher, cli.urls.clone(), config))?;
    let finished_at = Utc::now();

    for report in &reports {
        if cli.links_only {
            for link in format_links(report) {
                println!("{}", link);
            }
        } else {
            println!("{}", format_report(report));
        }
    }

    if let Some(path) = &cli.summary {
        let mut summary = HarvestSummary::new(&reports, started_at, finished_at);
        if let Some(hash) = config_hash {
            summary = summary.with_config_hash(hash);
        }
        generate_markdown_summary(&summary, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Summary written to: {}", path.display());
    }

    let unavailable = reports.iter().filter(|r| !r.is_success()).count();
    tracing::info!(
        "Harvest finished: {} sources, {} unavailable",
        reports.len(),
        unavailable
    );

    Ok(())
}
