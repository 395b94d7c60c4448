//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Fetching (or reading) the page and probing for a sitemap
//! - Exporting the result and the optional competitor comparison
//!
//! All analysis is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use seo_analyzer::app::validate_and_normalize_url;
use seo_analyzer::export::export_result;
use seo_analyzer::fetch::{check_sitemap, endpoints_from_config, fetch_page};
use seo_analyzer::initialization::{init_client, init_logger_with};
use seo_analyzer::report::{compare, score_label};
use seo_analyzer::{analyze, AnalysisInput, AnalysisResult, Config};

/// Fetches (or reads) one page and analyzes it.
///
/// A local HTML file is analyzed without any network access; its sitemap
/// counts as missing.
async fn analyze_target(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
    html_file: Option<&Path>,
) -> Result<AnalysisResult> {
    let (html, load_time_ms, sitemap) = match html_file {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;
            info!("Analyzing {} from {}", url, path.display());
            (html, config.load_time_ms, None)
        }
        None => {
            let page = fetch_page(client, url, &endpoints_from_config(config)).await?;
            let sitemap = if config.skip_sitemap {
                None
            } else {
                Some(check_sitemap(client, url).await)
            };
            (page.html, page.load_time_ms, sitemap)
        }
    };

    let input = AnalysisInput::from_html(url, &html, load_time_ms)
        .with_context(|| format!("Cannot analyze {url}"))?;
    Ok(analyze(&input, sitemap))
}

fn print_comparison(yours: &AnalysisResult, competitor: &AnalysisResult) {
    eprintln!();
    eprintln!("Comparison: {} vs {}", yours.url, competitor.url);
    eprintln!(
        "{:<18} {:>6} {:>11} {:>11}",
        "Metric", "Yours", "Competitor", "Difference"
    );
    for row in compare(yours, competitor) {
        eprintln!(
            "{:<18} {:>6} {:>11} {:>+11}",
            row.metric, row.yours, row.competitor, row.difference
        );
    }
    eprintln!(
        "Overall: {} ({}) vs {} ({})",
        yours.scores.overall,
        score_label(yours.scores.overall),
        competitor.scores.overall,
        score_label(competitor.scores.overall)
    );
}

async fn run(config: Config) -> Result<()> {
    if config.depth > 0 {
        bail!(
            "Crawl depth {} is not available: only single-page analysis (depth 0) is supported",
            config.depth
        );
    }

    let url = validate_and_normalize_url(&config.url)?;
    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let result = analyze_target(&client, &config, &url, config.html_file.as_deref()).await?;
    info!(
        "{}: overall {}/100 ({})",
        result.url,
        result.scores.overall,
        score_label(result.scores.overall)
    );
    export_result(&result, config.format, config.output.as_deref())?;

    if let Some(competitor) = &config.compare {
        let competitor_url = validate_and_normalize_url(competitor)?;
        let other = analyze_target(&client, &config, &competitor_url, None).await?;
        print_comparison(&result, &other);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("seo_analyzer error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
