//! CSV export functionality.
//!
//! A two-column label/value sheet: section titles on their own row, blank rows
//! between sections and `Yes`/`No` for booleans. Rows have varying widths so
//! the writer is built with flexible records.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use csv::WriterBuilder;
use std::io::Write;

use crate::analyze::AnalysisResult;

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Label/value rows in sheet order. Empty rows are section separators.
pub fn csv_rows(result: &AnalysisResult) -> Vec<Vec<String>> {
    let meta = &result.meta_tags;
    let headings = &result.heading_analysis.counts;
    let images = &result.image_analysis;
    let content = &result.content_metrics;
    let links = &result.link_analysis;
    let perf = &result.image_performance;
    let scores = &result.scores;

    let row = |label: &str, value: String| vec![label.to_string(), value];
    let title = |label: &str| vec![label.to_string()];

    vec![
        title("SEO Analysis Report"),
        row("URL", result.url.clone()),
        row(
            "Analyzed At",
            result
                .analyzed_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ),
        Vec::new(),
        title("SCORES"),
        row("Overall Score", scores.overall.to_string()),
        row("Technical SEO", scores.technical.to_string()),
        row("Content Quality", scores.content.to_string()),
        row("Performance", scores.performance.to_string()),
        row("On-Page SEO", scores.on_page.to_string()),
        Vec::new(),
        title("TECHNICAL SEO"),
        row("Title Length", meta.title.length.to_string()),
        row("Description Length", meta.description.length.to_string()),
        row("Has Canonical", yes_no(result.canonical.present)),
        row("Has Open Graph", yes_no(result.open_graph.present)),
        row("Has Twitter Card", yes_no(result.twitter_card.present)),
        row(
            "Structured Data Count",
            result.structured_data.count.to_string(),
        ),
        row("Has Sitemap", yes_no(result.sitemap.present)),
        Vec::new(),
        title("CONTENT"),
        row("H1 Count", headings.h1.to_string()),
        row("H2 Count", headings.h2.to_string()),
        row("H3 Count", headings.h3.to_string()),
        row("Total Images", images.total.to_string()),
        row("Images Missing Alt", images.missing_alt.to_string()),
        row("Next-gen Images", images.next_gen_format.to_string()),
        row("Legacy Images", images.legacy_format.to_string()),
        row("Word Count", content.word_count.to_string()),
        row("Reading Time (min)", content.reading_time.to_string()),
        row("Total Links", links.total.to_string()),
        row("Internal Links", links.internal.to_string()),
        row("External Links", links.external.to_string()),
        Vec::new(),
        title("PERFORMANCE"),
        row("Load Time (ms)", result.load_time.estimated_time.to_string()),
        row("Page Size (bytes)", result.resources.total_size.to_string()),
        row("Image Weight (bytes)", perf.total_weight.to_string()),
        row("Mobile Score", result.mobile_friendly.score.to_string()),
        Vec::new(),
        title("ON-PAGE SEO"),
        row("URL Length", result.url_structure.length.to_string()),
        row("Is HTTPS", yes_no(result.url_structure.is_secure)),
        row("Broken Links", result.broken_links.broken_count.to_string()),
        row(
            "Duplicate Content Issues",
            result.duplicate_content.issues.len().to_string(),
        ),
        Vec::new(),
        title("IMAGE OPTIMIZATION"),
        row("Total Image Weight (bytes)", perf.total_weight.to_string()),
        row("Potential Savings (bytes)", perf.potential_savings.to_string()),
        row("Optimized Weight (bytes)", perf.optimized_weight.to_string()),
    ]
}

/// Writes the CSV sheet for one analysis.
///
/// Separator rows are written as bare newlines rather than as an empty
/// quoted field, so sections are split by truly blank lines.
///
/// # Returns
///
/// Returns the number of rows written, separators included.
pub fn write_csv<W: Write>(result: &AnalysisResult, mut writer: W) -> Result<usize> {
    let rows = csv_rows(result);
    for (idx, section) in rows.split(|row| row.is_empty()).enumerate() {
        if idx > 0 {
            writer
                .write_all(b"\n")
                .context("Failed to write CSV separator")?;
        }
        let mut csv_writer = WriterBuilder::new().flexible(true).from_writer(&mut writer);
        for row in section {
            csv_writer
                .write_record(row)
                .context("Failed to write CSV row")?;
        }
        csv_writer.flush().context("Failed to flush CSV output")?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}
