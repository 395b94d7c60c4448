// Shared test helpers for building pages and running the analysis.
//
// Included by several test files via `#[path = "helpers.rs"] mod helpers;`.

use chrono::{TimeZone, Utc};
use seo_analyzer::{analyze_at, AnalysisInput, AnalysisResult};

pub const TEST_URL: &str = "https://example.com/";

/// Wraps head and body fragments in a full document.
pub fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

/// Analyzes `html` at `url` with a fixed timestamp and no sitemap.
#[allow(dead_code)] // Not every test file analyzes at a custom URL
pub fn analyze_fixed_at(url: &str, html: &str, load_time_ms: f64) -> AnalysisResult {
    let input = AnalysisInput::from_html(url, html, load_time_ms).expect("page should parse");
    analyze_at(
        &input,
        None,
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    )
}

/// Analyzes `html` at [`TEST_URL`] with a fixed timestamp and no sitemap.
#[allow(dead_code)]
pub fn analyze_fixed(html: &str, load_time_ms: f64) -> AnalysisResult {
    analyze_fixed_at(TEST_URL, html, load_time_ms)
}

/// A well-formed page that passes most checks; used as a baseline.
#[allow(dead_code)]
pub fn healthy_page() -> String {
    page(
        &format!(
            r#"<title>{}</title>
            <meta name="description" content="{}">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <link rel="canonical" href="https://example.com/">
            <meta property="og:title" content="Roastery">
            <meta property="og:description" content="Fresh coffee">
            <meta property="og:image" content="https://example.com/og.webp">
            <meta property="og:url" content="https://example.com/">
            <meta name="twitter:card" content="summary">
            <script type="application/ld+json">{{"@context":"https://schema.org","@type":"Organization","name":"Roastery"}}</script>"#,
            "Fresh roasted coffee beans delivered weekly",
            "Small batch coffee roasted to order and shipped the same day. Single origin beans, espresso blends and decaf, with free delivery on subscriptions."
        ),
        &format!(
            r#"<h1>Fresh coffee</h1><p>{}</p>
            <img src="/img/beans.webp" alt="Coffee beans" srcset="/img/beans-2x.webp 2x">
            <a href="/shop">Shop</a> <a href="https://partner.example/">Partner</a>"#,
            "coffee beans roasted daily ".repeat(80)
        ),
    )
}
