//! seo_analyzer library: single-page SEO analysis and scoring
//!
//! The pipeline is pure and synchronous: raw HTML plus a URL and a measured
//! load time go in, an [`AnalysisResult`] with every extracted signal, its
//! judgment and four category scores comes out. Fetching the page and probing
//! for a sitemap live in [`fetch`] and are only needed by callers that start
//! from a URL.
//!
//! # Example
//!
//! ```
//! use seo_analyzer::{analyze, AnalysisInput};
//!
//! let html = r#"<html><head><title>Fresh roasted coffee delivered every week</title></head>
//!     <body><h1>Coffee</h1><p>Beans from small farms.</p></body></html>"#;
//! let input = AnalysisInput::from_html("https://example.com/", html, 850.0)?;
//! let result = analyze(&input, None);
//!
//! assert_eq!(result.heading_analysis.counts.h1, 1);
//! assert!(result.scores.overall <= 100);
//! # Ok::<(), seo_analyzer::AnalysisError>(())
//! ```
//!
//! # Layout
//!
//! - [`parse`]: extractors over a parsed document
//! - [`analysis`]: per-check judgment records
//! - [`scoring`]: category and overall scores
//! - [`report`]: issue lists, score labels and comparisons
//! - [`export`]: JSON, CSV and text output

pub mod analysis;
mod analyze;
pub mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod report;
pub mod scoring;
mod utils;

// Re-export public API
pub use analyze::{analyze, analyze_at, AnalysisInput, AnalysisResult, SitemapProbe, SitemapRecord};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AnalysisError, FetchError, InitializationError};
pub use scoring::ScoreRecord;
