//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, FETCH_TIMEOUT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for an analysis result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The full analysis result as pretty-printed JSON
    Json,
    /// Flattened label/value rows for spreadsheets
    Csv,
    /// Human-readable text report
    Report,
}

/// Command-line configuration for the `seo_analyzer` binary.
///
/// # Examples
///
/// ```
/// use seo_analyzer::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     skip_sitemap: true,
///     ..Default::default()
/// };
/// assert_eq!(config.depth, 0);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_analyzer",
    version,
    about = "Analyze a single web page for on-page SEO signals and score it",
    long_about = None
)]
pub struct Config {
    /// URL of the page to analyze
    pub url: String,

    /// Analyze a local HTML file instead of fetching the URL
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Load time in milliseconds to report when analyzing a local file
    #[arg(long, default_value_t = 0.0)]
    pub load_time_ms: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Do not probe for /sitemap.xml (counts as missing)
    #[arg(long)]
    pub skip_sitemap: bool,

    /// Proxy URL template tried after the direct fetch; `{url}` receives the target
    #[arg(long = "proxy")]
    pub proxies: Vec<String>,

    /// Also try the built-in public CORS proxies after the direct fetch
    #[arg(long)]
    pub public_proxies: bool,

    /// Per-attempt fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Analyze a competitor page too and print a score comparison
    #[arg(long)]
    pub compare: Option<String>,

    /// Crawl depth (0 = single page; deeper crawls are not available)
    #[arg(long, default_value_t = 0)]
    pub depth: u8,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            html_file: None,
            load_time_ms: 0.0,
            format: OutputFormat::Json,
            output: None,
            skip_sitemap: false,
            proxies: Vec::new(),
            public_proxies: false,
            timeout_seconds: FETCH_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            compare: None,
            depth: 0,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
