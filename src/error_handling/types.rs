//! Error type definitions.
//!
//! Only input-fatal conditions surface as errors. Missing elements, malformed
//! JSON-LD blocks and unresolvable URLs are folded into the analysis records.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input-fatal failures: the page cannot be turned into an analyzable document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The payload parsed but holds nothing (empty or whitespace only).
    #[error("Document is empty")]
    EmptyDocument,

    /// The payload could not be parsed as HTML (no markup, or binary content).
    #[error("Content could not be parsed as HTML: {0}")]
    NotHtml(String),

    /// The analyzed URL is not an absolute URL with a host.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Failures of the page transport (fetch through direct/proxy endpoints).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The target URL failed validation before any request was made.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A single attempt returned a non-success status.
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus {
        /// Endpoint label (direct or proxy host)
        endpoint: String,
        /// Returned status code
        status: u16,
    },

    /// A single attempt returned too little content to be a page.
    #[error("Invalid response from {endpoint} - content too short ({length} bytes)")]
    ContentTooShort {
        /// Endpoint label (direct or proxy host)
        endpoint: String,
        /// Body length in bytes
        length: usize,
    },

    /// A single attempt failed at the transport level (connect, timeout, body).
    #[error("Request through {endpoint} failed: {source}")]
    Request {
        /// Endpoint label (direct or proxy host)
        endpoint: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// Every configured endpoint failed; carries the last failure.
    #[error("Unable to fetch {url} after {attempts} attempt(s). Last error: {last_error}")]
    AllAttemptsFailed {
        /// Target URL
        url: String,
        /// Number of endpoints tried
        attempts: usize,
        /// Message of the last failure
        last_error: String,
    },
}
