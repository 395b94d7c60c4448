//! Application configuration and constants.
//!
//! This module provides:
//! - Heuristic constants (thresholds, penalties, weights, size estimates)
//! - Transport defaults
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
