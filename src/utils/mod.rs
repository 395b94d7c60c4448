//! Shared helpers.
//!
//! - Static CSS selector / regex compilation
//! - Small numeric and text helpers used by several analyzers

mod selector;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};

/// Length in characters (not bytes), matching how titles and descriptions are measured.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Subtracts a penalty from a 0–100 score without going below zero.
pub fn deduct(score: u32, penalty: u32) -> u32 {
    score.saturating_sub(penalty)
}

/// Trims and collapses runs of whitespace to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"s"` when `count != 1`, for recommendation text.
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
