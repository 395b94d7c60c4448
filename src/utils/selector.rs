//! CSS selector and regex compilation for static patterns.

use regex::Regex;
use scraper::Selector;

/// Parses a CSS selector that must succeed.
///
/// Used for the `LazyLock` selectors declared next to each extractor; a failure
/// here is a typo in a constant, never a property of the analyzed page.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Compiles a regex pattern that must succeed.
///
/// # Panics
///
/// Panics if the pattern does not compile (indicates a programming error).
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_accepts_attribute_prefix() {
        let selector = parse_selector_unsafe(r#"meta[property^="og:"]"#, "test");
        let html = scraper::Html::parse_document(
            r#"<meta property="og:title" content="x"><meta property="fb:app_id" content="y">"#,
        );
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_parse_selector_unsafe_panics_on_invalid() {
        parse_selector_unsafe("a[[", "test");
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_compile_regex_unsafe_panics_on_invalid() {
        compile_regex_unsafe("(unclosed", "test");
    }
}
