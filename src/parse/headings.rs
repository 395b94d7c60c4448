//! Heading outline extraction.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

use super::ParsedDocument;

const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(HEADING_SELECTOR_STR, "HEADING_SELECTOR")
});

/// One heading in the page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 for `<h1>` through 6 for `<h6>`
    pub level: u8,
    pub text: String,
}

/// Extracts every `h1`..`h6` element in document order, mixing levels.
///
/// Empty headings are kept with empty text so that per-level counts can be
/// derived from the outline.
pub fn extract_headings(document: &ParsedDocument) -> Vec<Heading> {
    document
        .html()
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = heading_level(element.value().name())?;
            let text = crate::utils::collapse_whitespace(&element.text().collect::<String>());
            Some(Heading { level, text })
        })
        .collect()
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
