//! JSON-LD structured data extraction.
//!
//! Every `<script type="application/ld+json">` block is parsed on its own. A
//! block that is not valid JSON is logged and skipped; the others still count.

use scraper::Selector;
use std::sync::LazyLock;

use super::ParsedDocument;

const JSON_LD_TYPE: &str = "application/ld+json";
const TYPED_SCRIPT_SELECTOR_STR: &str = "script[type]";

static TYPED_SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(TYPED_SCRIPT_SELECTOR_STR, "TYPED_SCRIPT_SELECTOR")
});

/// Structured data found in a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredData {
    /// Parsed JSON-LD schemas in document order. A top-level array contributes
    /// each of its elements.
    pub schemas: Vec<serde_json::Value>,
    /// Schema.org `@type` values, in schema order
    pub types: Vec<String>,
}

/// Extracts JSON-LD schemas and their `@type` values.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
///
/// # Returns
///
/// A `StructuredData` with every well-formed schema. Never fails.
pub fn extract_structured_data(document: &ParsedDocument) -> StructuredData {
    let mut schemas = Vec::new();

    let blocks = document.html().select(&TYPED_SCRIPT_SELECTOR).filter(|element| {
        element
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_TYPE))
    });

    for (index, block) in blocks.enumerate() {
        let raw = block.text().collect::<String>();
        let raw = raw.trim();
        if raw.is_empty() {
            log::debug!("Skipping empty JSON-LD block #{}", index);
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => schemas.extend(items),
            Ok(value) => schemas.push(value),
            Err(e) => {
                log::warn!("Skipping malformed JSON-LD block #{}: {}", index, e);
            }
        }
    }

    let types = schemas.iter().flat_map(schema_types).collect();

    StructuredData { schemas, types }
}

/// `@type` of one schema: a string, or every string inside an array.
fn schema_types(schema: &serde_json::Value) -> Vec<String> {
    match schema.get("@type") {
        Some(serde_json::Value::String(t)) => vec![t.clone()],
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|t| t.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
