//! Open Graph and Twitter Card extraction.
//!
//! Both use the same shape: every matching meta tag contributes one entry
//! keyed by the property name without its prefix. Tags with empty content are
//! skipped; when a key repeats, the last tag wins.

use scraper::Selector;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::ParsedDocument;

const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;
const TWITTER_CARD_SELECTOR_STR: &str = r#"meta[name^="twitter:"]"#;

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR")
});
static TWITTER_CARD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR")
});

/// Extracts Open Graph tags (`<meta property="og:*">`).
///
/// # Returns
///
/// A map from property name without the `og:` prefix (e.g. `title`) to content.
pub fn extract_open_graph(document: &ParsedDocument) -> BTreeMap<String, String> {
    collect_prefixed(document, &OPEN_GRAPH_SELECTOR, "property", "og:")
}

/// Extracts Twitter Card tags (`<meta name="twitter:*">`).
///
/// # Returns
///
/// A map from name without the `twitter:` prefix (e.g. `card`) to content.
pub fn extract_twitter_card(document: &ParsedDocument) -> BTreeMap<String, String> {
    collect_prefixed(document, &TWITTER_CARD_SELECTOR, "name", "twitter:")
}

fn collect_prefixed(
    document: &ParsedDocument,
    selector: &Selector,
    key_attr: &str,
    prefix: &str,
) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for element in document.html().select(selector) {
        let (Some(key), Some(content)) = (
            element.value().attr(key_attr),
            element.value().attr("content"),
        ) else {
            continue;
        };
        let Some(key) = key.trim().strip_prefix(prefix) else {
            continue;
        };
        let content = content.trim();
        if key.is_empty() || content.is_empty() {
            continue;
        }
        tags.insert(key.to_string(), content.to_string());
    }
    tags
}
