//! Static resource counts used by the performance estimators.

use scraper::Selector;
use std::sync::LazyLock;

use super::ParsedDocument;

const STYLE_SELECTOR_STR: &str = "style";
const STYLESHEET_LINK_SELECTOR_STR: &str = "link[rel][href]";
const SCRIPT_SELECTOR_STR: &str = "script";
const FONT_LINK_SELECTOR_STR: &str = r#"link[href*="font"]"#;
const TOUCH_TARGET_SELECTOR_STR: &str = r#"button, a, input[type="button"]"#;

static STYLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(STYLE_SELECTOR_STR, "STYLE_SELECTOR"));
static STYLESHEET_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(STYLESHEET_LINK_SELECTOR_STR, "STYLESHEET_LINK_SELECTOR")
});
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static FONT_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(FONT_LINK_SELECTOR_STR, "FONT_LINK_SELECTOR")
});
static TOUCH_TARGET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(TOUCH_TARGET_SELECTOR_STR, "TOUCH_TARGET_SELECTOR")
});

/// Counts of page resources, taken from markup only (nothing is downloaded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceCounts {
    /// UTF-8 byte length of all inline `<style>` content
    pub inline_css_bytes: u64,
    /// `<link rel="stylesheet">` elements
    pub stylesheet_links: u64,
    /// UTF-8 byte length of all inline `<script>` content
    pub inline_js_bytes: u64,
    /// `<script src>` elements with no inline body, excluding CDN-hosted ones
    pub external_scripts: u64,
    /// `<link>` elements whose `href` mentions a font
    pub font_links: u64,
    /// Buttons, anchors and button inputs
    pub touch_targets: u64,
}

/// Counts stylesheets, scripts, font links and touch targets.
pub fn extract_resource_counts(document: &ParsedDocument) -> ResourceCounts {
    let html = document.html();
    let mut counts = ResourceCounts::default();

    for style in html.select(&STYLE_SELECTOR) {
        counts.inline_css_bytes += style.text().map(str::len).sum::<usize>() as u64;
    }

    counts.stylesheet_links = html
        .select(&STYLESHEET_LINK_SELECTOR)
        .filter(|link| {
            link.value().attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("stylesheet"))
            })
        })
        .count() as u64;

    for script in html.select(&SCRIPT_SELECTOR) {
        let inline_len: usize = script.text().map(str::len).sum();
        if inline_len > 0 {
            counts.inline_js_bytes += inline_len as u64;
        } else if let Some(src) = script.value().attr("src") {
            if !src.trim().is_empty() && !src.to_ascii_lowercase().contains("cdn") {
                counts.external_scripts += 1;
            }
        }
    }

    counts.font_links = html.select(&FONT_LINK_SELECTOR).count() as u64;
    counts.touch_targets = html.select(&TOUCH_TARGET_SELECTOR).count() as u64;

    counts
}
