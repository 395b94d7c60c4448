//! Standard meta tag, canonical link and robots directive extraction.

use scraper::Selector;
use std::sync::LazyLock;

use super::ParsedDocument;

const TITLE_SELECTOR_STR: &str = "title";
const NAMED_META_SELECTOR_STR: &str = "meta[name]";
const LINK_REL_SELECTOR_STR: &str = "link[rel][href]";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static NAMED_META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(NAMED_META_SELECTOR_STR, "NAMED_META_SELECTOR")
});
static LINK_REL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(LINK_REL_SELECTOR_STR, "LINK_REL_SELECTOR")
});

/// Raw values of the standard meta tags. Absent tags are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub viewport: String,
}

/// Robots directives from `<meta name="robots">` plus the googlebot override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsMeta {
    /// Raw `content` of the robots meta tag
    pub content: String,
    /// Raw `content` of the googlebot meta tag (informational)
    pub googlebot: String,
    /// Lower-cased, trimmed, de-duplicated tokens in document order
    pub directives: Vec<String>,
}

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text content of the first `<title>` element, with
/// entities decoded, or an empty string if there is none.
pub fn extract_title(document: &ParsedDocument) -> String {
    match document.html().select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Returns the `content` of the first `<meta name=...>` whose name matches
/// (ASCII case-insensitive), or an empty string.
fn named_meta_content(document: &ParsedDocument, name: &str) -> String {
    document
        .html()
        .select(&NAMED_META_SELECTOR)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts title, description, keywords, author and viewport.
pub fn extract_meta_tags(document: &ParsedDocument) -> MetaTags {
    MetaTags {
        title: extract_title(document),
        description: named_meta_content(document, "description"),
        keywords: named_meta_content(document, "keywords"),
        author: named_meta_content(document, "author"),
        viewport: named_meta_content(document, "viewport"),
    }
}

/// Extracts the `href` of the first `<link rel="canonical">`, if any.
///
/// `rel` is a space-separated token list, so `rel="canonical nofollow"` also counts.
pub fn extract_canonical(document: &ParsedDocument) -> Option<String> {
    document
        .html()
        .select(&LINK_REL_SELECTOR)
        .find(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Extracts robots directives.
pub fn extract_robots(document: &ParsedDocument) -> RobotsMeta {
    let content = named_meta_content(document, "robots");
    let googlebot = named_meta_content(document, "googlebot");

    let mut directives: Vec<String> = Vec::new();
    for token in content.to_lowercase().split(',') {
        let token = token.trim();
        if !token.is_empty() && !directives.iter().any(|d| d == token) {
            directives.push(token.to_string());
        }
    }

    RobotsMeta {
        content,
        googlebot,
        directives,
    }
}
