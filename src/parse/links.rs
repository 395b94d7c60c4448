//! Anchor extraction and internal/external classification.

use scraper::{ElementRef, Selector};
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

use super::ParsedDocument;
use crate::utils::collapse_whitespace;

const ANCHOR_SELECTOR_STR: &str = "a[href]";
const IMAGE_ALT_SELECTOR_STR: &str = "img[alt]";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR")
});
static IMAGE_ALT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(IMAGE_ALT_SELECTOR_STR, "IMAGE_ALT_SELECTOR")
});

/// A resolved hyperlink.
///
/// Serializes as `{url, text, rel}`; the raw `href` and the accessible-name
/// flag are only used by the link heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute URL after resolution against the page URL
    pub url: String,
    /// Anchor text, whitespace collapsed
    pub text: String,
    pub rel: String,
    /// The `href` attribute exactly as written (trimmed)
    #[serde(skip)]
    pub href: String,
    /// Whether the anchor has text, `aria-label`, `title` or an `img` with alt text
    #[serde(skip)]
    pub has_accessible_name: bool,
}

/// An anchor whose `href` is empty or could not be resolved to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLink {
    pub href: String,
    pub text: String,
}

/// All anchors of a document, partitioned by destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    pub internal: Vec<Link>,
    pub external: Vec<Link>,
    pub rejected: Vec<RejectedLink>,
}

impl ExtractedLinks {
    /// Internal then external links, i.e. every link that resolved.
    pub fn resolved(&self) -> impl Iterator<Item = &Link> {
        self.internal.iter().chain(self.external.iter())
    }
}

/// Extracts every `<a href>` and classifies it.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base_url` - The analyzed page URL; its host decides internal vs external
///
/// # Returns
///
/// An `ExtractedLinks` with resolved links split by host equality. Anchors
/// with an empty or unresolvable `href` land in `rejected` instead.
pub fn extract_links(document: &ParsedDocument, base_url: &Url) -> ExtractedLinks {
    let page_host = base_url.host_str();
    let mut links = ExtractedLinks::default();

    for element in document.html().select(&ANCHOR_SELECTOR) {
        let href = element.value().attr("href").unwrap_or("").trim().to_string();
        let text = collapse_whitespace(&element.text().collect::<String>());

        if href.is_empty() {
            links.rejected.push(RejectedLink { href, text });
            continue;
        }

        let resolved = match base_url.join(&href) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Could not resolve link href '{}': {}", href, e);
                links.rejected.push(RejectedLink { href, text });
                continue;
            }
        };

        let is_internal = page_host.is_some() && resolved.host_str() == page_host;
        let link = Link {
            url: resolved.into(),
            has_accessible_name: has_accessible_name(&element, &text),
            text,
            rel: element.value().attr("rel").unwrap_or("").trim().to_string(),
            href,
        };

        if is_internal {
            links.internal.push(link);
        } else {
            links.external.push(link);
        }
    }

    log::debug!(
        "Extracted {} internal, {} external and {} rejected links",
        links.internal.len(),
        links.external.len(),
        links.rejected.len()
    );
    links
}

fn has_accessible_name(anchor: &ElementRef<'_>, text: &str) -> bool {
    if !text.is_empty() {
        return true;
    }
    let non_blank = |name: &str| {
        anchor
            .value()
            .attr(name)
            .is_some_and(|value| !value.trim().is_empty())
    };
    if non_blank("aria-label") || non_blank("title") {
        return true;
    }
    anchor.select(&IMAGE_ALT_SELECTOR).any(|img| {
        img.value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty())
    })
}
