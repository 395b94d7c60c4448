//! The parsed document handle shared by every extractor.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node, Selector};

use crate::error_handling::AnalysisError;

// Elements whose text never renders as page content
const NON_CONTENT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

// Something that opens a tag, a closing tag, a comment/doctype or a processing instruction
const MARKUP_PATTERN: &str = r"<\s*[A-Za-z!/?]";

static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::utils::compile_regex_unsafe(MARKUP_PATTERN, "MARKUP_RE"));

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("body", "BODY_SELECTOR"));

/// An immutable, parsed HTML document.
///
/// Extractors receive it by reference; nothing mutates it after parsing.
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses raw HTML with standard (tolerant) HTML5 parsing rules.
    ///
    /// # Errors
    ///
    /// - `AnalysisError::EmptyDocument` if the payload is empty or whitespace only
    /// - `AnalysisError::NotHtml` if the payload contains NUL bytes or no markup at all
    pub fn parse(source: &str) -> Result<Self, AnalysisError> {
        if source.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }
        if source.contains('\0') {
            return Err(AnalysisError::NotHtml(
                "payload contains binary (NUL) bytes".to_string(),
            ));
        }
        if !MARKUP_RE.is_match(source) {
            return Err(AnalysisError::NotHtml("no HTML markup found".to_string()));
        }

        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            log::debug!(
                "HTML parser recovered from {} error(s)",
                html.errors.len()
            );
        }
        Ok(Self { html })
    }

    /// The underlying `scraper` document, for selector queries.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Visible body text: every text node under `<body>` except those inside
    /// `script`, `style`, `noscript` or `template`, trimmed.
    pub fn visible_text(&self) -> String {
        let Some(body) = self.html.select(&BODY_SELECTOR).next() else {
            return String::new();
        };

        let mut text = String::new();
        for node in body.descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_CONTENT_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
        text.trim().to_string()
    }
}
