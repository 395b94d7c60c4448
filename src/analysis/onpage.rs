//! On-page checks: title and description, URL structure, broken links, duplicate content.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

use super::recommendations::{recommend, recommend_with, Check};
use super::technical::{classify_length, length_direction, MetaTagsRecord};
use super::{Rating, Severity};
use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, DUPLICATE_ISSUES_POOR, THIN_CONTENT_WORDS,
    TITLE_MAX_LENGTH, TITLE_MIN_LENGTH, URL_LENGTH_POOR, URL_LENGTH_WARNING, URL_MAX_DEPTH,
};
use crate::parse::ExtractedLinks;
use crate::utils::{char_len, plural};

static READABLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::utils::compile_regex_unsafe(r"(?i)[a-z]{3,}", "READABLE_WORD_RE"));
static SPECIAL_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    crate::utils::compile_regex_unsafe(r"[^a-zA-Z0-9/._~-]", "SPECIAL_CHAR_RE")
});

const ACCEPTED_LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDescriptionRecord {
    pub title: String,
    pub title_length: usize,
    pub title_status: Rating,
    pub title_recommendation: String,
    pub description: String,
    pub description_length: usize,
    pub description_status: Rating,
    pub description_recommendation: String,
    /// The worse of the two statuses
    pub status: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStructureRecord {
    pub url: String,
    pub protocol: String,
    pub is_secure: bool,
    pub length: usize,
    /// Informational: good up to 100 characters, poor beyond 150
    pub length_status: Rating,
    pub is_readable: bool,
    pub has_keywords: bool,
    pub has_special_chars: bool,
    /// Number of non-empty path segments
    pub depth: usize,
    pub status: Rating,
    pub recommendation: String,
}

/// A link flagged by the broken link heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedLink {
    /// The `href` as written, `(empty)` when blank
    pub url: String,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLinksRecord {
    pub total_links: usize,
    pub broken_count: usize,
    pub suspicious_count: usize,
    pub valid_count: usize,
    pub broken_links: Vec<FlaggedLink>,
    pub suspicious_links: Vec<FlaggedLink>,
    pub status: Rating,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateContentRecord {
    pub has_canonical: bool,
    pub has_robots: bool,
    /// Needs multi-page analysis; always `false` for a single page
    pub duplicate_titles: bool,
    /// Needs multi-page analysis; always `false` for a single page
    pub duplicate_descriptions: bool,
    pub thin_content: bool,
    pub issues: Vec<String>,
    pub status: Rating,
    pub recommendation: String,
}

/// Outcome of the broken link heuristic for one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVerdict {
    Valid,
    Suspicious(&'static str),
    Broken(&'static str),
}

fn length_rated(
    content: &str,
    min: usize,
    max: usize,
    check: Check,
) -> (usize, Rating, String) {
    let length = char_len(content);
    let severity = classify_length(length, min, max);
    let recommendation = recommend_with(
        check,
        severity,
        &[("direction", length_direction(length, min).to_string())],
    );
    (length, severity.rating(), recommendation)
}

/// Rates title and description with the same length bands as the meta tag check.
pub fn analyze_title_description(meta: &MetaTagsRecord) -> TitleDescriptionRecord {
    let title = meta.title.content.clone();
    let description = meta.description.content.clone();
    let (title_length, title_status, title_recommendation) =
        length_rated(&title, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH, Check::OnPageTitle);
    let (description_length, description_status, description_recommendation) = length_rated(
        &description,
        DESCRIPTION_MIN_LENGTH,
        DESCRIPTION_MAX_LENGTH,
        Check::OnPageDescription,
    );
    let status = title_status
        .severity()
        .worst(description_status.severity())
        .rating();

    TitleDescriptionRecord {
        title,
        title_length,
        title_status,
        title_recommendation,
        description,
        description_length,
        description_status,
        description_recommendation,
        status,
    }
}

/// Judges the analyzed URL: plain HTTP is poor; long, deep or special-character
/// paths need improvement.
///
/// # Arguments
///
/// * `url` - The parsed analyzed URL
/// * `raw_url` - The URL as supplied, for its length
pub fn analyze_url_structure(url: &Url, raw_url: &str) -> UrlStructureRecord {
    let protocol = url.scheme().to_string();
    let is_secure = protocol == "https";
    let length = char_len(raw_url);
    let path = url.path();

    let length_status = if length > URL_LENGTH_POOR {
        Rating::Poor
    } else if length > URL_LENGTH_WARNING {
        Rating::NeedsImprovement
    } else {
        Rating::Good
    };
    let is_readable =
        READABLE_WORD_RE.is_match(path) && !path.contains("?id=") && !path.contains('&');
    let has_keywords = path
        .split(['/', '-'])
        .any(|segment| segment.chars().count() > 3);
    let has_special_chars = SPECIAL_CHAR_RE.is_match(path);
    let depth = path.split('/').filter(|s| !s.is_empty()).count();

    let severity = if !is_secure {
        Severity::Fail
    } else if length > URL_LENGTH_POOR || has_special_chars || depth > URL_MAX_DEPTH {
        Severity::Warn
    } else {
        Severity::Pass
    };

    UrlStructureRecord {
        url: raw_url.to_string(),
        protocol,
        is_secure,
        length,
        length_status,
        is_readable,
        has_keywords,
        has_special_chars,
        depth,
        status: severity.rating(),
        recommendation: recommend(Check::UrlStructure, severity),
    }
}

/// Pattern-based verdict for one resolved anchor.
///
/// # Arguments
///
/// * `href` - The `href` attribute as written
/// * `resolved` - The resolved absolute URL
/// * `text` - Anchor text
/// * `has_accessible_name` - Text, `aria-label`, `title` or image alt is present
pub fn classify_link(href: &str, resolved: &str, text: &str, has_accessible_name: bool) -> LinkVerdict {
    if href.is_empty() {
        return LinkVerdict::Broken("Empty href");
    }
    if href == "#" {
        return LinkVerdict::Broken("Empty fragment link");
    }
    if href
        .get(..11)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("javascript:"))
    {
        return LinkVerdict::Broken("JavaScript link");
    }

    let scheme = resolved.split(':').next().unwrap_or("").to_ascii_lowercase();
    if !ACCEPTED_LINK_SCHEMES.contains(&scheme.as_str()) {
        return LinkVerdict::Suspicious("Unusual URL scheme");
    }
    if !has_accessible_name {
        return LinkVerdict::Suspicious("No anchor text or accessible name");
    }
    let symbols_only =
        !text.is_empty() && text.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace());
    if href.starts_with('#') && symbols_only {
        return LinkVerdict::Suspicious("Fragment link with symbol-only text");
    }
    LinkVerdict::Valid
}

fn flagged(href: &str, text: &str, reason: &str) -> FlaggedLink {
    FlaggedLink {
        url: if href.is_empty() {
            "(empty)".to_string()
        } else {
            href.to_string()
        },
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

/// Runs the broken link heuristic over every anchor, including rejected ones.
///
/// No network requests are made: a link is broken or suspicious by its shape only.
pub fn analyze_broken_links(links: &ExtractedLinks) -> BrokenLinksRecord {
    let mut broken_links = Vec::new();
    let mut suspicious_links = Vec::new();
    let mut valid_count = 0;

    for rejected in &links.rejected {
        let reason = if rejected.href.is_empty() {
            "Empty href"
        } else {
            "Malformed URL"
        };
        broken_links.push(flagged(&rejected.href, &rejected.text, reason));
    }

    for link in links.resolved() {
        match classify_link(&link.href, &link.url, &link.text, link.has_accessible_name) {
            LinkVerdict::Valid => valid_count += 1,
            LinkVerdict::Suspicious(reason) => {
                suspicious_links.push(flagged(&link.href, &link.text, reason))
            }
            LinkVerdict::Broken(reason) => {
                broken_links.push(flagged(&link.href, &link.text, reason))
            }
        }
    }

    let broken_count = broken_links.len();
    let suspicious_count = suspicious_links.len();
    let (severity, count) = if broken_count > 0 {
        (Severity::Fail, broken_count)
    } else if suspicious_count > 0 {
        (Severity::Warn, suspicious_count)
    } else {
        (Severity::Pass, 0)
    };

    BrokenLinksRecord {
        total_links: links.internal.len() + links.external.len() + links.rejected.len(),
        broken_count,
        suspicious_count,
        valid_count,
        broken_links,
        suspicious_links,
        status: severity.rating(),
        recommendation: recommend_with(
            Check::BrokenLinks,
            severity,
            &[("count", count.to_string()), ("s", plural(count).to_string())],
        ),
    }
}

/// Collects single-page duplicate content risks.
///
/// # Arguments
///
/// * `meta` - Judged meta tags
/// * `has_canonical` - A canonical link is declared
/// * `has_robots` - A robots meta tag is declared
/// * `word_count` - Visible word count
pub fn analyze_duplicate_content(
    meta: &MetaTagsRecord,
    has_canonical: bool,
    has_robots: bool,
    word_count: usize,
) -> DuplicateContentRecord {
    let mut issues = Vec::new();

    if !has_canonical {
        issues.push("Missing canonical tag - add to prevent duplicate content issues".to_string());
    }
    let thin_content = word_count < THIN_CONTENT_WORDS;
    if thin_content {
        issues.push(format!(
            "Thin content detected ({} words) - aim for at least {} words",
            word_count, THIN_CONTENT_WORDS
        ));
    }
    let title = &meta.title.content;
    if !title.is_empty() && *title == meta.description.content {
        issues.push("Title and description are identical - make them unique".to_string());
    }

    let severity = if issues.len() >= DUPLICATE_ISSUES_POOR {
        Severity::Fail
    } else if !issues.is_empty() {
        Severity::Warn
    } else {
        Severity::Pass
    };

    DuplicateContentRecord {
        has_canonical,
        has_robots,
        duplicate_titles: false,
        duplicate_descriptions: false,
        thin_content,
        issues,
        status: severity.rating(),
        recommendation: recommend(Check::DuplicateContent, severity),
    }
}
