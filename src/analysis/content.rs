//! Content checks: heading structure, image alt text, text volume and link tally.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::recommendations::{recommend, recommend_with, Check};
use super::{Severity, Status};
use crate::config::{READING_SPEED_WPM, THIN_CONTENT_WORDS, VERY_THIN_CONTENT_WORDS};
use crate::parse::{ExtractedImage, ExtractedLinks, Heading, ImageFormat, Link};
use crate::utils::plural;

// A blank line (possibly holding only spaces) separates paragraphs
static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::utils::compile_regex_unsafe(r"\n\s*\n", "PARAGRAPH_BREAK_RE"));

/// Number of headings per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    /// Count for a level in `1..=6`; other levels have no headings.
    pub fn level(&self, level: u8) -> usize {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => 0,
        }
    }

    fn bump(&mut self, level: u8) {
        match level {
            1 => self.h1 += 1,
            2 => self.h2 += 1,
            3 => self.h3 += 1,
            4 => self.h4 += 1,
            5 => self.h5 += 1,
            6 => self.h6 += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingAnalysisRecord {
    pub counts: HeadingCounts,
    /// Every heading in document order
    pub hierarchy: Vec<Heading>,
    pub status: Status,
    pub recommendation: String,
}

/// One image with its derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedImage {
    pub src: String,
    pub alt: String,
    pub has_alt: bool,
    pub loading: String,
    pub is_lazy_loaded: bool,
    pub format: ImageFormat,
    pub is_next_gen: bool,
    pub has_responsive: bool,
    /// Estimated transfer size in bytes, from the format
    pub estimated_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisRecord {
    pub total: usize,
    pub missing_alt: usize,
    pub next_gen_format: usize,
    pub legacy_format: usize,
    pub lazy_loaded: usize,
    pub responsive: usize,
    /// Images per format name
    pub format_breakdown: BTreeMap<String, usize>,
    pub images: Vec<AnalyzedImage>,
    pub status: Status,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetricsRecord {
    pub word_count: usize,
    pub char_count: usize,
    pub paragraph_count: usize,
    /// Minutes, rounded up
    pub reading_time: usize,
    pub status: Status,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAnalysisRecord {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    /// Pattern-detected broken links (see the on-page broken link check)
    pub broken: usize,
    pub internal_links: Vec<Link>,
    pub external_links: Vec<Link>,
    pub status: Status,
    pub recommendation: String,
}

/// Counts headings per level and judges the H1 count.
///
/// No H1 is critical, more than one is a warning.
pub fn analyze_headings(hierarchy: Vec<Heading>) -> HeadingAnalysisRecord {
    let mut counts = HeadingCounts::default();
    for heading in &hierarchy {
        counts.bump(heading.level);
    }

    let severity = match counts.h1 {
        0 => Severity::Fail,
        1 => Severity::Pass,
        _ => Severity::Warn,
    };

    HeadingAnalysisRecord {
        counts,
        hierarchy,
        status: severity.status(),
        recommendation: recommend_with(
            Check::Headings,
            severity,
            &[("count", counts.h1.to_string())],
        ),
    }
}

/// Severity of missing alt text: more than half critical, any warning.
pub fn classify_missing_alt(missing_alt: usize, total: usize) -> Severity {
    if missing_alt == 0 {
        Severity::Pass
    } else if missing_alt * 2 > total {
        Severity::Fail
    } else {
        Severity::Warn
    }
}

/// Tallies formats, alt text, lazy loading and `srcset` usage.
pub fn analyze_images(images: &[ExtractedImage]) -> ImageAnalysisRecord {
    let mut format_breakdown = BTreeMap::new();
    let analyzed: Vec<AnalyzedImage> = images
        .iter()
        .map(|image| {
            *format_breakdown.entry(image.format.to_string()).or_insert(0) += 1;
            AnalyzedImage {
                src: image.src.clone(),
                alt: image.alt.clone(),
                has_alt: image.has_alt(),
                loading: image.loading.clone(),
                is_lazy_loaded: image.is_lazy_loaded(),
                format: image.format,
                is_next_gen: image.format.is_next_gen(),
                has_responsive: image.has_responsive(),
                estimated_size: image.format.estimated_bytes(),
            }
        })
        .collect();

    let total = analyzed.len();
    let missing_alt = analyzed.iter().filter(|i| !i.has_alt).count();
    let severity = classify_missing_alt(missing_alt, total);

    ImageAnalysisRecord {
        total,
        missing_alt,
        next_gen_format: analyzed.iter().filter(|i| i.is_next_gen).count(),
        legacy_format: analyzed.iter().filter(|i| i.format.is_legacy()).count(),
        lazy_loaded: analyzed.iter().filter(|i| i.is_lazy_loaded).count(),
        responsive: analyzed.iter().filter(|i| i.has_responsive).count(),
        format_breakdown,
        images: analyzed,
        status: severity.status(),
        recommendation: recommend_with(
            Check::ImageAlt,
            severity,
            &[
                ("count", missing_alt.to_string()),
                ("s", plural(missing_alt).to_string()),
            ],
        ),
    }
}

/// Word count band: under 100 critical, under 300 warning.
pub fn classify_word_count(word_count: usize) -> Severity {
    if word_count < VERY_THIN_CONTENT_WORDS {
        Severity::Fail
    } else if word_count < THIN_CONTENT_WORDS {
        Severity::Warn
    } else {
        Severity::Pass
    }
}

/// Measures visible text.
///
/// # Arguments
///
/// * `text` - Visible body text of the page
pub fn analyze_content(text: &str) -> ContentMetricsRecord {
    let word_count = text.split_whitespace().count();
    let paragraph_count = PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();
    let severity = classify_word_count(word_count);

    ContentMetricsRecord {
        word_count,
        char_count: text.chars().count(),
        paragraph_count,
        reading_time: word_count.div_ceil(READING_SPEED_WPM),
        status: severity.status(),
        recommendation: recommend(Check::ContentLength, severity),
    }
}

/// Tallies internal and external links. No internal links is a warning.
///
/// # Arguments
///
/// * `links` - Extracted links of the page
/// * `broken` - Count from the broken link heuristic
pub fn analyze_links(links: &ExtractedLinks, broken: usize) -> LinkAnalysisRecord {
    let internal = links.internal.len();
    let external = links.external.len();
    let severity = if internal == 0 {
        Severity::Warn
    } else {
        Severity::Pass
    };

    LinkAnalysisRecord {
        total: internal + external,
        internal,
        external,
        broken,
        internal_links: links.internal.clone(),
        external_links: links.external.clone(),
        status: severity.status(),
        recommendation: recommend(Check::InternalLinks, severity),
    }
}
