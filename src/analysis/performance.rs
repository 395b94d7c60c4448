//! Performance estimators.
//!
//! Nothing here is measured in a browser. Load-time milestones are fixed
//! fractions of the supplied fetch time and resource sizes are per-type
//! estimates derived from the markup.

use serde::Serialize;

use super::recommendations::{recommend, recommend_with, Check};
use super::technical::MetaTagsRecord;
use super::{Rating, Severity};
use crate::config::{
    DOM_CONTENT_LOADED_FRACTION, EXTERNAL_SCRIPT_BYTES, EXTERNAL_STYLESHEET_BYTES,
    FIRST_PAINT_FRACTION, FONT_FILE_BYTES, HTML_SIZE_LARGE_BYTES, HTML_SIZE_LARGE_PENALTY,
    HTML_SIZE_MEDIUM_BYTES, HTML_SIZE_MEDIUM_PENALTY, IMAGE_WEIGHT_POOR_BYTES,
    IMAGE_WEIGHT_WARNING_BYTES, LOAD_TIME_GOOD_MS, LOAD_TIME_POOR_MS,
    MOBILE_HORIZONTAL_SCROLL_PENALTY, MOBILE_NOT_DEVICE_WIDTH_PENALTY,
    MOBILE_NOT_RESPONSIVE_PENALTY, MOBILE_NO_SRCSET_PENALTY, MOBILE_NO_VIEWPORT_PENALTY,
    MOBILE_SCORE_GOOD, MOBILE_SCORE_POOR, NEXT_GEN_RATIO_PENALTIES, NEXT_GEN_REDUCTION,
    NOT_MOBILE_FRIENDLY_PENALTY, PAGE_WEIGHT_GOOD_BYTES, PAGE_WEIGHT_POOR_BYTES,
    SPEED_SCORE_BANDS, TIME_TO_INTERACTIVE_FRACTION,
};
use crate::parse::{ExtractedImage, ResourceCounts};
use crate::utils::deduct;

const BYTES_PER_MB: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTimeRecord {
    /// The supplied fetch time in milliseconds
    pub estimated_time: f64,
    /// Approximation: a fixed fraction of `estimated_time`
    pub dom_content_loaded: f64,
    /// Approximation: a fixed fraction of `estimated_time`
    pub first_paint: f64,
    /// Approximation: a fixed multiple of `estimated_time`
    pub time_to_interactive: f64,
    /// Always `true`; milestones are never measured
    pub is_approximation: bool,
    pub status: Rating,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesRecord {
    pub total_size: u64,
    pub html: u64,
    pub css: u64,
    pub javascript: u64,
    pub fonts: u64,
    pub other: u64,
    pub status: Rating,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePerformanceRecord {
    pub total_weight: u64,
    pub potential_savings: u64,
    pub optimized_weight: u64,
    pub next_gen_count: usize,
    pub legacy_count: usize,
    pub total_images: usize,
    /// Percent of `total_weight` saved by converting legacy images
    pub avg_reduction: u64,
    pub status: Rating,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileFriendlyRecord {
    pub has_viewport: bool,
    pub is_responsive: bool,
    /// `Adequate` when the page has any button or link, else `Limited`
    pub touch_targets: String,
    pub text_readable: bool,
    pub no_horizontal_scroll: bool,
    pub responsive_images: usize,
    pub total_images: usize,
    pub score: u32,
    pub status: Rating,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceScoreRecord {
    pub overall: u32,
    pub speed: u32,
    pub optimization: u32,
}

/// Load time band: below 2000ms good, above 5000ms poor.
pub fn classify_load_time(load_time_ms: f64) -> Severity {
    if load_time_ms > LOAD_TIME_POOR_MS {
        Severity::Fail
    } else if load_time_ms >= LOAD_TIME_GOOD_MS {
        Severity::Warn
    } else {
        Severity::Pass
    }
}

pub fn analyze_load_time(load_time_ms: f64) -> LoadTimeRecord {
    let severity = classify_load_time(load_time_ms);
    LoadTimeRecord {
        estimated_time: load_time_ms,
        dom_content_loaded: load_time_ms * DOM_CONTENT_LOADED_FRACTION,
        first_paint: load_time_ms * FIRST_PAINT_FRACTION,
        time_to_interactive: load_time_ms * TIME_TO_INTERACTIVE_FRACTION,
        is_approximation: true,
        status: severity.rating(),
        recommendation: recommend(Check::LoadTime, severity),
    }
}

fn megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}

/// Estimates page weight per resource type.
///
/// # Arguments
///
/// * `html_length` - Byte length of the HTML payload
/// * `counts` - Stylesheet, script and font counts from the markup
pub fn analyze_resources(html_length: u64, counts: &ResourceCounts) -> ResourcesRecord {
    let css = counts.inline_css_bytes + counts.stylesheet_links * EXTERNAL_STYLESHEET_BYTES;
    let javascript = counts.inline_js_bytes + counts.external_scripts * EXTERNAL_SCRIPT_BYTES;
    let fonts = counts.font_links * FONT_FILE_BYTES;
    let other = 0;
    let total_size = html_length + css + javascript + fonts + other;

    let severity = if total_size > PAGE_WEIGHT_POOR_BYTES {
        Severity::Fail
    } else if total_size > PAGE_WEIGHT_GOOD_BYTES {
        Severity::Warn
    } else {
        Severity::Pass
    };

    ResourcesRecord {
        total_size,
        html: html_length,
        css,
        javascript,
        fonts,
        other,
        status: severity.rating(),
        recommendation: recommend_with(
            Check::PageWeight,
            severity,
            &[("size", megabytes(total_size))],
        ),
    }
}

/// Estimates image weight and the savings of converting legacy formats.
pub fn analyze_image_performance(images: &[ExtractedImage]) -> ImagePerformanceRecord {
    let total_weight: u64 = images.iter().map(|i| i.format.estimated_bytes()).sum();
    let legacy_weight: u64 = images
        .iter()
        .filter(|i| i.format.is_legacy())
        .map(|i| i.format.estimated_bytes())
        .sum();
    let next_gen_count = images.iter().filter(|i| i.format.is_next_gen()).count();
    let legacy_count = images.iter().filter(|i| i.format.is_legacy()).count();

    let potential_savings = (legacy_weight as f64 * NEXT_GEN_REDUCTION).round() as u64;
    let optimized_weight = total_weight.saturating_sub(potential_savings);
    let avg_reduction = if total_weight > 0 {
        (potential_savings as f64 / total_weight as f64 * 100.0).round() as u64
    } else {
        0
    };

    let severity = if total_weight > IMAGE_WEIGHT_POOR_BYTES {
        Severity::Fail
    } else if total_weight > IMAGE_WEIGHT_WARNING_BYTES || legacy_count > next_gen_count {
        Severity::Warn
    } else {
        Severity::Pass
    };

    ImagePerformanceRecord {
        total_weight,
        potential_savings,
        optimized_weight,
        next_gen_count,
        legacy_count,
        total_images: images.len(),
        avg_reduction,
        status: severity.rating(),
        recommendation: recommend_with(
            Check::ImageWeight,
            severity,
            &[("size", megabytes(total_weight))],
        ),
    }
}

/// Scores mobile friendliness from 100 down, using viewport and `srcset` signals.
///
/// # Arguments
///
/// * `meta` - Judged meta tags (viewport presence and `device-width`)
/// * `images` - Extracted images, for `srcset` usage
/// * `touch_targets` - Number of buttons and links
pub fn analyze_mobile_friendliness(
    meta: &MetaTagsRecord,
    images: &[ExtractedImage],
    touch_targets: u64,
) -> MobileFriendlyRecord {
    let has_viewport = meta.viewport.present;
    let device_width = meta.viewport.is_mobile_friendly;
    let is_responsive = has_viewport && device_width;
    let no_horizontal_scroll = has_viewport;
    let responsive_images = images.iter().filter(|i| i.has_responsive()).count();
    let total_images = images.len();

    let mut score = 100;
    if !has_viewport {
        score = deduct(score, MOBILE_NO_VIEWPORT_PENALTY);
    }
    if !device_width {
        score = deduct(score, MOBILE_NOT_DEVICE_WIDTH_PENALTY);
    }
    if !is_responsive {
        score = deduct(score, MOBILE_NOT_RESPONSIVE_PENALTY);
    }
    if !no_horizontal_scroll {
        score = deduct(score, MOBILE_HORIZONTAL_SCROLL_PENALTY);
    }
    if total_images > 0 && responsive_images == 0 {
        score = deduct(score, MOBILE_NO_SRCSET_PENALTY);
    }

    let severity = if score < MOBILE_SCORE_POOR {
        Severity::Fail
    } else if score < MOBILE_SCORE_GOOD {
        Severity::Warn
    } else {
        Severity::Pass
    };

    MobileFriendlyRecord {
        has_viewport,
        is_responsive,
        touch_targets: (if touch_targets > 0 { "Adequate" } else { "Limited" }).to_string(),
        text_readable: true,
        no_horizontal_scroll,
        responsive_images,
        total_images,
        score,
        status: severity.rating(),
        recommendation: recommend(Check::MobileFriendly, severity),
    }
}

/// Speed sub-score from load time.
pub fn speed_score(load_time_ms: f64) -> u32 {
    SPEED_SCORE_BANDS
        .iter()
        .find(|(threshold, _)| load_time_ms > *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(100)
}

/// Combines the speed and optimization sub-scores.
///
/// # Arguments
///
/// * `load_time_ms` - Supplied fetch time
/// * `html_length` - Byte length of the HTML payload
/// * `images` - Extracted images, for the next-gen ratio
/// * `viewport_mobile_friendly` - Whether the viewport declares `device-width`
///
/// # Returns
///
/// Sub-scores and `overall = round((speed + optimization) / 2)`, all in `0..=100`.
pub fn calculate_performance_score(
    load_time_ms: f64,
    html_length: u64,
    images: &[ExtractedImage],
    viewport_mobile_friendly: bool,
) -> PerformanceScoreRecord {
    let speed = speed_score(load_time_ms);

    let mut optimization = 100;
    if html_length > HTML_SIZE_LARGE_BYTES {
        optimization = deduct(optimization, HTML_SIZE_LARGE_PENALTY);
    } else if html_length > HTML_SIZE_MEDIUM_BYTES {
        optimization = deduct(optimization, HTML_SIZE_MEDIUM_PENALTY);
    }

    if !images.is_empty() {
        let next_gen = images.iter().filter(|i| i.format.is_next_gen()).count();
        let ratio = next_gen as f64 / images.len() as f64;
        if let Some((_, penalty)) = NEXT_GEN_RATIO_PENALTIES
            .iter()
            .find(|(threshold, _)| ratio < *threshold)
        {
            optimization = deduct(optimization, *penalty);
        }
    }

    if !viewport_mobile_friendly {
        optimization = deduct(optimization, NOT_MOBILE_FRIENDLY_PENALTY);
    }

    let overall = ((speed + optimization) as f64 / 2.0).round() as u32;

    PerformanceScoreRecord {
        overall: overall.min(100),
        speed,
        optimization,
    }
}
