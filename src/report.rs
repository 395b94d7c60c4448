//! Human-facing summary of an analysis: issues, passed checks, score labels
//! and competitor comparison.

use serde::Serialize;

use crate::analysis::Status;
use crate::analyze::AnalysisResult;
use crate::config::{LOAD_TIME_ISSUE_MS, THIN_CONTENT_WORDS, VERY_THIN_CONTENT_WORDS};

/// Report section an issue belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::AsRefStr,
)]
pub enum Category {
    #[strum(serialize = "Technical SEO")]
    #[serde(rename = "Technical SEO")]
    TechnicalSeo,
    #[strum(serialize = "Content")]
    #[serde(rename = "Content")]
    Content,
    #[strum(serialize = "Performance")]
    #[serde(rename = "Performance")]
    Performance,
    #[strum(serialize = "On-Page SEO")]
    #[serde(rename = "On-Page SEO")]
    OnPageSeo,
    #[strum(serialize = "Mobile")]
    #[serde(rename = "Mobile")]
    Mobile,
}

/// A problem that needs attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub category: Category,
    pub issue: String,
    pub recommendation: String,
}

/// A check the page passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassedItem {
    pub category: Category,
    pub item: String,
}

/// Issues grouped by urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub critical: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub passed: Vec<PassedItem>,
}

impl IssueSummary {
    fn critical(&mut self, category: Category, issue: impl Into<String>, recommendation: impl Into<String>) {
        self.critical.push(Issue {
            category,
            issue: issue.into(),
            recommendation: recommendation.into(),
        });
    }

    fn warning(&mut self, category: Category, issue: impl Into<String>, recommendation: impl Into<String>) {
        self.warnings.push(Issue {
            category,
            issue: issue.into(),
            recommendation: recommendation.into(),
        });
    }

    fn pass(&mut self, category: Category, item: impl Into<String>) {
        self.passed.push(PassedItem {
            category,
            item: item.into(),
        });
    }
}

/// Label for an overall score.
pub fn score_label(score: u32) -> &'static str {
    match score {
        90.. => "Excellent",
        70..=89 => "Good",
        50..=69 => "Needs Improvement",
        _ => "Poor",
    }
}

/// Sorts the result's findings into critical issues, warnings and passed checks.
///
/// Order inside each list follows the report layout: technical, content,
/// performance, on-page, mobile.
pub fn collect_issues(result: &AnalysisResult) -> IssueSummary {
    use Category::*;

    let mut summary = IssueSummary::default();
    let meta = &result.meta_tags;

    match meta.title.status {
        Status::Critical => summary.critical(
            TechnicalSeo,
            "Missing or very short title tag",
            &meta.title.recommendation,
        ),
        Status::Warning => summary.warning(
            TechnicalSeo,
            "Title tag needs optimization",
            &meta.title.recommendation,
        ),
        Status::Passed => summary.pass(TechnicalSeo, "Title tag is optimized"),
    }

    match meta.description.status {
        Status::Critical => summary.critical(
            TechnicalSeo,
            "Missing or very short meta description",
            &meta.description.recommendation,
        ),
        Status::Warning => summary.warning(
            TechnicalSeo,
            "Meta description needs optimization",
            &meta.description.recommendation,
        ),
        Status::Passed => summary.pass(TechnicalSeo, "Meta description is optimized"),
    }

    if result.canonical.present {
        summary.pass(TechnicalSeo, "Canonical URL is set");
    } else {
        summary.warning(
            TechnicalSeo,
            "Missing canonical URL",
            "Add a canonical URL to prevent duplicate content issues",
        );
    }

    if result.structured_data.present {
        summary.pass(
            TechnicalSeo,
            format!(
                "{} structured data schema(s) found",
                result.structured_data.count
            ),
        );
    } else {
        summary.warning(
            TechnicalSeo,
            "No structured data found",
            "Add Schema.org markup for rich snippets",
        );
    }

    let h1 = result.heading_analysis.counts.h1;
    if h1 == 0 {
        summary.critical(Content, "Missing H1 tag", "Add a main H1 heading to your page");
    } else if h1 > 1 {
        summary.warning(
            Content,
            format!("Multiple H1 tags ({})", h1),
            "Use only one H1 tag per page",
        );
    } else {
        summary.pass(Content, "H1 tag structure is correct");
    }

    let images = &result.image_analysis;
    if images.missing_alt * 2 > images.total {
        summary.critical(
            Content,
            format!("{} images missing alt text", images.missing_alt),
            "Add descriptive alt text to all images for accessibility and SEO",
        );
    } else if images.missing_alt > 0 {
        summary.warning(
            Content,
            format!("{} images missing alt text", images.missing_alt),
            "Add alt text to remaining images",
        );
    } else if images.total > 0 {
        summary.pass(Content, "All images have alt text");
    }

    let words = result.content_metrics.word_count;
    if words < VERY_THIN_CONTENT_WORDS {
        summary.critical(
            Content,
            format!("Very thin content ({} words)", words),
            "Add substantial content - aim for at least 300 words",
        );
    } else if words < THIN_CONTENT_WORDS {
        summary.warning(
            Content,
            format!("Thin content ({} words)", words),
            "Add more content - aim for at least 300 words",
        );
    } else {
        summary.pass(Content, format!("Good content length ({} words)", words));
    }

    let perf = &result.image_performance;
    if perf.legacy_count > perf.next_gen_count {
        summary.warning(
            Performance,
            format!("{} images using legacy formats", perf.legacy_count),
            "Convert images to WebP or AVIF for better performance",
        );
    } else if perf.next_gen_count > 0 {
        summary.pass(
            Performance,
            format!("{} images using next-gen formats", perf.next_gen_count),
        );
    }

    let seconds = result.load_time.estimated_time / 1000.0;
    if result.load_time.estimated_time > LOAD_TIME_ISSUE_MS {
        summary.warning(
            Performance,
            format!("Slow page load time ({:.2}s)", seconds),
            "Optimize resources to improve load time",
        );
    } else {
        summary.pass(Performance, format!("Good page load time ({:.2}s)", seconds));
    }

    let broken = result.broken_links.broken_count;
    if broken > 0 {
        summary.critical(
            OnPageSeo,
            format!("{} broken links found", broken),
            "Fix all broken links immediately",
        );
    } else {
        summary.pass(OnPageSeo, "No broken links detected");
    }

    if result.url_structure.is_secure {
        summary.pass(OnPageSeo, "Site is using HTTPS");
    } else {
        summary.critical(
            OnPageSeo,
            "Site not using HTTPS",
            "Switch to HTTPS for security and SEO",
        );
    }

    if result.mobile_friendly.has_viewport {
        summary.pass(Mobile, "Viewport meta tag is present");
    } else {
        summary.critical(
            Mobile,
            "Missing viewport meta tag",
            "Add viewport meta tag for mobile optimization",
        );
    }

    summary
}

/// One row of a two-page score comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDelta {
    pub metric: &'static str,
    pub yours: u32,
    pub competitor: u32,
    /// `yours - competitor`
    pub difference: i64,
}

/// Compares the scores of two analyses, overall first.
pub fn compare(yours: &AnalysisResult, competitor: &AnalysisResult) -> Vec<ScoreDelta> {
    let a = &yours.scores;
    let b = &competitor.scores;
    [
        ("Overall", a.overall, b.overall),
        ("Technical SEO", a.technical, b.technical),
        ("Content Quality", a.content, b.content),
        ("Performance", a.performance, b.performance),
        ("On-Page SEO", a.on_page, b.on_page),
    ]
    .into_iter()
    .map(|(metric, yours, competitor)| ScoreDelta {
        metric,
        yours,
        competitor,
        difference: i64::from(yours) - i64::from(competitor),
    })
    .collect()
}
