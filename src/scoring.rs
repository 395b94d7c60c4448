//! Category and overall scores.
//!
//! Each category starts at 100 and loses fixed penalties per failed check. The
//! score is floored at zero after every deduction, not only at the end.

use serde::Serialize;

use crate::analysis::{
    BrokenLinksRecord, CanonicalRecord, ContentMetricsRecord, DuplicateContentRecord,
    HeadingAnalysisRecord, ImageAnalysisRecord, LinkAnalysisRecord, MetaTagsRecord,
    PerformanceScoreRecord, Severity, SocialTagsRecord, StructuredDataRecord,
    TitleDescriptionRecord, UrlStructureRecord,
};
use crate::config::{
    BROKEN_LINK_PENALTY, CONTENT_WEIGHT, DESCRIPTION_CRITICAL_PENALTY, DESCRIPTION_WARNING_PENALTY,
    DUPLICATE_POOR_PENALTY, DUPLICATE_WARNING_PENALTY, HEADING_CRITICAL_PENALTY,
    HEADING_WARNING_PENALTY, MISSING_CANONICAL_PENALTY, MISSING_SITEMAP_PENALTY,
    MISSING_STRUCTURED_DATA_PENALTY, MOST_ALT_MISSING_PENALTY, NO_INTERNAL_LINKS_PENALTY,
    ON_PAGE_WEIGHT, OPEN_GRAPH_CRITICAL_PENALTY, OPEN_GRAPH_WARNING_PENALTY, PERFORMANCE_WEIGHT,
    SOME_ALT_MISSING_PENALTY, SUSPICIOUS_LINK_PENALTY, TECHNICAL_WEIGHT, THIN_CONTENT_PENALTY,
    THIN_CONTENT_WORDS, TITLE_CRITICAL_PENALTY, TITLE_WARNING_PENALTY, URL_POOR_PENALTY,
    URL_WARNING_PENALTY, VERY_THIN_CONTENT_PENALTY, VERY_THIN_CONTENT_WORDS,
};
use crate::utils::deduct;

/// The four category scores and their weighted combination, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub overall: u32,
    pub technical: u32,
    pub content: u32,
    pub performance: u32,
    pub on_page: u32,
}

impl ScoreRecord {
    /// Builds the record, computing `overall` from the fixed weights.
    pub fn from_categories(technical: u32, content: u32, performance: u32, on_page: u32) -> Self {
        Self {
            overall: overall_score(technical, content, performance, on_page),
            technical,
            content,
            performance,
            on_page,
        }
    }
}

/// `round(0.30·technical + 0.25·content + 0.25·performance + 0.20·onPage)`.
pub fn overall_score(technical: u32, content: u32, performance: u32, on_page: u32) -> u32 {
    let weighted = technical as f64 * TECHNICAL_WEIGHT
        + content as f64 * CONTENT_WEIGHT
        + performance as f64 * PERFORMANCE_WEIGHT
        + on_page as f64 * ON_PAGE_WEIGHT;
    (weighted.round() as u32).min(100)
}

/// Penalty for a two-level check: the first value on failure, the second on warning.
fn tiered(severity: Severity, fail: u32, warn: u32) -> u32 {
    match severity {
        Severity::Fail => fail,
        Severity::Warn => warn,
        Severity::Pass => 0,
    }
}

/// Technical score from meta tags, Open Graph, canonical, JSON-LD and sitemap.
pub fn technical_score(
    meta: &MetaTagsRecord,
    open_graph: &SocialTagsRecord,
    canonical: &CanonicalRecord,
    structured_data: &StructuredDataRecord,
    has_sitemap: bool,
) -> u32 {
    let mut score = 100;
    score = deduct(
        score,
        tiered(
            meta.title.status.severity(),
            TITLE_CRITICAL_PENALTY,
            TITLE_WARNING_PENALTY,
        ),
    );
    score = deduct(
        score,
        tiered(
            meta.description.status.severity(),
            DESCRIPTION_CRITICAL_PENALTY,
            DESCRIPTION_WARNING_PENALTY,
        ),
    );
    score = deduct(
        score,
        tiered(
            open_graph.status.severity(),
            OPEN_GRAPH_CRITICAL_PENALTY,
            OPEN_GRAPH_WARNING_PENALTY,
        ),
    );
    if !canonical.present {
        score = deduct(score, MISSING_CANONICAL_PENALTY);
    }
    if !structured_data.present {
        score = deduct(score, MISSING_STRUCTURED_DATA_PENALTY);
    }
    if !has_sitemap {
        score = deduct(score, MISSING_SITEMAP_PENALTY);
    }
    score
}

/// Content score from headings, alt text, word count and internal links.
pub fn content_score(
    headings: &HeadingAnalysisRecord,
    images: &ImageAnalysisRecord,
    content: &ContentMetricsRecord,
    links: &LinkAnalysisRecord,
) -> u32 {
    let mut score = 100;
    score = deduct(
        score,
        tiered(
            headings.status.severity(),
            HEADING_CRITICAL_PENALTY,
            HEADING_WARNING_PENALTY,
        ),
    );

    if images.missing_alt * 2 > images.total {
        score = deduct(score, MOST_ALT_MISSING_PENALTY);
    } else if images.missing_alt > 0 {
        score = deduct(score, SOME_ALT_MISSING_PENALTY);
    }

    if content.word_count < VERY_THIN_CONTENT_WORDS {
        score = deduct(score, VERY_THIN_CONTENT_PENALTY);
    } else if content.word_count < THIN_CONTENT_WORDS {
        score = deduct(score, THIN_CONTENT_PENALTY);
    }

    if links.internal == 0 {
        score = deduct(score, NO_INTERNAL_LINKS_PENALTY);
    }
    score
}

/// On-page score from title/description ratings, URL, broken links and duplicates.
pub fn on_page_score(
    title_description: &TitleDescriptionRecord,
    url_structure: &UrlStructureRecord,
    broken_links: &BrokenLinksRecord,
    duplicate_content: &DuplicateContentRecord,
) -> u32 {
    let mut score = 100;
    score = deduct(
        score,
        tiered(
            title_description.title_status.severity(),
            TITLE_CRITICAL_PENALTY,
            TITLE_WARNING_PENALTY,
        ),
    );
    score = deduct(
        score,
        tiered(
            title_description.description_status.severity(),
            DESCRIPTION_CRITICAL_PENALTY,
            DESCRIPTION_WARNING_PENALTY,
        ),
    );
    score = deduct(
        score,
        tiered(
            url_structure.status.severity(),
            URL_POOR_PENALTY,
            URL_WARNING_PENALTY,
        ),
    );

    if broken_links.broken_count > 0 {
        score = deduct(score, BROKEN_LINK_PENALTY);
    } else if broken_links.suspicious_count > 0 {
        score = deduct(score, SUSPICIOUS_LINK_PENALTY);
    }

    score = deduct(
        score,
        tiered(
            duplicate_content.status.severity(),
            DUPLICATE_POOR_PENALTY,
            DUPLICATE_WARNING_PENALTY,
        ),
    );
    score
}

/// Performance category score: the estimator's overall, clamped to 100.
pub fn performance_category_score(performance: &PerformanceScoreRecord) -> u32 {
    performance.overall.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_weights() {
        assert_eq!(overall_score(100, 100, 100, 100), 100);
        assert_eq!(overall_score(0, 0, 0, 0), 0);
        // 0.30*80 + 0.25*60 + 0.25*40 + 0.20*90 = 24 + 15 + 10 + 18
        assert_eq!(overall_score(80, 60, 40, 90), 67);
        // 0.30*55 + 0.25*55 + 0.25*55 + 0.20*55 = 55
        assert_eq!(overall_score(55, 55, 55, 55), 55);
    }

    #[test]
    fn test_from_categories() {
        let scores = ScoreRecord::from_categories(70, 80, 90, 100);
        // 21 + 20 + 22.5 + 20 = 83.5
        assert_eq!(scores.overall, 84);
        assert_eq!(scores.on_page, 100);
    }

    #[test]
    fn test_tiered() {
        assert_eq!(tiered(Severity::Fail, 20, 10), 20);
        assert_eq!(tiered(Severity::Warn, 20, 10), 10);
        assert_eq!(tiered(Severity::Pass, 20, 10), 0);
    }

    #[test]
    fn test_score_record_serializes_camel_case() {
        let json = serde_json::to_value(ScoreRecord::from_categories(1, 2, 3, 4)).unwrap();
        assert!(json.get("onPage").is_some());
        assert!(json.get("on_page").is_none());
    }
}
