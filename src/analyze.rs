//! Single-page analysis: extraction, judgment and scoring in one pass.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::analysis::{
    analyze_broken_links, analyze_canonical, analyze_content, analyze_duplicate_content,
    analyze_headings, analyze_image_performance, analyze_images, analyze_keyword_density,
    analyze_links, analyze_load_time, analyze_meta_tags, analyze_mobile_friendliness,
    analyze_open_graph, analyze_resources, analyze_robots, analyze_structured_data,
    analyze_title_description, analyze_twitter_card, analyze_url_structure,
    calculate_performance_score, BrokenLinksRecord, CanonicalRecord, ContentMetricsRecord,
    DuplicateContentRecord, HeadingAnalysisRecord, ImageAnalysisRecord, ImagePerformanceRecord,
    KeywordDensityRecord, LinkAnalysisRecord, LoadTimeRecord, MetaTagsRecord,
    MobileFriendlyRecord, PerformanceScoreRecord, ResourcesRecord, RobotsRecord,
    SocialTagsRecord, StructuredDataRecord, TitleDescriptionRecord, UrlStructureRecord,
};
use crate::error_handling::AnalysisError;
use crate::parse::{
    extract_canonical, extract_headings, extract_images, extract_links, extract_meta_tags,
    extract_open_graph, extract_resource_counts, extract_robots, extract_structured_data,
    extract_twitter_card, ParsedDocument,
};
use crate::scoring::{
    content_score, on_page_score, performance_category_score, technical_score, ScoreRecord,
};

/// One probed sitemap location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapProbe {
    pub url: String,
    pub exists: bool,
    /// HTTP status, absent when the request itself failed
    pub status: Option<u16>,
}

/// Sitemap presence, determined outside the analysis and merged in before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SitemapRecord {
    pub present: bool,
    /// First sitemap found, empty when none
    pub url: String,
    pub checked: Vec<SitemapProbe>,
}

/// A page ready for analysis.
#[derive(Debug)]
pub struct AnalysisInput {
    /// The analyzed URL as supplied
    pub url: String,
    /// `url`, parsed
    pub parsed_url: Url,
    /// Byte length of the HTML payload
    pub html_length: u64,
    /// Measured fetch time in milliseconds
    pub load_time_ms: f64,
    pub document: ParsedDocument,
}

impl AnalysisInput {
    /// Builds an input from raw HTML.
    ///
    /// # Arguments
    ///
    /// * `url` - The page URL; must be absolute with a host
    /// * `html` - The HTML payload
    /// * `load_time_ms` - Measured fetch time; negative or non-finite values become 0
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidUrl` for a URL without a host, and
    /// `EmptyDocument` or `NotHtml` when the payload cannot be a page.
    pub fn from_html(url: &str, html: &str, load_time_ms: f64) -> Result<Self, AnalysisError> {
        let parsed_url = Url::parse(url).map_err(|e| AnalysisError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed_url.host_str().is_none() {
            return Err(AnalysisError::InvalidUrl {
                url: url.to_string(),
                reason: "URL has no host".to_string(),
            });
        }

        let document = ParsedDocument::parse(html)?;

        let load_time_ms = if load_time_ms.is_finite() && load_time_ms >= 0.0 {
            load_time_ms
        } else {
            log::warn!("Ignoring invalid load time {} for {}", load_time_ms, url);
            0.0
        };

        Ok(Self {
            url: url.to_string(),
            parsed_url,
            html_length: html.len() as u64,
            load_time_ms,
            document,
        })
    }
}

/// Everything known about one analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub meta_tags: MetaTagsRecord,
    pub open_graph: SocialTagsRecord,
    pub twitter_card: SocialTagsRecord,
    pub canonical: CanonicalRecord,
    pub robots: RobotsRecord,
    pub structured_data: StructuredDataRecord,
    pub heading_analysis: HeadingAnalysisRecord,
    pub image_analysis: ImageAnalysisRecord,
    pub content_metrics: ContentMetricsRecord,
    pub link_analysis: LinkAnalysisRecord,
    pub keyword_density: KeywordDensityRecord,
    pub load_time: LoadTimeRecord,
    pub resources: ResourcesRecord,
    pub image_performance: ImagePerformanceRecord,
    pub mobile_friendly: MobileFriendlyRecord,
    pub performance_score: PerformanceScoreRecord,
    pub title_description: TitleDescriptionRecord,
    pub url_structure: UrlStructureRecord,
    pub broken_links: BrokenLinksRecord,
    pub duplicate_content: DuplicateContentRecord,
    pub sitemap: SitemapRecord,
    pub scores: ScoreRecord,
}

/// Analyzes a page, stamping the result with the current time.
///
/// Never fails: absent elements degrade to empty records. A missing sitemap
/// record counts as no sitemap.
pub fn analyze(input: &AnalysisInput, sitemap: Option<SitemapRecord>) -> AnalysisResult {
    analyze_at(input, sitemap, Utc::now())
}

/// Analyzes a page with an explicit `analyzed_at` timestamp.
///
/// Deterministic: identical inputs give identical results.
pub fn analyze_at(
    input: &AnalysisInput,
    sitemap: Option<SitemapRecord>,
    analyzed_at: DateTime<Utc>,
) -> AnalysisResult {
    log::debug!("Analyzing {} ({} bytes)", input.url, input.html_length);
    let document = &input.document;
    let base_url = &input.parsed_url;

    // Technical
    let meta_tags = analyze_meta_tags(&extract_meta_tags(document));
    let open_graph = analyze_open_graph(extract_open_graph(document));
    let twitter_card = analyze_twitter_card(extract_twitter_card(document));
    let canonical = analyze_canonical(extract_canonical(document), &input.url);
    let robots = analyze_robots(extract_robots(document));
    let structured_data = analyze_structured_data(extract_structured_data(document));

    // Content
    let images = extract_images(document, base_url);
    let links = extract_links(document, base_url);
    let text = document.visible_text();
    let heading_analysis = analyze_headings(extract_headings(document));
    let image_analysis = analyze_images(&images);
    let content_metrics = analyze_content(&text);
    let keyword_density = analyze_keyword_density(&text);
    let broken_links = analyze_broken_links(&links);
    let link_analysis = analyze_links(&links, broken_links.broken_count);

    // Performance
    let resource_counts = extract_resource_counts(document);
    let load_time = analyze_load_time(input.load_time_ms);
    let resources = analyze_resources(input.html_length, &resource_counts);
    let image_performance = analyze_image_performance(&images);
    let mobile_friendly =
        analyze_mobile_friendliness(&meta_tags, &images, resource_counts.touch_targets);
    let performance_score = calculate_performance_score(
        input.load_time_ms,
        input.html_length,
        &images,
        meta_tags.viewport.is_mobile_friendly,
    );

    // On-page
    let title_description = analyze_title_description(&meta_tags);
    let url_structure = analyze_url_structure(base_url, &input.url);
    let duplicate_content = analyze_duplicate_content(
        &meta_tags,
        canonical.present,
        robots.present,
        content_metrics.word_count,
    );

    let sitemap = sitemap.unwrap_or_default();

    let scores = ScoreRecord::from_categories(
        technical_score(
            &meta_tags,
            &open_graph,
            &canonical,
            &structured_data,
            sitemap.present,
        ),
        content_score(
            &heading_analysis,
            &image_analysis,
            &content_metrics,
            &link_analysis,
        ),
        performance_category_score(&performance_score),
        on_page_score(
            &title_description,
            &url_structure,
            &broken_links,
            &duplicate_content,
        ),
    );

    log::debug!(
        "Scored {}: overall {} (technical {}, content {}, performance {}, on-page {})",
        input.url,
        scores.overall,
        scores.technical,
        scores.content,
        scores.performance,
        scores.on_page
    );

    AnalysisResult {
        url: input.url.clone(),
        analyzed_at,
        meta_tags,
        open_graph,
        twitter_card,
        canonical,
        robots,
        structured_data,
        heading_analysis,
        image_analysis,
        content_metrics,
        link_analysis,
        keyword_density,
        load_time,
        resources,
        image_performance,
        mobile_friendly,
        performance_score,
        title_description,
        url_structure,
        broken_links,
        duplicate_content,
        sitemap,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PAGE: &str = r#"<!DOCTYPE html><html><head>
        <title>A reasonably sized page title for tests</title>
        <meta name="viewport" content="width=device-width, initial-scale=1">
        </head><body><h1>Heading</h1><p>Some text</p><a href="/next">Next</a></body></html>"#;

    #[test]
    fn test_from_html_rejects_relative_url() {
        let err = AnalysisInput::from_html("/just/a/path", PAGE, 10.0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_html_rejects_url_without_host() {
        let err = AnalysisInput::from_html("mailto:someone@example.com", PAGE, 10.0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_html_propagates_document_errors() {
        assert_eq!(
            AnalysisInput::from_html("https://example.com", "", 10.0).unwrap_err(),
            AnalysisError::EmptyDocument
        );
    }

    #[test]
    fn test_from_html_sanitizes_load_time() {
        let input = AnalysisInput::from_html("https://example.com", PAGE, f64::NAN).unwrap();
        assert_eq!(input.load_time_ms, 0.0);
        let input = AnalysisInput::from_html("https://example.com", PAGE, -5.0).unwrap();
        assert_eq!(input.load_time_ms, 0.0);
        assert_eq!(input.html_length, PAGE.len() as u64);
    }

    #[test]
    fn test_analyze_at_uses_given_timestamp() {
        let input = AnalysisInput::from_html("https://example.com/", PAGE, 800.0).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let result = analyze_at(&input, None, at);
        assert_eq!(result.analyzed_at, at);
        assert_eq!(result.link_analysis.internal, 1);
        assert_eq!(result.heading_analysis.counts.h1, 1);
        assert!(!result.sitemap.present);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["analyzedAt"], "2024-05-01T12:00:00Z");
        assert!(json.get("metaTags").is_some());
        assert!(json["scores"].get("onPage").is_some());
    }

    #[test]
    fn test_sitemap_presence_lifts_technical_score() {
        let input = AnalysisInput::from_html("https://example.com/", PAGE, 800.0).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let without = analyze_at(&input, None, at);
        let with = analyze_at(
            &input,
            Some(SitemapRecord {
                present: true,
                url: "https://example.com/sitemap.xml".to_string(),
                checked: Vec::new(),
            }),
            at,
        );
        assert_eq!(with.scores.technical, without.scores.technical + 5);
    }
}
