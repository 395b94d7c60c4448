//! Technical SEO checks: meta tags, social tags, canonical, robots, structured data.

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

use super::recommendations::{recommend, recommend_with, Check};
use super::{Severity, Status};
use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, REQUIRED_OPEN_GRAPH_TAGS, TITLE_MAX_LENGTH,
    TITLE_MIN_LENGTH,
};
use crate::parse::{MetaTags, RobotsMeta, StructuredData};
use crate::utils::char_len;

/// A length-banded meta tag (title or description).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthCheckedTag {
    pub content: String,
    /// Length in characters
    pub length: usize,
    pub status: Status,
    pub recommendation: String,
}

/// A meta tag that is only reported, not judged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceTag {
    pub content: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTag {
    pub content: String,
    pub present: bool,
    /// `width=device-width` is declared
    pub is_mobile_friendly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagsRecord {
    pub title: LengthCheckedTag,
    pub description: LengthCheckedTag,
    pub keywords: PresenceTag,
    pub author: PresenceTag,
    pub viewport: ViewportTag,
}

/// Open Graph or Twitter Card tags with their judgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialTagsRecord {
    pub present: bool,
    pub tags: BTreeMap<String, String>,
    pub status: Status,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub present: bool,
    /// Declared canonical URL, empty when absent
    pub url: String,
    /// The canonical points at the analyzed URL
    pub is_correct: bool,
    pub status: Status,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRecord {
    pub present: bool,
    pub content: String,
    pub googlebot: String,
    pub directives: Vec<String>,
    pub is_indexable: bool,
    pub is_followable: bool,
    pub status: Status,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataRecord {
    pub present: bool,
    pub count: usize,
    pub schemas: Vec<serde_json::Value>,
    pub types: Vec<String>,
    pub status: Status,
    pub recommendation: String,
}

/// Three-band length classification: empty fails, outside `[min, max]` warns.
pub fn classify_length(length: usize, min: usize, max: usize) -> Severity {
    if length == 0 {
        Severity::Fail
    } else if length < min || length > max {
        Severity::Warn
    } else {
        Severity::Pass
    }
}

/// `"short"` or `"long"` for a length outside its band.
pub(crate) fn length_direction(length: usize, min: usize) -> &'static str {
    if length < min {
        "short"
    } else {
        "long"
    }
}

fn length_checked(content: &str, min: usize, max: usize, check: Check) -> LengthCheckedTag {
    let length = char_len(content);
    let severity = classify_length(length, min, max);
    let recommendation = recommend_with(
        check,
        severity,
        &[
            ("direction", length_direction(length, min).to_string()),
            ("length", length.to_string()),
        ],
    );
    LengthCheckedTag {
        content: content.to_string(),
        length,
        status: severity.status(),
        recommendation,
    }
}

fn presence(content: &str) -> PresenceTag {
    PresenceTag {
        content: content.to_string(),
        present: !content.is_empty(),
    }
}

/// Whether a viewport declaration contains `width=device-width` (spacing and case ignored).
pub fn is_device_width_viewport(viewport: &str) -> bool {
    let compact: String = viewport
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("width=device-width")
}

/// Judges the standard meta tags.
pub fn analyze_meta_tags(meta: &MetaTags) -> MetaTagsRecord {
    MetaTagsRecord {
        title: length_checked(&meta.title, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH, Check::TitleLength),
        description: length_checked(
            &meta.description,
            DESCRIPTION_MIN_LENGTH,
            DESCRIPTION_MAX_LENGTH,
            Check::DescriptionLength,
        ),
        keywords: presence(&meta.keywords),
        author: presence(&meta.author),
        viewport: ViewportTag {
            content: meta.viewport.clone(),
            present: !meta.viewport.is_empty(),
            is_mobile_friendly: is_device_width_viewport(&meta.viewport),
        },
    }
}

/// Judges Open Graph tags: none fails, any of title/description/image/url missing warns.
pub fn analyze_open_graph(tags: BTreeMap<String, String>) -> SocialTagsRecord {
    let missing: Vec<&str> = REQUIRED_OPEN_GRAPH_TAGS
        .iter()
        .copied()
        .filter(|tag| !tags.contains_key(*tag))
        .collect();

    let severity = if tags.is_empty() {
        Severity::Fail
    } else if !missing.is_empty() {
        Severity::Warn
    } else {
        Severity::Pass
    };

    SocialTagsRecord {
        present: !tags.is_empty(),
        recommendation: recommend_with(
            Check::OpenGraph,
            severity,
            &[("missing", missing.join(", "))],
        ),
        status: severity.status(),
        tags,
    }
}

/// Judges Twitter Card tags: passes only with a `card` tag.
pub fn analyze_twitter_card(tags: BTreeMap<String, String>) -> SocialTagsRecord {
    let severity = if tags.contains_key("card") {
        Severity::Pass
    } else {
        Severity::Warn
    };
    SocialTagsRecord {
        present: !tags.is_empty(),
        status: severity.status(),
        recommendation: recommend(Check::TwitterCard, severity),
        tags,
    }
}

/// Judges the canonical link against the analyzed URL.
///
/// # Arguments
///
/// * `canonical` - Declared canonical `href`, if any
/// * `page_url` - The analyzed URL as supplied
pub fn analyze_canonical(canonical: Option<String>, page_url: &str) -> CanonicalRecord {
    let severity = if canonical.is_some() {
        Severity::Pass
    } else {
        Severity::Warn
    };

    let is_correct = canonical.as_deref().is_some_and(|declared| {
        declared == page_url
            || Url::parse(page_url).is_ok_and(|normalized| declared == normalized.as_str())
    });

    CanonicalRecord {
        present: canonical.is_some(),
        url: canonical.unwrap_or_default(),
        is_correct,
        status: severity.status(),
        recommendation: recommend(Check::Canonical, severity),
    }
}

/// Judges robots directives: `noindex` warns.
pub fn analyze_robots(robots: RobotsMeta) -> RobotsRecord {
    let has = |directive: &str| robots.directives.iter().any(|d| d == directive);
    let is_indexable = !has("noindex");
    let is_followable = !has("nofollow");
    let severity = if is_indexable {
        Severity::Pass
    } else {
        Severity::Warn
    };

    RobotsRecord {
        present: !robots.content.is_empty(),
        content: robots.content,
        googlebot: robots.googlebot,
        directives: robots.directives,
        is_indexable,
        is_followable,
        status: severity.status(),
        recommendation: recommend(Check::Robots, severity),
    }
}

/// Judges structured data: at least one schema passes.
pub fn analyze_structured_data(data: StructuredData) -> StructuredDataRecord {
    let count = data.schemas.len();
    let severity = if count > 0 {
        Severity::Pass
    } else {
        Severity::Warn
    };

    StructuredDataRecord {
        present: count > 0,
        count,
        schemas: data.schemas,
        types: data.types,
        status: severity.status(),
        recommendation: recommend_with(
            Check::StructuredData,
            severity,
            &[("count", count.to_string())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, description: &str) -> MetaTags {
        MetaTags {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_length_bands() {
        assert_eq!(classify_length(0, 30, 60), Severity::Fail);
        assert_eq!(classify_length(29, 30, 60), Severity::Warn);
        assert_eq!(classify_length(30, 30, 60), Severity::Pass);
        assert_eq!(classify_length(60, 30, 60), Severity::Pass);
        assert_eq!(classify_length(61, 30, 60), Severity::Warn);
    }

    #[test]
    fn test_short_title_warns_and_missing_description_is_critical() {
        let record = analyze_meta_tags(&meta("Hello", ""));
        assert_eq!(record.title.length, 5);
        assert_eq!(record.title.status, Status::Warning);
        assert!(record.title.recommendation.contains("too short"));
        assert_eq!(record.description.status, Status::Critical);
        assert_eq!(
            record.description.recommendation,
            "Add a meta description to your page"
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 30 characters, 31 bytes
        let title = "Caf\u{e9} reviews and coffee guides";
        assert_eq!(title.chars().count(), 30);
        let record = analyze_meta_tags(&meta(title, ""));
        assert_eq!(record.title.length, 30);
        assert_eq!(record.title.status, Status::Passed);
    }

    #[test]
    fn test_viewport_device_width_detection() {
        assert!(is_device_width_viewport("width=device-width, initial-scale=1"));
        assert!(is_device_width_viewport("Width = Device-Width"));
        assert!(!is_device_width_viewport("width=1024"));
        assert!(!is_device_width_viewport(""));
    }

    #[test]
    fn test_open_graph_bands() {
        let empty = analyze_open_graph(BTreeMap::new());
        assert!(!empty.present);
        assert_eq!(empty.status, Status::Critical);

        let mut tags = BTreeMap::new();
        tags.insert("title".to_string(), "T".to_string());
        tags.insert("url".to_string(), "https://example.com".to_string());
        let partial = analyze_open_graph(tags.clone());
        assert_eq!(partial.status, Status::Warning);
        assert_eq!(partial.recommendation, "Add missing OG tags: description, image");

        tags.insert("description".to_string(), "D".to_string());
        tags.insert("image".to_string(), "https://example.com/i.png".to_string());
        assert_eq!(analyze_open_graph(tags).status, Status::Passed);
    }

    #[test]
    fn test_twitter_card_requires_card() {
        let mut tags = BTreeMap::new();
        tags.insert("site".to_string(), "@x".to_string());
        let record = analyze_twitter_card(tags.clone());
        assert!(record.present);
        assert_eq!(record.status, Status::Warning);

        tags.insert("card".to_string(), "summary".to_string());
        assert_eq!(analyze_twitter_card(tags).status, Status::Passed);
    }

    #[test]
    fn test_canonical_correctness_uses_normalized_url() {
        let record = analyze_canonical(
            Some("https://example.com/".to_string()),
            "https://example.com",
        );
        assert!(record.present);
        assert!(record.is_correct);
        assert_eq!(record.status, Status::Passed);

        let other = analyze_canonical(
            Some("https://example.com/other".to_string()),
            "https://example.com",
        );
        assert!(!other.is_correct);

        let absent = analyze_canonical(None, "https://example.com");
        assert!(!absent.present);
        assert_eq!(absent.url, "");
        assert_eq!(absent.status, Status::Warning);
    }

    #[test]
    fn test_robots_flags_follow_directives() {
        let record = analyze_robots(RobotsMeta {
            content: "noindex, nofollow".to_string(),
            googlebot: String::new(),
            directives: vec!["noindex".to_string(), "nofollow".to_string()],
        });
        assert!(record.present);
        assert!(!record.is_indexable);
        assert!(!record.is_followable);
        assert_eq!(record.status, Status::Warning);

        let absent = analyze_robots(RobotsMeta::default());
        assert!(!absent.present);
        assert!(absent.is_indexable);
        assert!(absent.is_followable);
        assert_eq!(absent.status, Status::Passed);
    }

    #[test]
    fn test_structured_data_counts() {
        let none = analyze_structured_data(StructuredData::default());
        assert!(!none.present);
        assert_eq!(none.count, 0);
        assert_eq!(none.status, Status::Warning);

        let some = analyze_structured_data(StructuredData {
            schemas: vec![serde_json::json!({"@type": "Organization"})],
            types: vec!["Organization".to_string()],
        });
        assert_eq!(some.count, 1);
        assert_eq!(some.recommendation, "1 structured data schema(s) found");
    }
}
