//! Judgment of extracted signals.
//!
//! Each analyzer is a pure function from extractor output (plus a few scalars
//! such as HTML length or load time) to a record carrying its status and a
//! recommendation:
//! - `technical`: meta tags, Open Graph, Twitter Card, canonical, robots, JSON-LD
//! - `content`: headings, images, text volume, internal/external links
//! - `keywords`: keyword and phrase density
//! - `performance`: load time, page weight, image weight, mobile friendliness
//! - `onpage`: title/description, URL structure, broken links, duplicate content

mod content;
mod keywords;
mod onpage;
mod performance;
mod recommendations;
mod severity;
mod technical;

pub use content::{
    analyze_content, analyze_headings, analyze_images, analyze_links, classify_missing_alt,
    classify_word_count, AnalyzedImage, ContentMetricsRecord, HeadingAnalysisRecord,
    HeadingCounts, ImageAnalysisRecord, LinkAnalysisRecord,
};
pub use keywords::{
    analyze_keyword_density, tokenize, KeywordDensityRecord, KeywordFrequency, PhraseFrequency,
};
pub use onpage::{
    analyze_broken_links, analyze_duplicate_content, analyze_title_description,
    analyze_url_structure, classify_link, BrokenLinksRecord, DuplicateContentRecord, FlaggedLink,
    LinkVerdict, TitleDescriptionRecord, UrlStructureRecord,
};
pub use performance::{
    analyze_image_performance, analyze_load_time, analyze_mobile_friendliness,
    analyze_resources, calculate_performance_score, classify_load_time, speed_score,
    ImagePerformanceRecord, LoadTimeRecord, MobileFriendlyRecord, PerformanceScoreRecord,
    ResourcesRecord,
};
pub use recommendations::{recommend, recommend_with, template, Check};
pub use severity::{Rating, Severity, Status};
pub use technical::{
    analyze_canonical, analyze_meta_tags, analyze_open_graph, analyze_robots,
    analyze_structured_data, analyze_twitter_card, classify_length, is_device_width_viewport,
    CanonicalRecord, LengthCheckedTag, MetaTagsRecord, PresenceTag, RobotsRecord,
    SocialTagsRecord, StructuredDataRecord, ViewportTag,
};
