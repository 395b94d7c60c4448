//! Configuration constants.
//!
//! Every heuristic threshold, penalty, weight and size estimate used by the
//! analyzers lives here, together with the transport defaults used by the CLI.

use std::time::Duration;

// Meta tag length bands (characters)
pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

/// Open Graph properties every shareable page should declare.
pub const REQUIRED_OPEN_GRAPH_TAGS: [&str; 4] = ["title", "description", "image", "url"];

// Content thresholds
/// Average reading speed in words per minute.
pub const READING_SPEED_WPM: usize = 200;
pub const THIN_CONTENT_WORDS: usize = 300;
pub const VERY_THIN_CONTENT_WORDS: usize = 100;

// Keyword density
pub const TOP_KEYWORDS_LIMIT: usize = 10;
pub const TOP_PHRASES_LIMIT: usize = 10;
/// Words of this many characters or fewer are ignored by keyword density.
pub const KEYWORD_MIN_CHARS_EXCLUSIVE: usize = 2;

pub const STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "day", "most", "us", "is", "was", "are", "been", "has", "had", "were",
    "said", "did", "having", "may", "should", "am", "being", "more",
];

// Load time bands (milliseconds)
pub const LOAD_TIME_GOOD_MS: f64 = 2000.0;
pub const LOAD_TIME_POOR_MS: f64 = 5000.0;
/// Above this, the issue report flags a slow page.
pub const LOAD_TIME_ISSUE_MS: f64 = 3000.0;
/// Legacy image savings above which the text report urges conversion.
pub const IMAGE_SAVINGS_NOTABLE_BYTES: u64 = 50_000;

/// Fractions of the measured load time used to approximate browser milestones.
/// These are rough estimates, not measurements.
pub const DOM_CONTENT_LOADED_FRACTION: f64 = 0.7;
pub const FIRST_PAINT_FRACTION: f64 = 0.5;
pub const TIME_TO_INTERACTIVE_FRACTION: f64 = 1.2;

// Resource size estimates (bytes)
pub const EXTERNAL_STYLESHEET_BYTES: u64 = 50_000;
pub const EXTERNAL_SCRIPT_BYTES: u64 = 100_000;
pub const FONT_FILE_BYTES: u64 = 20_000;
pub const PAGE_WEIGHT_GOOD_BYTES: u64 = 1_000_000;
pub const PAGE_WEIGHT_POOR_BYTES: u64 = 3_000_000;

// Image size estimates per format (bytes)
pub const WEBP_IMAGE_BYTES: u64 = 50_000;
pub const AVIF_IMAGE_BYTES: u64 = 40_000;
pub const JPEG_IMAGE_BYTES: u64 = 100_000;
pub const PNG_IMAGE_BYTES: u64 = 150_000;
pub const GIF_IMAGE_BYTES: u64 = 80_000;
pub const SVG_IMAGE_BYTES: u64 = 10_000;
pub const UNKNOWN_IMAGE_BYTES: u64 = 75_000;
/// Share of a legacy image's weight saved by converting it to WebP/AVIF.
pub const NEXT_GEN_REDUCTION: f64 = 0.3;
pub const IMAGE_WEIGHT_WARNING_BYTES: u64 = 1_000_000;
pub const IMAGE_WEIGHT_POOR_BYTES: u64 = 2_000_000;

// Mobile friendliness deductions
pub const MOBILE_NO_VIEWPORT_PENALTY: u32 = 30;
pub const MOBILE_NOT_DEVICE_WIDTH_PENALTY: u32 = 30;
pub const MOBILE_NOT_RESPONSIVE_PENALTY: u32 = 20;
pub const MOBILE_HORIZONTAL_SCROLL_PENALTY: u32 = 10;
pub const MOBILE_NO_SRCSET_PENALTY: u32 = 10;
pub const MOBILE_SCORE_GOOD: u32 = 80;
pub const MOBILE_SCORE_POOR: u32 = 50;

// Performance sub-scores
/// `(load time above which the score applies, speed score)`, checked in order.
pub const SPEED_SCORE_BANDS: [(f64, u32); 4] = [(5000.0, 30), (3000.0, 50), (2000.0, 70), (1000.0, 85)];
pub const HTML_SIZE_LARGE_BYTES: u64 = 500_000;
pub const HTML_SIZE_MEDIUM_BYTES: u64 = 200_000;
pub const HTML_SIZE_LARGE_PENALTY: u32 = 20;
pub const HTML_SIZE_MEDIUM_PENALTY: u32 = 10;
/// `(next-gen ratio below which the penalty applies, penalty)`, checked in order.
pub const NEXT_GEN_RATIO_PENALTIES: [(f64, u32); 3] = [(0.3, 30), (0.5, 20), (0.7, 10)];
pub const NOT_MOBILE_FRIENDLY_PENALTY: u32 = 15;

// URL structure
pub const URL_LENGTH_WARNING: usize = 100;
pub const URL_LENGTH_POOR: usize = 150;
pub const URL_MAX_DEPTH: usize = 4;

// Duplicate content
pub const DUPLICATE_ISSUES_POOR: usize = 3;

// Category score penalties
pub const TITLE_CRITICAL_PENALTY: u32 = 20;
pub const TITLE_WARNING_PENALTY: u32 = 10;
pub const DESCRIPTION_CRITICAL_PENALTY: u32 = 20;
pub const DESCRIPTION_WARNING_PENALTY: u32 = 10;
pub const OPEN_GRAPH_CRITICAL_PENALTY: u32 = 15;
pub const OPEN_GRAPH_WARNING_PENALTY: u32 = 8;
pub const MISSING_CANONICAL_PENALTY: u32 = 10;
pub const MISSING_STRUCTURED_DATA_PENALTY: u32 = 10;
pub const MISSING_SITEMAP_PENALTY: u32 = 5;

pub const HEADING_CRITICAL_PENALTY: u32 = 20;
pub const HEADING_WARNING_PENALTY: u32 = 10;
pub const MOST_ALT_MISSING_PENALTY: u32 = 20;
pub const SOME_ALT_MISSING_PENALTY: u32 = 10;
pub const VERY_THIN_CONTENT_PENALTY: u32 = 25;
pub const THIN_CONTENT_PENALTY: u32 = 15;
pub const NO_INTERNAL_LINKS_PENALTY: u32 = 10;

pub const URL_POOR_PENALTY: u32 = 15;
pub const URL_WARNING_PENALTY: u32 = 8;
pub const BROKEN_LINK_PENALTY: u32 = 20;
pub const SUSPICIOUS_LINK_PENALTY: u32 = 10;
pub const DUPLICATE_POOR_PENALTY: u32 = 15;
pub const DUPLICATE_WARNING_PENALTY: u32 = 8;

// Overall score weights (sum to 1.0)
pub const TECHNICAL_WEIGHT: f64 = 0.30;
pub const CONTENT_WEIGHT: f64 = 0.25;
pub const PERFORMANCE_WEIGHT: f64 = 0.25;
pub const ON_PAGE_WEIGHT: f64 = 0.20;

// Transport
/// Per-attempt fetch timeout.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
/// Responses shorter than this are treated as proxy error pages, not HTML.
pub const MIN_HTML_LENGTH: usize = 100;
/// Maximum URL length accepted for analysis.
pub const MAX_URL_LENGTH: usize = 2048;
pub const SITEMAP_PATHS: [&str; 2] = ["/sitemap.xml", "/sitemap_index.xml"];

/// Public CORS proxies tried in order when `--public-proxies` is set.
/// `{url}` is replaced with the percent-encoded target URL.
pub const PUBLIC_PROXY_TEMPLATES: [&str; 3] = [
    "https://api.allorigins.win/raw?url={url}",
    "https://api.codetabs.com/v1/proxy?quest={url}",
    "https://corsproxy.io/?{url}",
];

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
