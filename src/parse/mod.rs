//! HTML parsing and data extraction.
//!
//! This module extracts raw SEO signals from a parsed document:
//! - Meta tags (title, description, keywords, author, viewport), canonical, robots
//! - Open Graph and Twitter Card tags
//! - Structured data (JSON-LD)
//! - Heading outline, images and links
//! - Resource counts for the performance estimators
//!
//! Extractors never fail and never judge: a missing element gives an empty
//! value. All parsing is done using CSS selectors via the `scraper` crate.

mod document;
mod headings;
mod images;
mod links;
mod meta;
mod resources;
mod social;
mod structured;

// Re-export public API
pub use document::ParsedDocument;
pub use headings::{extract_headings, Heading};
pub use images::{detect_format, extract_images, ExtractedImage, ImageFormat};
pub use links::{extract_links, ExtractedLinks, Link, RejectedLink};
pub use meta::{
    extract_canonical, extract_meta_tags, extract_robots, extract_title, MetaTags, RobotsMeta,
};
pub use resources::{extract_resource_counts, ResourceCounts};
pub use social::{extract_open_graph, extract_twitter_card};
pub use structured::{extract_structured_data, StructuredData};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
