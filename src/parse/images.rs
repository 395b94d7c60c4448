//! Image extraction and format classification.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

use super::ParsedDocument;
use crate::config::{
    AVIF_IMAGE_BYTES, GIF_IMAGE_BYTES, JPEG_IMAGE_BYTES, PNG_IMAGE_BYTES, SVG_IMAGE_BYTES,
    UNKNOWN_IMAGE_BYTES, WEBP_IMAGE_BYTES,
};

const IMAGE_SELECTOR_STR: &str = "img";

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));

/// Image file format, as inferred from the image URL.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Webp,
    Avif,
    /// `.jpg` and `.jpeg`
    Jpg,
    Png,
    Gif,
    Svg,
    Unknown,
}

impl ImageFormat {
    /// Classifies by file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "webp" => Some(Self::Webp),
            "avif" => Some(Self::Avif),
            "jpg" | "jpeg" => Some(Self::Jpg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// WebP and AVIF.
    pub fn is_next_gen(self) -> bool {
        matches!(self, Self::Webp | Self::Avif)
    }

    /// JPEG, PNG and GIF. SVG and unknown formats are neither legacy nor next-gen.
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Jpg | Self::Png | Self::Gif)
    }

    /// Typical transfer size for an image of this format.
    pub fn estimated_bytes(self) -> u64 {
        match self {
            Self::Webp => WEBP_IMAGE_BYTES,
            Self::Avif => AVIF_IMAGE_BYTES,
            Self::Jpg => JPEG_IMAGE_BYTES,
            Self::Png => PNG_IMAGE_BYTES,
            Self::Gif => GIF_IMAGE_BYTES,
            Self::Svg => SVG_IMAGE_BYTES,
            Self::Unknown => UNKNOWN_IMAGE_BYTES,
        }
    }
}

/// One `<img>` element as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Absolute URL, or the raw `src` when it could not be resolved
    pub src: String,
    pub alt: String,
    pub loading: String,
    pub srcset: String,
    pub format: ImageFormat,
}

impl ExtractedImage {
    pub fn has_alt(&self) -> bool {
        !self.alt.trim().is_empty()
    }

    pub fn is_lazy_loaded(&self) -> bool {
        self.loading.eq_ignore_ascii_case("lazy")
    }

    pub fn has_responsive(&self) -> bool {
        !self.srcset.trim().is_empty()
    }
}

/// Extracts every `<img>` in the document.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base_url` - The analyzed page URL, for resolving relative `src` values
///
/// # Returns
///
/// One `ExtractedImage` per element, in document order. An unresolvable `src`
/// is kept as written rather than dropping the image.
pub fn extract_images(document: &ParsedDocument, base_url: &Url) -> Vec<ExtractedImage> {
    document
        .html()
        .select(&IMAGE_SELECTOR)
        .map(|element| {
            let attr = |name: &str| element.value().attr(name).unwrap_or("").trim().to_string();
            let raw_src = attr("src");

            let resolved = if raw_src.is_empty() {
                None
            } else {
                match base_url.join(&raw_src) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        log::debug!("Could not resolve image src '{}': {}", raw_src, e);
                        None
                    }
                }
            };

            let format = detect_format(resolved.as_ref(), &raw_src);
            let src = resolved.map(String::from).unwrap_or(raw_src);

            ExtractedImage {
                src,
                alt: attr("alt"),
                loading: attr("loading"),
                srcset: attr("srcset"),
                format,
            }
        })
        .collect()
}

/// Format from the resolved URL's path extension, falling back to a substring
/// scan of the raw value (covers `image.php?file=a.png` and unresolvable URLs).
pub fn detect_format(resolved: Option<&Url>, raw: &str) -> ImageFormat {
    let from_path = resolved.and_then(|url| {
        let file_name = url.path().rsplit('/').next()?;
        let (_, extension) = file_name.rsplit_once('.')?;
        ImageFormat::from_extension(extension)
    });
    if let Some(format) = from_path {
        return format;
    }

    let lower = raw.to_ascii_lowercase();
    let candidates = [
        (".webp", ImageFormat::Webp),
        (".avif", ImageFormat::Avif),
        (".jpg", ImageFormat::Jpg),
        (".jpeg", ImageFormat::Jpg),
        (".png", ImageFormat::Png),
        (".gif", ImageFormat::Gif),
        (".svg", ImageFormat::Svg),
    ];
    candidates
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, format)| *format)
        .unwrap_or(ImageFormat::Unknown)
}
