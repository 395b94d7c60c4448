//! Recommendation text, keyed by check and severity.
//!
//! Analyzers decide a `Severity`; the words shown to the user come from this
//! table only. Some templates carry `{name}` placeholders filled by the caller.

use super::Severity;

/// Every judged check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Check {
    TitleLength,
    DescriptionLength,
    OpenGraph,
    TwitterCard,
    Canonical,
    Robots,
    StructuredData,
    Headings,
    ImageAlt,
    ContentLength,
    InternalLinks,
    KeywordDensity,
    LoadTime,
    PageWeight,
    ImageWeight,
    MobileFriendly,
    OnPageTitle,
    OnPageDescription,
    UrlStructure,
    BrokenLinks,
    DuplicateContent,
}

/// Raw template for a check outcome.
pub fn template(check: Check, severity: Severity) -> &'static str {
    use Check::*;
    use Severity::*;

    match (check, severity) {
        (TitleLength, Pass) => "Title length is optimal",
        (TitleLength, Warn) => {
            "Title is too {direction} ({length} characters). Keep it between 30 and 60 characters"
        }
        (TitleLength, Fail) => "Add a title tag to your page",

        (DescriptionLength, Pass) => "Description length is optimal",
        (DescriptionLength, Warn) => {
            "Description is too {direction} ({length} characters). Keep it between 120 and 160 characters"
        }
        (DescriptionLength, Fail) => "Add a meta description to your page",

        (OpenGraph, Pass) => "All essential Open Graph tags are present",
        (OpenGraph, Warn) => "Add missing OG tags: {missing}",
        (OpenGraph, Fail) => "Add Open Graph tags for better social media sharing",

        (TwitterCard, Pass) => "Twitter Card tags are present",
        (TwitterCard, Warn | Fail) => "Add a twitter:card tag for better Twitter sharing",

        (Canonical, Pass) => "Canonical URL is set",
        (Canonical, Warn | Fail) => "Add a canonical URL to prevent duplicate content issues",

        (Robots, Pass) => "Robots meta tag allows indexing",
        (Robots, Warn | Fail) => "Page is set to noindex - it won't appear in search results",

        (StructuredData, Pass) => "{count} structured data schema(s) found",
        (StructuredData, Warn | Fail) => {
            "Add structured data (Schema.org) for rich snippets in search results"
        }

        (Headings, Pass) => "Heading structure looks good",
        (Headings, Warn) => "Multiple H1 tags found ({count}) - use only one H1 per page",
        (Headings, Fail) => "Missing H1 tag - add a main heading to your page",

        (ImageAlt, Pass) => "Image optimization looks good",
        (ImageAlt, Warn) => "{count} image{s} missing alt text - add for accessibility and SEO",
        (ImageAlt, Fail) => "Most images are missing alt text - this hurts accessibility and SEO",

        (ContentLength, Pass) => "Content length is good",
        (ContentLength, Warn) => "Content is thin - aim for at least 300 words for better SEO",
        (ContentLength, Fail) => "Very little content - add more quality content to rank better",

        (InternalLinks, Pass) => "Link structure looks good",
        (InternalLinks, Warn | Fail) => {
            "No internal links found - add internal links for better navigation"
        }

        (KeywordDensity, _) => "Keyword analysis complete - review top keywords for relevance",

        (LoadTime, Pass) => "Page load time is excellent",
        (LoadTime, Warn) => "Page load time could be improved - consider optimizing resources",
        (LoadTime, Fail) => "Page is very slow - optimize resources and reduce file sizes",

        (PageWeight, Pass) => "Resource sizes are optimal",
        (PageWeight, Warn) => "Page size could be reduced - consider minification and compression",
        (PageWeight, Fail) => "Total page size is {size}MB - reduce file sizes",

        (ImageWeight, Pass) => "Image performance is good",
        (ImageWeight, Warn) => "Convert legacy images to WebP/AVIF for better performance",
        (ImageWeight, Fail) => "Total image weight is {size}MB - optimize and compress images",

        (MobileFriendly, Pass) => "Page is mobile-friendly",
        (MobileFriendly, Warn) => {
            "Mobile experience could be improved - ensure responsive images and touch targets"
        }
        (MobileFriendly, Fail) => {
            "Page needs major mobile optimization - add viewport meta tag and responsive design"
        }

        (OnPageTitle, Pass) => "Title length is optimal (30-60 characters)",
        (OnPageTitle, Warn) => "Title is too {direction} - keep it between 30 and 60 characters",
        (OnPageTitle, Fail) => "Missing title tag - add a descriptive title",

        (OnPageDescription, Pass) => "Meta description length is optimal (120-160 characters)",
        (OnPageDescription, Warn) => {
            "Description is too {direction} - keep it between 120 and 160 characters"
        }
        (OnPageDescription, Fail) => "Missing meta description - add a compelling description",

        (UrlStructure, Pass) => "URL structure follows best practices",
        (UrlStructure, Warn) => {
            "URL could be improved - keep it short, avoid special characters and limit its depth"
        }
        (UrlStructure, Fail) => "Use HTTPS instead of HTTP for security",

        (BrokenLinks, Pass) => "No broken links detected",
        (BrokenLinks, Warn) => "Found {count} suspicious link{s} - review and verify",
        (BrokenLinks, Fail) => "Found {count} broken link{s} - fix immediately",

        (DuplicateContent, Pass) => "No duplicate content issues detected",
        (DuplicateContent, Warn) => "Some duplicate content risks detected - review and fix",
        (DuplicateContent, Fail) => "Multiple duplicate content issues found - address immediately",
    }
}

/// Recommendation text with no placeholders to fill.
pub fn recommend(check: Check, severity: Severity) -> String {
    template(check, severity).to_string()
}

/// Recommendation text with `{name}` placeholders replaced by `args`.
///
/// # Arguments
///
/// * `check` - Which check was judged
/// * `severity` - Its outcome
/// * `args` - `(name, value)` pairs; names absent from the template are ignored
pub fn recommend_with(check: Check, severity: Severity, args: &[(&str, String)]) -> String {
    let mut text = template(check, severity).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_check_has_text_for_every_severity() {
        for check in Check::iter() {
            for severity in Severity::iter() {
                assert!(
                    !template(check, severity).trim().is_empty(),
                    "missing text for {:?}/{:?}",
                    check,
                    severity
                );
            }
        }
    }

    #[test]
    fn test_recommend_with_fills_placeholders() {
        let text = recommend_with(
            Check::BrokenLinks,
            Severity::Fail,
            &[("count", "2".to_string()), ("s", "s".to_string())],
        );
        assert_eq!(text, "Found 2 broken links - fix immediately");
    }

    #[test]
    fn test_recommend_with_ignores_unused_args() {
        let text = recommend_with(
            Check::Canonical,
            Severity::Pass,
            &[("count", "1".to_string())],
        );
        assert_eq!(text, recommend(Check::Canonical, Severity::Pass));
    }

    #[test]
    fn test_open_graph_lists_missing_tags() {
        let text = recommend_with(
            Check::OpenGraph,
            Severity::Warn,
            &[("missing", "image, url".to_string())],
        );
        assert_eq!(text, "Add missing OG tags: image, url");
    }
}
