//! Sitemap presence probe.

use futures::future::join_all;
use log::debug;
use url::Url;

use crate::analyze::{SitemapProbe, SitemapRecord};
use crate::config::SITEMAP_PATHS;

async fn probe(client: &reqwest::Client, sitemap_url: String) -> SitemapProbe {
    match client.get(&sitemap_url).send().await {
        Ok(response) => {
            let status = response.status();
            debug!("Sitemap probe {} -> {}", sitemap_url, status);
            SitemapProbe {
                url: sitemap_url,
                exists: status.is_success(),
                status: Some(status.as_u16()),
            }
        }
        Err(e) => {
            debug!("Sitemap probe {} failed: {}", sitemap_url, e);
            SitemapProbe {
                url: sitemap_url,
                exists: false,
                status: None,
            }
        }
    }
}

/// Probes the well-known sitemap locations at the page's origin, concurrently.
///
/// Never fails: an unparseable URL or unreachable host yields `present: false`.
/// The first existing location (in probe order) becomes `url`.
pub async fn check_sitemap(client: &reqwest::Client, url: &str) -> SitemapRecord {
    let origin = match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => parsed.origin().ascii_serialization(),
        _ => {
            debug!("Skipping sitemap probe for {}", url);
            return SitemapRecord::default();
        }
    };

    let checked = join_all(
        SITEMAP_PATHS
            .iter()
            .map(|path| probe(client, format!("{origin}{path}"))),
    )
    .await;

    let url = checked
        .iter()
        .find(|p| p.exists)
        .map(|p| p.url.clone())
        .unwrap_or_default();

    SitemapRecord {
        present: !url.is_empty(),
        url,
        checked,
    }
}
