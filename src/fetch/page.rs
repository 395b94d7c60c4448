//! Page download through an ordered list of endpoints.

use std::time::Instant;

use log::{debug, info, warn};
use url::form_urlencoded;

use crate::config::{Config, MIN_HTML_LENGTH, PUBLIC_PROXY_TEMPLATES};
use crate::error_handling::FetchError;

/// Where a page request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEndpoint {
    /// Request the target URL itself.
    Direct,
    /// Request a proxy URL built from a template; `{url}` receives the
    /// percent-encoded target.
    Proxy(String),
}

impl FetchEndpoint {
    /// URL actually requested for `target`.
    pub fn request_url(&self, target: &str) -> String {
        match self {
            FetchEndpoint::Direct => target.to_string(),
            FetchEndpoint::Proxy(template) => {
                let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
                template.replace("{url}", &encoded)
            }
        }
    }

    /// Short name for logs and errors: `direct`, or the proxy host.
    pub fn label(&self) -> String {
        match self {
            FetchEndpoint::Direct => "direct".to_string(),
            FetchEndpoint::Proxy(template) => url::Url::parse(template)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| template.clone()),
        }
    }
}

/// Endpoint order for a run: direct first, then `--proxy` templates, then the
/// public proxies when enabled.
pub fn endpoints_from_config(config: &Config) -> Vec<FetchEndpoint> {
    let mut endpoints = vec![FetchEndpoint::Direct];
    endpoints.extend(config.proxies.iter().cloned().map(FetchEndpoint::Proxy));
    if config.public_proxies {
        endpoints.extend(
            PUBLIC_PROXY_TEMPLATES
                .iter()
                .map(|t| FetchEndpoint::Proxy((*t).to_string())),
        );
    }
    endpoints
}

/// A downloaded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The target URL (not the proxy URL)
    pub url: String,
    pub html: String,
    /// Milliseconds from the first attempt to the successful response body
    pub load_time_ms: f64,
    /// Endpoint that succeeded
    pub endpoint: FetchEndpoint,
}

async fn attempt(
    client: &reqwest::Client,
    endpoint: &FetchEndpoint,
    url: &str,
) -> Result<String, FetchError> {
    let label = endpoint.label();
    let request_url = endpoint.request_url(url);
    debug!("GET {} via {}", request_url, label);

    let response = client
        .get(&request_url)
        .header(reqwest::header::ACCEPT, "text/html")
        .send()
        .await
        .map_err(|source| FetchError::Request {
            endpoint: label.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            endpoint: label,
            status: status.as_u16(),
        });
    }

    let html = response.text().await.map_err(|source| FetchError::Request {
        endpoint: label.clone(),
        source,
    })?;
    if html.len() < MIN_HTML_LENGTH {
        return Err(FetchError::ContentTooShort {
            endpoint: label,
            length: html.len(),
        });
    }
    Ok(html)
}

/// Fetches `url`, trying each endpoint in order until one returns a page.
///
/// An attempt succeeds on a success status with at least `MIN_HTML_LENGTH`
/// bytes of body. The per-attempt timeout is the client's.
///
/// # Errors
///
/// `FetchError::InvalidUrl` when `url` does not parse or no endpoint is given;
/// otherwise `FetchError::AllAttemptsFailed` carrying the last failure.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    endpoints: &[FetchEndpoint],
) -> Result<FetchedPage, FetchError> {
    url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    if endpoints.is_empty() {
        return Err(FetchError::InvalidUrl(format!(
            "{url}: no fetch endpoints configured"
        )));
    }

    let start = Instant::now();
    let mut last_error = None;

    for (i, endpoint) in endpoints.iter().enumerate() {
        debug!(
            "Fetching {} (attempt {}/{})",
            url,
            i + 1,
            endpoints.len()
        );
        match attempt(client, endpoint, url).await {
            Ok(html) => {
                let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                info!(
                    "Fetched {} via {} ({} bytes, {:.0}ms)",
                    url,
                    endpoint.label(),
                    html.len(),
                    load_time_ms
                );
                return Ok(FetchedPage {
                    url: url.to_string(),
                    html,
                    load_time_ms,
                    endpoint: endpoint.clone(),
                });
            }
            Err(e) => {
                warn!("Attempt {}/{} failed: {}", i + 1, endpoints.len(), e);
                last_error = Some(e);
            }
        }
    }

    Err(FetchError::AllAttemptsFailed {
        url: url.to_string(),
        attempts: endpoints.len(),
        last_error: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Unknown error".to_string()),
    })
}
