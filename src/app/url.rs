//! Target URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates a user-supplied page address and normalizes it to an absolute URL.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when no
/// scheme is given. An explicit scheme other than http/https is rejected
/// rather than prefixed, as are URLs without a host and URLs longer than
/// `MAX_URL_LENGTH` (checked both before and after normalization).
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing the rejection.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("URL is empty".to_string()));
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        )));
    }

    let lower = url.to_ascii_lowercase();
    let normalized = if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else if let Some((scheme, _)) = url.split_once("://") {
        return Err(FetchError::InvalidUrl(format!(
            "Unsupported scheme '{}' in {}",
            scheme, url
        )));
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "Normalized URL exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&normalized)
        .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl(format!(
                "Unsupported scheme '{other}' in {url}"
            )))
        }
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{url}: missing host")));
    }

    log::debug!("Normalized target URL {} -> {}", url, normalized);
    Ok(normalized)
}
