//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;
pub mod retry;

use url::Url;

use self::error::FetchError;

/// Parse a data-service base URL, making sure it ends with `/` so that
/// relative payload paths join beneath it instead of replacing its last segment
pub fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{other}'"
        ))),
    }
}

/// Join a relative payload path beneath a base URL
pub fn join_payload_url(base: &Url, path: &str) -> Result<Url, FetchError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))
}
