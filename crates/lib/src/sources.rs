//! # External Problem Sources
//!
//! Fetches practice problems from third-party sources. No source ships
//! configured; each one is a name mapped to a JSON endpoint in the server
//! configuration, and its body is passed through untouched.

use crate::errors::SageError;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

/// Fetches the problem list for `source`.
///
/// Fails with [`SageError::UnconfiguredSource`] before any network call when the
/// source has no URL configured.
pub async fn fetch_problems(
    sources: &HashMap<String, String>,
    source: &str,
) -> Result<Value, SageError> {
    let url = sources
        .get(source)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| SageError::UnconfiguredSource(source.to_string()))?;

    info!(source = %source, url = %url, "Fetching problems from external source.");
    let client = ReqwestClient::builder()
        .build()
        .map_err(SageError::ReqwestClientBuild)?;
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(SageError::SourceRequest)?;

    response.json().await.map_err(SageError::SourceRequest)
}
