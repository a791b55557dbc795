//! Pinnacle-compatible (PS3838) feed client with Basic authentication.
//!
//! Read-only: the two endpoints consumed are the fixtures listing and the
//! odds listing, both keyed by sport id. Every failure mode is surfaced as
//! a [`FetchError`] variant and logged; nothing here panics or retries.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use super::DataFetcher;

/// Production API base.
pub const PINNACLE_API_BASE: &str = "https://api.ps3838.com";

/// Per-request network timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Discriminated fetch failure. Callers can branch without catch-all
/// exception handling; the pipeline treats every variant as "no data".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("non-JSON response (content-type {content_type:?})")]
    NonJson { content_type: Option<String> },
    #[error("JSON decode failed: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the feed. Credentials are encoded once at construction;
/// the client is cheap to clone and stateless across requests.
#[derive(Clone)]
pub struct PinnacleClient {
    client: Client,
    base_url: String,
    auth_header: String,
}

impl std::fmt::Debug for PinnacleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnacleClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PinnacleClient {
    pub fn new(username: &str, password: &str) -> Self {
        Self::with_base_url(PINNACLE_API_BASE, username, password)
    }

    /// Create against a custom base URL (demo environments, local stubs).
    pub fn with_base_url(base_url: &str, username: &str, password: &str) -> Self {
        let encoded = BASE64.encode(format!("{}:{}", username, password));
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {}", encoded),
        }
    }
}

#[async_trait]
impl DataFetcher for PinnacleClient {
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} params={:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            // The feed rejects requests without a browser-like agent.
            .header(USER_AGENT, "Mozilla/5.0")
            .query(params)
            .send()
            .await
            .map_err(|e| {
                warn!("request to {} failed: {}", url, e);
                FetchError::Transport(e)
            })?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let is_json = content_type
            .as_deref()
            .map(|ct| ct.to_lowercase().contains("json"))
            .unwrap_or(false);
        if !is_json {
            warn!("non-JSON response from {} (content-type {:?})", url, content_type);
            return Err(FetchError::NonJson { content_type });
        }

        response.json::<Value>().await.map_err(|e| {
            warn!("JSON decode failed from {}: {}", url, e);
            FetchError::Decode(e)
        })
    }
}
