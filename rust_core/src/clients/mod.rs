//! Upstream data-feed clients.

pub mod pinnacle;

pub use pinnacle::{FetchError, PinnacleClient, PINNACLE_API_BASE};

use async_trait::async_trait;
use serde_json::Value;

/// Transport seam for the fixture and odds feeds.
///
/// Implementations return raw JSON; parsing into typed payloads is the
/// caller's job. Errors are discriminated so callers can branch on
/// transport vs. content failures, but in the pipeline every failure is
/// treated as "no data" and never escalates.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FetchError>;
}
