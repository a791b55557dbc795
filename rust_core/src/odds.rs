//! Odds retrieval: full-feed snapshots, per-event lookup, existence probe.
//!
//! The feed only exposes odds per sport, so both the probe and the full
//! retrieval fetch the whole sport snapshot and scan for the event id.
//! A snapshot that fails to fetch or parse is logged and treated as empty.

use log::warn;

use crate::clients::DataFetcher;
use crate::retry::{retry_until_some, RetryPolicy};
use crate::types::{EventOdds, OddsResponse};

/// Odds listing endpoint.
pub const ODDS_PATH: &str = "/v3/odds";

fn odds_params(sport_id: u32) -> [(&'static str, String); 2] {
    [
        ("sportId", sport_id.to_string()),
        ("oddsFormat", "DECIMAL".to_string()),
    ]
}

async fn fetch_odds_snapshot<F: DataFetcher>(fetcher: &F, sport_id: u32) -> Option<OddsResponse> {
    let raw = match fetcher.fetch(ODDS_PATH, &odds_params(sport_id)).await {
        Ok(value) => value,
        Err(e) => {
            warn!("odds fetch failed for sport {}: {}", sport_id, e);
            return None;
        }
    };
    match serde_json::from_value::<OddsResponse>(raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("odds payload for sport {} is malformed: {}", sport_id, e);
            None
        }
    }
}

fn find_event(snapshot: &OddsResponse, event_id: i64) -> Option<&EventOdds> {
    snapshot
        .leagues
        .iter()
        .flat_map(|league| league.events.iter())
        .find(|event| event.id == event_id)
}

/// Existence probe: does the odds feed currently quote this event at all?
///
/// Single fetch, no retries - used per candidate during fixture matching.
pub async fn event_has_odds<F: DataFetcher>(fetcher: &F, sport_id: u32, event_id: i64) -> bool {
    match fetch_odds_snapshot(fetcher, sport_id).await {
        Some(snapshot) => find_event(&snapshot, event_id).is_some(),
        None => false,
    }
}

/// Retrieve the full quotation tree for one event, retrying per `policy`
/// while the feed catches up. `None` after exhausting retries; the caller
/// reports failure, this is never fatal.
pub async fn get_event_odds<F: DataFetcher>(
    fetcher: &F,
    sport_id: u32,
    event_id: i64,
    policy: &RetryPolicy,
) -> Option<EventOdds> {
    retry_until_some(policy, || async move {
        let snapshot = fetch_odds_snapshot(fetcher, sport_id).await?;
        find_event(&snapshot, event_id).cloned()
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::StaticFetcher;
    use serde_json::json;

    fn snapshot_with_event(event_id: i64) -> serde_json::Value {
        json!({
            "leagues": [
                {"id": 1, "events": [{"id": event_id, "periods": [{"number": 0}]}]}
            ]
        })
    }

    fn empty_snapshot() -> serde_json::Value {
        json!({"leagues": []})
    }

    #[tokio::test]
    async fn test_event_has_odds() {
        let fetcher = StaticFetcher::new().with_response(ODDS_PATH, snapshot_with_event(42));
        assert!(event_has_odds(&fetcher, 29, 42).await);
        assert!(!event_has_odds(&fetcher, 29, 43).await);
    }

    #[tokio::test]
    async fn test_probe_is_false_on_fetch_failure() {
        let fetcher = StaticFetcher::new();
        assert!(!event_has_odds(&fetcher, 29, 42).await);
    }

    #[tokio::test]
    async fn test_get_event_odds_waits_for_posting() {
        // Odds appear only on the third snapshot.
        let fetcher = StaticFetcher::new()
            .with_response(ODDS_PATH, empty_snapshot())
            .with_response(ODDS_PATH, empty_snapshot())
            .with_response(ODDS_PATH, snapshot_with_event(42));

        let odds = get_event_odds(&fetcher, 29, 42, &RetryPolicy::immediate(3)).await;

        assert_eq!(odds.map(|e| e.id), Some(42));
        assert_eq!(fetcher.call_count(ODDS_PATH), 3);
    }

    #[tokio::test]
    async fn test_get_event_odds_exhausts_retries() {
        let fetcher = StaticFetcher::new().with_response(ODDS_PATH, empty_snapshot());

        let odds = get_event_odds(&fetcher, 29, 42, &RetryPolicy::immediate(3)).await;

        assert!(odds.is_none());
        assert_eq!(fetcher.call_count(ODDS_PATH), 3);
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_no_data() {
        let fetcher = StaticFetcher::new().with_response(ODDS_PATH, json!({"leagues": "nope"}));
        let odds = get_event_odds(&fetcher, 29, 42, &RetryPolicy::immediate(1)).await;
        assert!(odds.is_none());
    }
}
