//! Fixture matching: resolve a fuzzy (teams, date) query to one event.
//!
//! The feed is scanned league by league; derivative-market leagues are
//! skipped, events are filtered to the target UTC calendar date, and both
//! team names are scored with partial-ratio similarity. Candidates that
//! clear the cutoff are probed for live odds, and an odds-bearing candidate
//! always beats a higher-scoring one without odds - a bettable event is
//! worth more than a textually perfect one.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::{debug, info, warn};
use thiserror::Error;

use crate::clients::DataFetcher;
use crate::leagues::is_special_league;
use crate::odds::event_has_odds;
use crate::types::{FixturesResponse, MatchCandidate, MatchSearch};
use crate::utils::matching::{partial_ratio, passes_similarity};

/// Fixtures listing endpoint.
pub const FIXTURES_PATH: &str = "/v3/fixtures";

/// Why a search ended without a selected event. These are terminal
/// rejections of the request, not process failures.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("unrecognized date {0:?} (expected \"D Mon\", e.g. \"10 May\")")]
    InvalidDate(String),
    #[error("no fixtures received for sport {sport_id}")]
    NoFixtures { sport_id: u32 },
    #[error("no candidate events matched the query")]
    NoCandidates,
}

/// Parse a `"D Mon"` date query, with the year implied as the current UTC
/// year.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    let year = Utc::now().year();
    NaiveDate::parse_from_str(&format!("{} {}", raw.trim(), year), "%d %b %Y").ok()
}

/// Find the best fixture for the query, preferring candidates with live
/// odds.
///
/// Ties on combined score keep the first candidate in feed iteration order;
/// the order is stable for a given snapshot but otherwise unspecified.
pub async fn find_best_match<F: DataFetcher>(
    fetcher: &F,
    sport_id: u32,
    home_query: &str,
    away_query: &str,
    date_query: &str,
) -> Result<MatchSearch, MatchError> {
    let target_date = parse_query_date(date_query)
        .ok_or_else(|| MatchError::InvalidDate(date_query.to_string()))?;

    let raw = match fetcher
        .fetch(FIXTURES_PATH, &[("sportId", sport_id.to_string())])
        .await
    {
        Ok(value) => value,
        Err(e) => {
            warn!("fixtures fetch failed for sport {}: {}", sport_id, e);
            return Err(MatchError::NoFixtures { sport_id });
        }
    };
    let feed: FixturesResponse = match serde_json::from_value(raw) {
        Ok(feed) => feed,
        Err(e) => {
            warn!("fixtures payload for sport {} is malformed: {}", sport_id, e);
            return Err(MatchError::NoFixtures { sport_id });
        }
    };
    if feed.leagues.is_empty() {
        return Err(MatchError::NoFixtures { sport_id });
    }

    let mut candidates: Vec<MatchCandidate> = Vec::new();
    for league in &feed.leagues {
        if is_special_league(&league.name) {
            debug!("skipping special league {:?}", league.name);
            continue;
        }
        for event in &league.events {
            // Malformed timestamps skip the event, not the snapshot
            let starts = match DateTime::parse_from_rfc3339(&event.starts) {
                Ok(t) => t.with_timezone(&Utc),
                Err(_) => continue,
            };
            // Calendar date in UTC only; time of day is ignored
            if starts.date_naive() != target_date {
                continue;
            }

            let home_similarity = partial_ratio(home_query, &event.home);
            let away_similarity = partial_ratio(away_query, &event.away);
            if !passes_similarity(home_similarity, away_similarity) {
                continue;
            }

            candidates.push(MatchCandidate {
                event: event.clone(),
                league_id: league.id,
                league_name: league.name.clone(),
                home_similarity,
                away_similarity,
                has_live_odds: false,
            });
        }
    }

    if candidates.is_empty() {
        return Err(MatchError::NoCandidates);
    }

    for candidate in candidates.iter_mut() {
        candidate.has_live_odds = event_has_odds(fetcher, sport_id, candidate.event.id).await;
    }

    let any_live = candidates.iter().any(|c| c.has_live_odds);
    let mut selected: Option<usize> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if any_live && !candidate.has_live_odds {
            continue;
        }
        let beats_current = match selected {
            Some(best) => candidate.combined_score() > candidates[best].combined_score(),
            None => true,
        };
        if beats_current {
            selected = Some(index);
        }
    }
    // At least one candidate always survives the live-odds filter
    let selected = selected.unwrap_or(0);

    info!(
        "selected event {} ({} vs {}) score={:.0} live_odds={}",
        candidates[selected].event.id,
        candidates[selected].event.home,
        candidates[selected].event.away,
        candidates[selected].combined_score(),
        candidates[selected].has_live_odds,
    );

    Ok(MatchSearch {
        candidates,
        selected,
    })
}
