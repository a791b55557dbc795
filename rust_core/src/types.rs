//! Domain types: fixture/odds feed payloads and matching/valuation results.
//!
//! Feed types mirror the upstream JSON exactly, quirks included: the
//! fixtures endpoint nests leagues under a singular `league` key while the
//! odds endpoint uses `leagues`, and team totals arrive camelCased as
//! `teamTotal`. Everything here is transient - rebuilt from scratch on each
//! fetch, never cached.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fixtures feed (GET /v3/fixtures?sportId=N)
// ---------------------------------------------------------------------------

/// Top-level fixtures payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixturesResponse {
    #[serde(rename = "league", default)]
    pub leagues: Vec<FixtureLeague>,
}

/// One league and its listed fixtures.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureLeague {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub events: Vec<Fixture>,
}

/// A scheduled event, prior to odds being posted.
///
/// `starts` is kept as the feed's ISO-8601 string; a malformed timestamp
/// skips that one event instead of failing the whole snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: i64,
    pub home: String,
    pub away: String,
    pub starts: String,
}

// ---------------------------------------------------------------------------
// Odds feed (GET /v3/odds?sportId=N&oddsFormat=DECIMAL)
// ---------------------------------------------------------------------------

/// Top-level odds payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsResponse {
    #[serde(default)]
    pub leagues: Vec<OddsLeague>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsLeague {
    pub id: i64,
    #[serde(default)]
    pub events: Vec<EventOdds>,
}

/// The full quotation tree for one event.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventOdds {
    pub id: i64,
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// One match segment (0 = full match, 1 = first half, ...) with its markets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Period {
    pub number: i32,
    #[serde(default)]
    pub moneyline: Option<Moneyline>,
    #[serde(default)]
    pub totals: Vec<TotalLine>,
    #[serde(default)]
    pub spreads: Vec<SpreadLine>,
    #[serde(rename = "teamTotal", default)]
    pub team_total: Option<TeamTotals>,
}

/// 1X2 prices. `draw` is absent for two-way sports.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Moneyline {
    pub home: Option<f64>,
    pub away: Option<f64>,
    pub draw: Option<f64>,
}

/// One over/under line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TotalLine {
    pub points: f64,
    pub over: Option<f64>,
    pub under: Option<f64>,
}

/// One handicap line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpreadLine {
    pub hdp: f64,
    pub home: Option<f64>,
    pub away: Option<f64>,
}

/// Per-team totals, one line per side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamTotals {
    pub home: Option<TeamTotalLine>,
    pub away: Option<TeamTotalLine>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamTotalLine {
    pub points: f64,
    pub over: Option<f64>,
    pub under: Option<f64>,
}

// ---------------------------------------------------------------------------
// Matching and valuation results
// ---------------------------------------------------------------------------

/// A fixture that survived date and name screening, scored per side.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub event: Fixture,
    pub league_id: i64,
    pub league_name: String,
    /// Home-side name similarity, 0-100
    pub home_similarity: f64,
    /// Away-side name similarity, 0-100
    pub away_similarity: f64,
    /// Whether the odds feed currently quotes this event
    pub has_live_odds: bool,
}

impl MatchCandidate {
    /// Sum of both similarities, 0-200. Only meaningful once both sides
    /// cleared the similarity cutoff.
    pub fn combined_score(&self) -> f64 {
        self.home_similarity + self.away_similarity
    }
}

/// Outcome of a fixture search: every surviving candidate plus the index of
/// the selected one.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSearch {
    pub candidates: Vec<MatchCandidate>,
    /// Index into `candidates`; always valid
    pub selected: usize,
}

impl MatchSearch {
    /// The selected candidate.
    pub fn best(&self) -> &MatchCandidate {
        &self.candidates[self.selected]
    }
}

/// Edge computation and stake recommendation for one quotation.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationResult {
    /// Price retrieved from the feed
    pub quoted_price: f64,
    /// Caller-supplied reference price
    pub reference_price: f64,
    /// Caller-supplied edge claimed at the reference price
    pub reference_edge_pct: f64,
    /// Edge of the quoted price over the reference, 2 decimals
    pub real_edge_pct: f64,
    /// Whether the real edge cleared the configured minimum
    pub accepted: bool,
    /// Recommended stake, present only when accepted
    pub stake: Option<f64>,
}
