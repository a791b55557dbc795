//! One-shot scan pipeline: resolve sport, match fixture, retrieve odds,
//! extract the requested quotation, value it, size the stake.
//!
//! Each run is independent and stateless aside from the read-only config.
//! A [`ScanError`] is a terminal rejection of the request, not a process
//! failure; a sub-threshold edge is not an error at all - the report comes
//! back with `accepted = false` and no stake.

use log::info;
use thiserror::Error;

use crate::clients::DataFetcher;
use crate::config::AppConfig;
use crate::fixtures::{find_best_match, MatchError};
use crate::markets::{available_periods, extract, MarketKind};
use crate::odds::get_event_odds;
use crate::sports::resolve_sport;
use crate::types::{MatchSearch, ValuationResult};
use crate::value::evaluate;

/// One fully parsed scan request.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub sport: String,
    pub home: String,
    pub away: String,
    /// `"D Mon"`, year implied as the current UTC year
    pub date: String,
    pub market: MarketKind,
    pub line: f64,
    pub period: i32,
    pub reference_price: f64,
    pub reference_edge_pct: f64,
}

/// Terminal rejection of a scan request.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("sport {0:?} is not recognized")]
    UnknownSport(String),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("no odds posted for event {event_id}")]
    OddsUnavailable { event_id: i64 },
    #[error("market/line/period not offered (requested period {period}, available {available:?})")]
    MarketUnavailable { period: i32, available: Vec<i32> },
}

/// Everything a caller needs to report the outcome.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub sport_id: u32,
    pub search: MatchSearch,
    pub valuation: ValuationResult,
}

/// Run the full pipeline for one request.
pub async fn run_scan<F: DataFetcher>(
    fetcher: &F,
    config: &AppConfig,
    request: &ScanRequest,
) -> Result<ScanReport, ScanError> {
    let sport_id =
        resolve_sport(&request.sport).ok_or_else(|| ScanError::UnknownSport(request.sport.clone()))?;

    let search = find_best_match(
        fetcher,
        sport_id,
        &request.home,
        &request.away,
        &request.date,
    )
    .await?;
    let event_id = search.best().event.id;

    let odds = get_event_odds(fetcher, sport_id, event_id, &config.odds_retry)
        .await
        .ok_or(ScanError::OddsUnavailable { event_id })?;

    let quoted = match extract(&odds, request.market, request.line, request.period) {
        Some(price) => price,
        None => {
            return Err(ScanError::MarketUnavailable {
                period: request.period,
                available: available_periods(&odds),
            })
        }
    };

    info!(
        "event {} {} line {} period {}: quoted {} vs reference {}",
        event_id, request.market, request.line, request.period, quoted, request.reference_price
    );

    let valuation = evaluate(
        quoted,
        request.reference_price,
        request.reference_edge_pct,
        config.min_edge_pct,
        config.bankroll,
    );

    Ok(ScanReport {
        sport_id,
        search,
        valuation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::StaticFetcher;
    use crate::fixtures::FIXTURES_PATH;
    use crate::odds::ODDS_PATH;
    use crate::retry::RetryPolicy;
    use chrono::{Datelike, Utc};
    use serde_json::json;

    fn config() -> AppConfig {
        AppConfig {
            username: "user".to_string(),
            password: "pass".to_string(),
            bankroll: 500.0,
            min_edge_pct: 0.0,
            odds_retry: RetryPolicy::immediate(3),
        }
    }

    fn request(reference_price: f64) -> ScanRequest {
        ScanRequest {
            sport: "soccer".to_string(),
            home: "Real Madrid".to_string(),
            away: "Barcelona".to_string(),
            date: "10 May".to_string(),
            market: MarketKind::Over,
            line: 2.5,
            period: 0,
            reference_price,
            reference_edge_pct: 4.0,
        }
    }

    fn seeded_fetcher() -> StaticFetcher {
        let year = Utc::now().year();
        StaticFetcher::new()
            .with_response(
                FIXTURES_PATH,
                json!({"league": [{"id": 10, "name": "Spain - La Liga", "events": [
                    {"id": 777, "home": "Real Madrid", "away": "Barcelona",
                     "starts": format!("{}-05-10T19:00:00Z", year)}
                ]}]}),
            )
            .with_response(
                ODDS_PATH,
                json!({"leagues": [{"id": 10, "events": [
                    {"id": 777, "periods": [{
                        "number": 0,
                        "moneyline": {"home": 1.80, "away": 4.20, "draw": 3.60},
                        "totals": [{"points": 2.5, "over": 1.95, "under": 1.85}]
                    }]}
                ]}]}),
            )
    }

    #[tokio::test]
    async fn test_end_to_end_value_bet() {
        let fetcher = seeded_fetcher();
        let report = run_scan(&fetcher, &config(), &request(1.85)).await.unwrap();

        assert_eq!(report.sport_id, 29);
        assert_eq!(report.search.best().event.id, 777);
        assert_eq!(report.valuation.quoted_price, 1.95);
        assert_eq!(report.valuation.real_edge_pct, 5.41);
        assert!(report.valuation.accepted);
        assert_eq!(report.valuation.stake, Some(5.0));
    }

    #[tokio::test]
    async fn test_end_to_end_rejection_on_negative_edge() {
        let fetcher = seeded_fetcher();
        let report = run_scan(&fetcher, &config(), &request(2.10)).await.unwrap();

        assert!(report.valuation.real_edge_pct < 0.0);
        assert!(!report.valuation.accepted);
        assert_eq!(report.valuation.stake, None);
    }

    #[tokio::test]
    async fn test_unknown_sport_rejects_before_fetching() {
        let fetcher = StaticFetcher::new();
        let mut req = request(1.85);
        req.sport = "chess".to_string();

        let err = run_scan(&fetcher, &config(), &req).await.unwrap_err();
        assert!(matches!(err, ScanError::UnknownSport(_)));
        assert_eq!(fetcher.call_count(FIXTURES_PATH), 0);
    }

    #[tokio::test]
    async fn test_market_unavailable_reports_periods() {
        let fetcher = seeded_fetcher();
        let mut req = request(1.85);
        req.period = 2;

        let err = run_scan(&fetcher, &config(), &req).await.unwrap_err();
        match err {
            ScanError::MarketUnavailable { period, available } => {
                assert_eq!(period, 2);
                assert_eq!(available, vec![0]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_line_not_offered_rejects() {
        let fetcher = seeded_fetcher();
        let mut req = request(1.85);
        req.line = 3.5;

        let err = run_scan(&fetcher, &config(), &req).await.unwrap_err();
        assert!(matches!(err, ScanError::MarketUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_odds_never_posted() {
        let year = Utc::now().year();
        let fetcher = StaticFetcher::new()
            .with_response(
                FIXTURES_PATH,
                json!({"league": [{"id": 10, "name": "Spain - La Liga", "events": [
                    {"id": 777, "home": "Real Madrid", "away": "Barcelona",
                     "starts": format!("{}-05-10T19:00:00Z", year)}
                ]}]}),
            )
            .with_response(ODDS_PATH, json!({"leagues": []}));

        let err = run_scan(&fetcher, &config(), &request(1.85)).await.unwrap_err();
        assert!(matches!(err, ScanError::OddsUnavailable { event_id: 777 }));
    }

    #[tokio::test]
    async fn test_min_edge_threshold_rejects_thin_value() {
        let fetcher = seeded_fetcher();
        let mut cfg = config();
        cfg.min_edge_pct = 6.0;

        let report = run_scan(&fetcher, &cfg, &request(1.85)).await.unwrap();
        assert_eq!(report.valuation.real_edge_pct, 5.41);
        assert!(!report.valuation.accepted);
        assert_eq!(report.valuation.stake, None);
    }
}
