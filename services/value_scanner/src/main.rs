//! Interactive value-bet scanner.
//!
//! Reads one request per line from stdin (9 comma-separated fields), runs
//! the scan pipeline and prints a human-readable report. Malformed input
//! and rejected requests never stop the loop; the process keeps accepting
//! requests until EOF.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dotenv::dotenv;
use log::info;

use oddsedge_core::clients::PinnacleClient;
use oddsedge_core::config::AppConfig;
use oddsedge_core::markets::MarketKind;
use oddsedge_core::pipeline::{run_scan, ScanReport, ScanRequest};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let client = PinnacleClient::new(&config.username, &config.password);
    info!(
        "value scanner started (bankroll={}, min_edge_pct={})",
        config.bankroll, config.min_edge_pct
    );

    println!("Enter: Sport, Home, Away, Date, Market, Line, Period, Reference odds, Reference value %");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request = match parse_request(line) {
            Ok(request) => request,
            Err(reason) => {
                println!("Invalid request: {}", reason);
                continue;
            }
        };

        match run_scan(&client, &config, &request).await {
            Ok(report) => print_report(&report, &config),
            Err(e) => println!("No bet: {}", e),
        }
    }

    Ok(())
}

/// Parse one CLI line into a request. Wrong field count, bad numerics and
/// unknown market codes are rejected with a message and no processing.
fn parse_request(line: &str) -> Result<ScanRequest, String> {
    let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
    if fields.len() != 9 {
        return Err(format!(
            "expected 9 comma-separated fields, got {}",
            fields.len()
        ));
    }

    let market = fields[4]
        .parse::<MarketKind>()
        .map_err(|e| e.to_string())?;
    let line_value = fields[5]
        .parse::<f64>()
        .map_err(|_| format!("line {:?} is not a number", fields[5]))?;
    let period = fields[6]
        .parse::<i32>()
        .map_err(|_| format!("period {:?} is not an integer", fields[6]))?;
    let reference_price = fields[7]
        .parse::<f64>()
        .map_err(|_| format!("reference odds {:?} is not a number", fields[7]))?;
    let reference_edge_pct = fields[8]
        .parse::<f64>()
        .map_err(|_| format!("reference value {:?} is not a number", fields[8]))?;

    Ok(ScanRequest {
        sport: fields[0].to_string(),
        home: fields[1].to_string(),
        away: fields[2].to_string(),
        date: fields[3].to_string(),
        market,
        line: line_value,
        period,
        reference_price,
        reference_edge_pct,
    })
}

fn print_report(report: &ScanReport, config: &AppConfig) {
    println!("\n=== CANDIDATES ===");
    for candidate in &report.search.candidates {
        println!(
            "id={} | {} vs {} | score={:.0} | starts={} | league={}{}",
            candidate.event.id,
            candidate.event.home,
            candidate.event.away,
            candidate.combined_score(),
            candidate.event.starts,
            candidate.league_name,
            if candidate.has_live_odds {
                ""
            } else {
                " (no live odds)"
            }
        );
    }

    let best = report.search.best();
    println!("\n=== SELECTED EVENT ===");
    println!(
        "id={} | {} vs {} | league={} | starts={}",
        best.event.id, best.event.home, best.event.away, best.league_name, best.event.starts
    );

    let valuation = &report.valuation;
    println!("\nQuoted price: {}", valuation.quoted_price);
    println!("Reference value: {}%", valuation.reference_edge_pct);
    println!("Real value: {}%", valuation.real_edge_pct);

    if valuation.accepted {
        println!("\n=== VALUE BET ===");
        if let Some(stake) = valuation.stake {
            println!("Recommended stake: {:.2}", stake);
        }
    } else {
        println!(
            "Value below minimum ({}%). Bet discarded.",
            config.min_edge_pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_LINE: &str = "soccer, Real Madrid, Barcelona, 10 May, over, 2.5, 0, 1.85, 4.0";

    #[test]
    fn test_parse_full_request() {
        let request = parse_request(GOOD_LINE).unwrap();
        assert_eq!(request.sport, "soccer");
        assert_eq!(request.home, "Real Madrid");
        assert_eq!(request.away, "Barcelona");
        assert_eq!(request.date, "10 May");
        assert_eq!(request.market, MarketKind::Over);
        assert_eq!(request.line, 2.5);
        assert_eq!(request.period, 0);
        assert_eq!(request.reference_price, 1.85);
        assert_eq!(request.reference_edge_pct, 4.0);
    }

    #[test]
    fn test_wrong_field_count_is_rejected() {
        assert!(parse_request("soccer, Real Madrid, Barcelona").is_err());
        assert!(parse_request(&format!("{}, extra", GOOD_LINE)).is_err());
    }

    #[test]
    fn test_bad_numeric_fields_are_rejected() {
        let bad_line = "soccer, Real Madrid, Barcelona, 10 May, over, two, 0, 1.85, 4.0";
        assert!(parse_request(bad_line).is_err());
        let bad_period = "soccer, Real Madrid, Barcelona, 10 May, over, 2.5, first, 1.85, 4.0";
        assert!(parse_request(bad_period).is_err());
    }

    #[test]
    fn test_unknown_market_code_is_rejected() {
        let bad_market = "soccer, Real Madrid, Barcelona, 10 May, banker, 2.5, 0, 1.85, 4.0";
        let err = parse_request(bad_market).unwrap_err();
        assert!(err.contains("banker"));
    }
}
