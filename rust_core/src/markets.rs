//! Market extraction: pull one price out of an event's quotation tree.
//!
//! The market code is a closed enum - an unknown code is a parse error at
//! the input boundary, not a silent miss. Within the tree, a missing period
//! and a line with no exact match both yield `None` uniformly; callers that
//! need diagnostics ask [`available_periods`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::EventOdds;

/// The market/side a quotation is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketKind {
    MoneylineHome,
    MoneylineAway,
    MoneylineDraw,
    Over,
    Under,
    SpreadHome,
    SpreadAway,
    TeamOverHome,
    TeamUnderHome,
    TeamOverAway,
    TeamUnderAway,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown market code {0:?}")]
pub struct UnknownMarket(pub String);

impl FromStr for MarketKind {
    type Err = UnknownMarket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(Self::MoneylineHome),
            "2" => Ok(Self::MoneylineAway),
            "x" => Ok(Self::MoneylineDraw),
            "over" => Ok(Self::Over),
            "under" => Ok(Self::Under),
            "spread_home" => Ok(Self::SpreadHome),
            "spread_away" => Ok(Self::SpreadAway),
            "team_over_home" => Ok(Self::TeamOverHome),
            "team_under_home" => Ok(Self::TeamUnderHome),
            "team_over_away" => Ok(Self::TeamOverAway),
            "team_under_away" => Ok(Self::TeamUnderAway),
            other => Err(UnknownMarket(other.to_string())),
        }
    }
}

impl MarketKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoneylineHome => "1",
            Self::MoneylineAway => "2",
            Self::MoneylineDraw => "x",
            Self::Over => "over",
            Self::Under => "under",
            Self::SpreadHome => "spread_home",
            Self::SpreadAway => "spread_away",
            Self::TeamOverHome => "team_over_home",
            Self::TeamUnderHome => "team_under_home",
            Self::TeamOverAway => "team_over_away",
            Self::TeamUnderAway => "team_under_away",
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period numbers present in the tree, for rejection diagnostics.
pub fn available_periods(event: &EventOdds) -> Vec<i32> {
    event.periods.iter().map(|p| p.number).collect()
}

/// Extract the price for `market` at `line` in `period`.
///
/// Returns `None` when the period is absent, the moneyline side is not
/// quoted, or no line matches exactly. Lines are matched by exact float
/// equality: the feed publishes canonical values and the request goes
/// through the same f64 parse, so no tolerance is applied.
#[allow(clippy::float_cmp)]
pub fn extract(event: &EventOdds, market: MarketKind, line: f64, period: i32) -> Option<f64> {
    let period_odds = event.periods.iter().find(|p| p.number == period)?;

    match market {
        MarketKind::MoneylineHome => period_odds.moneyline.as_ref()?.home,
        MarketKind::MoneylineAway => period_odds.moneyline.as_ref()?.away,
        MarketKind::MoneylineDraw => period_odds.moneyline.as_ref()?.draw,
        MarketKind::Over | MarketKind::Under => {
            let total = period_odds.totals.iter().find(|t| t.points == line)?;
            match market {
                MarketKind::Over => total.over,
                _ => total.under,
            }
        }
        MarketKind::SpreadHome | MarketKind::SpreadAway => {
            let spread = period_odds.spreads.iter().find(|s| s.hdp == line)?;
            match market {
                MarketKind::SpreadHome => spread.home,
                _ => spread.away,
            }
        }
        MarketKind::TeamOverHome
        | MarketKind::TeamUnderHome
        | MarketKind::TeamOverAway
        | MarketKind::TeamUnderAway => {
            let team_total = period_odds.team_total.as_ref()?;
            let side = match market {
                MarketKind::TeamOverHome | MarketKind::TeamUnderHome => team_total.home.as_ref()?,
                _ => team_total.away.as_ref()?,
            };
            if side.points != line {
                return None;
            }
            match market {
                MarketKind::TeamOverHome | MarketKind::TeamOverAway => side.over,
                _ => side.under,
            }
        }
    }
}
