//! Edge computation and bounded fractional-Kelly stake sizing.
//!
//! Pure functions over prices already retrieved; no I/O. Clamp order in
//! [`recommended_stake`] is load-bearing: the 5-unit floor is applied
//! before the profit cap, so long odds can legitimately produce a stake
//! under the floor.

use crate::types::ValuationResult;
use crate::utils::money::round2;

/// Conservative multiplier on the theoretical Kelly-optimal fraction.
pub const KELLY_FRACTION: f64 = 0.25;

/// Never stake more than this share of the bankroll.
pub const MAX_BANKROLL_FRACTION: f64 = 0.02;

/// Book minimum stake, in currency units.
pub const MIN_STAKE: f64 = 5.0;

/// Maximum profit exposure per bet, in currency units.
pub const MAX_PROFIT: f64 = 30.0;

/// Percentage by which `quoted_price` exceeds `reference_price`, rounded to
/// 2 decimals. Caller guarantees `reference_price != 0`.
pub fn real_edge_pct(quoted_price: f64, reference_price: f64) -> f64 {
    round2(((quoted_price / reference_price) - 1.0) * 100.0)
}

/// Recommended stake for a bet at `price` with `edge_pct` edge.
///
/// Quarter-Kelly on the edge, divided by the price, then clamped:
/// bankroll cap, stake floor, profit cap - in that order.
pub fn recommended_stake(price: f64, edge_pct: f64, bankroll: f64) -> f64 {
    let kelly = (edge_pct / 100.0) / (price - 1.0);

    let mut stake = bankroll * kelly * KELLY_FRACTION;
    stake /= price;

    stake = stake.min(bankroll * MAX_BANKROLL_FRACTION);
    stake = stake.max(MIN_STAKE);
    stake = stake.min(MAX_PROFIT / (price - 1.0));

    round2(stake)
}

/// Full valuation of a retrieved quotation against the caller's reference.
///
/// `accepted` iff the real edge clears `min_edge_pct`; the stake is only
/// computed for accepted bets.
pub fn evaluate(
    quoted_price: f64,
    reference_price: f64,
    reference_edge_pct: f64,
    min_edge_pct: f64,
    bankroll: f64,
) -> ValuationResult {
    let real = real_edge_pct(quoted_price, reference_price);
    let accepted = real >= min_edge_pct;
    let stake = if accepted {
        Some(recommended_stake(quoted_price, real, bankroll))
    } else {
        None
    };

    ValuationResult {
        quoted_price,
        reference_price,
        reference_edge_pct,
        real_edge_pct: real,
        accepted,
        stake,
    }
}
