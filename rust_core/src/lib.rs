//! Oddsedge Core - fixture resolution and value-bet sizing.
//!
//! This crate provides:
//! - Fuzzy fixture matching (sport, team names, date) against the live feed
//! - Derivative-league screening and live-odds-aware candidate selection
//! - Per-event odds retrieval with a bounded retry window
//! - Market/line/period quotation extraction
//! - Real-edge computation and bounded fractional-Kelly stake sizing
//!
//! The service binary under `services/value_scanner` wires these pieces to
//! the interactive CLI surface.

mod types;

pub mod clients;
pub mod config;
pub mod fixtures;
pub mod leagues;
pub mod markets;
pub mod odds;
pub mod pipeline;
pub mod retry;
pub mod sports;
pub mod utils;
pub mod value;

pub use types::*;
