//! League screening for fixture matching.
//!
//! The feed lists derivative markets (corners, cards, player props, correct
//! score and friends) as separate leagues. Those never carry the main
//! moneyline/totals/spread markets we quote, so the matcher skips them by
//! name-substring screening.

/// Substrings that mark a league as a derivative/prop market listing.
pub static SPECIAL_LEAGUE_TERMS: &[&str] = &[
    "corners",
    "bookings",
    "cards",
    "card",
    "shots",
    "saves",
    "player",
    "props",
    "prop",
    "race",
    "special",
    "specials",
    "goalscorer",
    "correct score",
    "first to score",
    "penalty",
];

/// True iff the league name contains any blacklisted term (case-insensitive).
///
/// Used only to skip leagues while matching; the feed itself is untouched.
pub fn is_special_league(name: &str) -> bool {
    let lname = name.to_lowercase();
    SPECIAL_LEAGUE_TERMS.iter().any(|term| lname.contains(term))
}
