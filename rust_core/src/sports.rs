//! Sport name resolution for the upstream feed.
//!
//! The feed keys everything by numeric sport id; users type sport names.
//! The table is static and covers the sports the book actually lists.

/// Name/id pairing for a single sport.
#[derive(Debug, Clone, Copy)]
pub struct SportConfig {
    /// Human-facing sport name (e.g., "soccer")
    pub name: &'static str,
    /// Numeric id understood by the feed
    pub id: u32,
}

/// Static configuration for all supported sports.
pub static SPORT_CONFIGS: &[SportConfig] = &[
    SportConfig { name: "baseball", id: 3 },
    SportConfig { name: "basketball", id: 4 },
    SportConfig { name: "boxing", id: 6 },
    SportConfig { name: "football", id: 15 },
    SportConfig { name: "hockey", id: 19 },
    SportConfig { name: "mixed martial arts", id: 22 },
    SportConfig { name: "soccer", id: 29 },
    SportConfig { name: "tennis", id: 33 },
    SportConfig { name: "volleyball", id: 34 },
];

/// Resolve a free-text sport name to the feed's numeric id.
///
/// Lookup is trimmed and case-insensitive. Returns `None` for unknown
/// sports; the caller reports "sport not recognized".
pub fn resolve_sport(name: &str) -> Option<u32> {
    let needle = name.trim();
    SPORT_CONFIGS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(needle))
        .map(|s| s.id)
}
