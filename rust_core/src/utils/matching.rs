//! Fuzzy name scoring for fixture resolution.
//!
//! Team names as typed by a human rarely equal the feed's listing
//! ("Barcelona" vs "FC Barcelona", "Man Utd" vs "Manchester United").
//! Scoring is partial-ratio style: the shorter string is compared against
//! every equally long window of the longer one and the best window wins, so
//! containment scores 100 regardless of word order or surrounding noise.

use strsim::normalized_levenshtein;

/// Minimum per-side similarity for a fixture candidate. Hard cutoff:
/// 59.9 is out, 60.0 is in.
pub const MIN_SIMILARITY: f64 = 60.0;

/// Partial-ratio similarity between two names on a 0-100 scale.
///
/// Both inputs are trimmed and lowercased. An empty side scores 0.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if long.contains(&short) {
        return 100.0;
    }

    let short_len = short.chars().count();
    let long_chars: Vec<char> = long.chars().collect();

    let mut best = 0.0_f64;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        let score = normalized_levenshtein(&short, &window) * 100.0;
        if score > best {
            best = score;
        }
    }
    best
}

/// True iff both sides of a candidate clear [`MIN_SIMILARITY`].
pub fn passes_similarity(home_similarity: f64, away_similarity: f64) -> bool {
    home_similarity >= MIN_SIMILARITY && away_similarity >= MIN_SIMILARITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_scores_100() {
        assert_eq!(partial_ratio("Barcelona", "Barcelona"), 100.0);
    }

    #[test]
    fn test_containment_scores_100() {
        assert_eq!(partial_ratio("Barcelona", "FC Barcelona"), 100.0);
        assert_eq!(partial_ratio("Real Madrid", "Real Madrid CF"), 100.0);
        // Order of arguments does not matter
        assert_eq!(partial_ratio("FC Barcelona", "Barcelona"), 100.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(partial_ratio("  barcelona ", "FC BARCELONA"), 100.0);
    }

    #[test]
    fn test_near_match_scores_high() {
        let score = partial_ratio("Realmadrid", "Real Madrid");
        assert!(score >= 70.0 && score < 100.0, "score={}", score);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        assert!(partial_ratio("Barcelona", "Bayern Munich") < MIN_SIMILARITY);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(partial_ratio("", "Barcelona"), 0.0);
        assert_eq!(partial_ratio("Barcelona", "   "), 0.0);
    }

    #[test]
    fn test_similarity_cutoff_is_hard() {
        assert!(!passes_similarity(59.9, 100.0));
        assert!(!passes_similarity(100.0, 59.0));
        assert!(passes_similarity(60.0, 60.0));
        assert!(passes_similarity(100.0, 60.0));
    }
}
