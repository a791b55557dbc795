//! Rounding helpers for monetary and percentage values.
//!
//! All stake and edge values cross the API boundary as `f64` rounded to two
//! decimals; rounding is explicit and happens exactly once, at the end of a
//! calculation.

/// Round a value to two decimal places (cent precision).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_truncates_to_cents() {
        assert_eq!(round2(5.405405405405), 5.41);
        assert_eq!(round2(5.404), 5.4);
    }

    #[test]
    fn test_round2_negative() {
        assert_eq!(round2(-7.142857), -7.14);
    }

    #[test]
    fn test_round2_already_exact() {
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(0.25), 0.25);
    }
}
