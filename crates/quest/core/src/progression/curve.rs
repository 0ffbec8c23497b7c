//! Experience curve.
//!
//! The curve is the single source of truth for level math. Everything else
//! (level-up loop, progress percentage) derives from
//! [`required_experience_for_level`]; nothing may duplicate the formula.

/// Total experience required to advance past `level`.
///
/// # Formula
///
/// ```text
/// required(level) = round(100 × 1.5^(level-1))    for level ≥ 1
/// required(level) = 0                             for level ≤ 0
/// ```
///
/// A character at level `L` holds `experience` with
/// `required(L-1) ≤ experience < required(L)` once settled.
pub fn required_experience_for_level(level: i32) -> i64 {
    if level <= 0 {
        return 0;
    }
    (100.0 * 1.5f64.powi(level - 1)).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_levels_require_nothing() {
        assert_eq!(required_experience_for_level(0), 0);
        assert_eq!(required_experience_for_level(-3), 0);
    }

    #[test]
    fn curve_anchor_values() {
        assert_eq!(required_experience_for_level(1), 100);
        assert_eq!(required_experience_for_level(2), 150);
        assert_eq!(required_experience_for_level(3), 225);
        // round(100 × 1.5^4) = round(506.25)
        assert_eq!(required_experience_for_level(5), 506);
    }

    #[test]
    fn curve_is_strictly_increasing() {
        for level in 1..60 {
            assert!(
                required_experience_for_level(level) > required_experience_for_level(level - 1),
                "curve not increasing at level {level}"
            );
        }
    }
}
