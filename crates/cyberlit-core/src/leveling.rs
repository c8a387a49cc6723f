//! Proficiency leveling policy.
//!
//! Tiers are half-open on the lower bound: `[0, 40)` beginner, `[40, 75)`
//! intermediate, `[75, 100]` advanced. Comparisons are done on integers
//! (`100 * score` against `bound * total`) so a percentage of exactly 40 or
//! 75 never lands in the lower tier through float rounding.

use crate::model::Level;

/// Lower bound (percent) of the intermediate tier.
pub const INTERMEDIATE_THRESHOLD: u64 = 40;
/// Lower bound (percent) of the advanced tier.
pub const ADVANCED_THRESHOLD: u64 = 75;

/// Map a raw score to a level.
///
/// A zero `total` yields `Beginner`; scoring never produces one.
pub fn level_of(score: u32, total: u32) -> Level {
    if total == 0 {
        return Level::Beginner;
    }
    let scaled = 100 * u64::from(score);
    let total = u64::from(total);

    if scaled < INTERMEDIATE_THRESHOLD * total {
        Level::Beginner
    } else if scaled < ADVANCED_THRESHOLD * total {
        Level::Intermediate
    } else {
        Level::Advanced
    }
}

/// Percentage correct, unrounded. Zero for an empty quiz.
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(score) / f64::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_boundaries() {
        // 2/5 = 40%, 3/4 = 75%
        assert_eq!(level_of(2, 5), Level::Intermediate);
        assert_eq!(level_of(3, 4), Level::Advanced);
        assert_eq!(level_of(40, 100), Level::Intermediate);
        assert_eq!(level_of(75, 100), Level::Advanced);
    }

    #[test]
    fn just_below_boundaries_fall_to_lower_tier() {
        assert_eq!(level_of(399, 1000), Level::Beginner);
        assert_eq!(level_of(749, 1000), Level::Intermediate);
        assert_eq!(level_of(3_999_999, 10_000_000), Level::Beginner);
        assert_eq!(level_of(7_499_999, 10_000_000), Level::Intermediate);
    }

    #[test]
    fn builtin_bank_sizes() {
        // 21 questions: 8/21 = 38.1%, 9/21 = 42.9%, 15/21 = 71.4%, 16/21 = 76.2%
        assert_eq!(level_of(8, 21), Level::Beginner);
        assert_eq!(level_of(9, 21), Level::Intermediate);
        assert_eq!(level_of(15, 21), Level::Intermediate);
        assert_eq!(level_of(16, 21), Level::Advanced);
        assert_eq!(level_of(18, 21), Level::Advanced);
    }

    #[test]
    fn extremes() {
        assert_eq!(level_of(0, 21), Level::Beginner);
        assert_eq!(level_of(21, 21), Level::Advanced);
        assert_eq!(level_of(0, 0), Level::Beginner);
    }

    #[test]
    fn percentage_unrounded() {
        let p = percentage(18, 21);
        assert!((p - 85.714_285).abs() < 1e-4, "got {p}");
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 4), 75.0);
    }
}
