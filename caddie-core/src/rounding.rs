//! Rounding shared by every yardage and percentage the engine reports.
//!
//! Halfway cases round to the nearest even integer so that, for example,
//! `2.5` yards reports as `2` and `3.5` as `4`.

/// Round to whole yards, ties to even. NaN rounds to zero.
///
/// # Examples
/// ```
/// use caddie_core::round_yards;
///
/// assert_eq!(round_yards(2.5), 2);
/// assert_eq!(round_yards(3.5), 4);
/// assert_eq!(round_yards(-2.6), -3);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "`as` saturates at the i64 bounds and maps NaN to zero"
)]
#[must_use]
pub fn round_yards(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Round to `decimals` places, ties to even.
///
/// # Examples
/// ```
/// use caddie_core::round_to;
///
/// assert_eq!(round_to(33.333_333, 1), 33.3);
/// assert_eq!(round_to(4.666_666, 2), 4.67);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 0)]
    #[case(1.5, 2)]
    #[case(-0.5, 0)]
    #[case(-1.5, -2)]
    #[case(14.999, 15)]
    #[case(f64::NAN, 0)]
    fn rounds_ties_to_even(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_yards(value), expected);
    }

    #[rstest]
    #[case(f64::INFINITY, i64::MAX)]
    #[case(f64::NEG_INFINITY, i64::MIN)]
    #[case(1e300, i64::MAX)]
    fn out_of_range_yards_saturate(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_yards(value), expected);
    }
}
