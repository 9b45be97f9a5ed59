//! Actual/Actual day count conventions.

use super::{DayCount, YearFraction};
use crate::types::Date;

/// Least common multiple of 365 and 366.
pub const LEAP_COMMON_LCM: i64 = 133_590;

/// Actual/Actual ISDA day count convention.
///
/// Actual days are split by the type of year they fall in. An interval lying
/// only in common years is `days / 365`, one lying only in leap years is
/// `days / 366`. An interval touching both is expressed over the common
/// denominator:
///
/// $$\frac{366 \cdot D_{common} + 365 \cdot D_{leap}}{133590}$$
///
/// which equals `common / 365 + leap / 366`. This is a single blended
/// fraction rather than the sub-period apportioning of the full ISDA rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn fraction(&self, start: Date, end: Date) -> YearFraction {
        let split = start.days_split_by_year_type(&end);

        match (split.leap_days, split.common_days) {
            (0, 0) => YearFraction::with_basis(0, i64::from(start.days_in_year())),
            (0, common) => YearFraction::with_basis(common, 365),
            (leap, 0) => YearFraction::with_basis(leap, 366),
            (leap, common) => YearFraction::with_basis(366 * common + 365 * leap, LEAP_COMMON_LCM),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_common_year_only() {
        let yf = ActActIsda.fraction(d(2013, 1, 1), d(2014, 1, 1));
        assert_eq!((yf.numerator(), yf.denominator()), (365, 365));
        assert_relative_eq!(yf.value(), 1.0);
    }

    #[test]
    fn test_leap_year_only() {
        let yf = ActActIsda.fraction(d(2012, 2, 5), d(2012, 4, 6));
        assert_eq!((yf.numerator(), yf.denominator()), (61, 366));
    }

    #[test]
    fn test_blended_denominator() {
        // 184 common days in 2011, 60 leap days in 2012
        let yf = ActActIsda.fraction(d(2011, 7, 1), d(2012, 3, 1));
        assert_eq!(yf.denominator(), LEAP_COMMON_LCM);
        assert_eq!(yf.numerator(), 366 * 184 + 365 * 60);
        assert_relative_eq!(yf.value(), 184.0 / 365.0 + 60.0 / 366.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_leap_year() {
        let yf = ActActIsda.fraction(d(2012, 1, 1), d(2013, 1, 1));
        assert_eq!((yf.numerator(), yf.denominator()), (366, 366));
    }

    #[test]
    fn test_empty_interval_uses_start_year_basis() {
        assert_eq!(ActActIsda.fraction(d(2012, 5, 1), d(2012, 5, 1)).denominator(), 366);
        assert_eq!(ActActIsda.fraction(d(2013, 5, 1), d(2013, 5, 1)).denominator(), 365);
    }

    #[test]
    fn test_day_count_is_actual() {
        assert_eq!(ActActIsda.day_count(d(2011, 7, 1), d(2012, 3, 1)), 244);
    }
}
