//! 30/360 day count conventions.

use super::{DayCount, YearFraction};
use crate::types::Date;

/// Core 30/360 day count once day adjustments have been applied.
#[inline]
fn thirty_360_days(y1: i32, m1: u32, d1: u32, y2: i32, m2: u32, d2: u32) -> i64 {
    360 * (i64::from(y2) - i64::from(y1))
        + 30 * (i64::from(m2) - i64::from(m1))
        + (i64::from(d2) - i64::from(d1))
}

#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 with no day adjustments.
///
/// $$\text{Days} = 360 (Y_2 - Y_1) + 30 (M_2 - M_1) + (D_2 - D_1)$$
///
/// Raw calendar days go straight into the formula, so a 31st is counted as
/// such.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn fraction(&self, start: Date, end: Date) -> YearFraction {
        let days = thirty_360_days(
            start.year(),
            start.month(),
            start.day(),
            end.year(),
            end.month(),
            end.day(),
        );
        YearFraction::with_basis(days, 360)
    }
}

/// 30/360 US day count convention.
///
/// # Rules
///
/// Applied in this order, each seeing the result of the previous ones:
///
/// 1. If both dates are the last day of February, D2 becomes 30
/// 2. If the start date is the last day of February, D1 becomes 30
/// 3. If D2 is 31 and D1 is 30 or 31, D2 becomes 30
/// 4. If D1 is 31, D1 becomes 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn fraction(&self, start: Date, end: Date) -> YearFraction {
        let mut d1 = start.day();
        let mut d2 = end.day();
        let start_feb_eom = is_last_day_of_february(start);

        if start_feb_eom && is_last_day_of_february(end) {
            d2 = 30;
        }
        if start_feb_eom {
            d1 = 30;
        }
        if d2 == 31 && (d1 == 30 || d1 == 31) {
            d2 = 30;
        }
        if d1 == 31 {
            d1 = 30;
        }

        let days = thirty_360_days(start.year(), start.month(), d1, end.year(), end.month(), d2);
        YearFraction::with_basis(days, 360)
    }
}
