//! Actual/365 Fixed day count convention.

use super::{DayCount, YearFraction};
use crate::types::Date;

/// Actual/365 Fixed.
///
/// Actual calendar days over a constant 365, whatever the leap years in
/// between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn fraction(&self, start: Date, end: Date) -> YearFraction {
        YearFraction::with_basis(start.days_between(&end), 365)
    }
}
