//! Calendar date and calendar arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{ValoraError, ValoraResult};

/// A proleptic-Gregorian calendar date.
///
/// Newtype over `chrono::NaiveDate`. No time of day, no timezone.
///
/// # Example
///
/// ```rust
/// use valora_core::types::Date;
///
/// let date = Date::from_ymd(2012, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2012, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

/// Actual days of an interval split by the type of year they fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearTypeSplit {
    /// Days falling in leap years.
    pub leap_days: i64,
    /// Days falling in common years.
    pub common_days: i64,
}

impl YearTypeSplit {
    /// Total number of days in the split.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.leap_days + self.common_days
    }

    fn push(&mut self, year: i32, days: i64) {
        if is_leap_year(year) {
            self.leap_days += days;
        } else {
            self.common_days += days;
        }
    }
}

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidDate` if the triple is not a valid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ValoraResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ValoraError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> ValoraResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| ValoraError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the date falls in a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a (possibly negative) number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidDate` if the result is outside the
    /// representable date range.
    pub fn add_days(&self, days: i64) -> ValoraResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| ValoraError::invalid_date(format!("{self} + {days} days out of range")))
    }

    /// Same day `months` months away, spreadsheet `EDATE` style.
    ///
    /// When the day does not exist in the target month the result is clamped
    /// to that month's last day; it never rolls into the following month.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidDate` if the result is outside the
    /// representable date range.
    pub fn add_months(&self, months: i32) -> ValoraResult<Self> {
        let offset = i64::from(self.month()) - 1 + i64::from(months);
        let new_month = (offset.rem_euclid(12) + 1) as u32;
        let new_year = i64::from(self.year()) + offset.div_euclid(12);
        let new_year = i32::try_from(new_year)
            .map_err(|_| ValoraError::invalid_date(format!("year {new_year} out of range")))?;

        match Self::from_ymd(new_year, new_month, self.day()) {
            Ok(date) => Ok(date),
            Err(_) => Self::from_ymd(new_year, new_month, 1).map(|first| first.end_of_month()),
        }
    }

    /// Calculates the signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the last calendar day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let last = self.days_in_month();
        // Every month has at least 28 days, so only the day changes.
        Date(self.0.with_day(last).unwrap_or(self.0))
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        *self == self.end_of_month()
    }

    /// Returns January 1st of the date's year.
    #[must_use]
    pub fn start_of_year(&self) -> Self {
        Date(self.0.with_ordinal(1).unwrap_or(self.0))
    }

    /// Splits the actual days in `[self, end)` by leap and common years.
    ///
    /// Whole years strictly between the two dates contribute 366 or 365 days.
    /// The split is only meaningful for `end >= self`: an earlier `end` in the
    /// same year yields a negative count, and an `end` in an earlier year
    /// yields an empty split.
    #[must_use]
    pub fn days_split_by_year_type(&self, end: &Date) -> YearTypeSplit {
        let (iy, fy) = (self.year(), end.year());
        let mut split = YearTypeSplit::default();

        if iy == fy {
            split.push(iy, self.days_between(end));
        } else if fy > iy {
            // `fy > iy` guarantees `iy + 1` is a valid year.
            let next_year = Date(NaiveDate::from_ymd_opt(iy + 1, 1, 1).unwrap_or(self.0));
            split.push(iy, self.days_between(&next_year));
            split.push(fy, end.start_of_year().days_between(end));

            for year in (iy + 1)..fy {
                split.push(year, if is_leap_year(year) { 366 } else { 365 });
            }
        }

        split
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Checks if a year is a Gregorian leap year.
///
/// Divisible by 4, except century years not divisible by 400.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Months outside 1-12 have no days.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
