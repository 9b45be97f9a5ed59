//! Domain types for calendar arithmetic.
//!
//! - [`Date`]: proleptic-Gregorian calendar date
//! - [`YearTypeSplit`]: actual days split by leap and common years

mod date;

pub use date::{days_in_month, is_leap_year, Date, YearTypeSplit};
