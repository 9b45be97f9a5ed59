//! Day count conventions.
//!
//! A day count convention turns a calendar interval into a [`YearFraction`]
//! for interest accrual and discounting.
//!
//! # Supported Conventions
//!
//! - [`Thirty360`]: 30/360 with no day adjustments
//! - [`Thirty360US`]: 30/360 US with February end-of-month rules
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsda`]: Actual/Actual ISDA (blended leap/common denominator)
//!
//! Actual/Actual Euro (AFB) is declared in [`DayCountConvention`] but has no
//! implementation; selecting it is an `UnsupportedConvention` error.
//!
//! # Usage
//!
//! ```rust
//! use valora_core::daycounts::{DayCount, Thirty360US};
//! use valora_core::types::Date;
//!
//! let start = Date::from_ymd(2012, 2, 29).unwrap();
//! let end = Date::from_ymd(2013, 2, 28).unwrap();
//!
//! let yf = Thirty360US.fraction(start, end);
//! assert_eq!(yf.numerator(), 360);
//! ```

mod act365;
mod actact;
mod thirty360;
mod year_fraction;

pub use act365::Act365Fixed;
pub use actact::{ActActIsda, LEAP_COMMON_LCM};
pub use thirty360::{Thirty360, Thirty360US};
pub use year_fraction::YearFraction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ValoraError, ValoraResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations are pure: the same two dates always give the same
/// fraction.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention.
    fn name(&self) -> &'static str;

    /// Year fraction between two dates as a numerator/denominator pair.
    fn fraction(&self, start: Date, end: Date) -> YearFraction;

    /// Day count numerator between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        self.fraction(start, end).numerator()
    }

    /// Year fraction between two dates as a float.
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.fraction(start, end).value()
    }
}

/// Days-in-month half of a convention key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayBasis {
    /// Every month has 30 days.
    Thirty,
    /// Actual calendar days.
    Actual,
}

/// Days-in-year half of a convention key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearBasis {
    /// 360-day year.
    ThreeSixty,
    /// Actual year length (refined by the flavor).
    Actual,
}

/// Convention flavor distinguishing variants with the same bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    /// No adjustments.
    None,
    /// US end-of-month adjustments.
    Us,
    /// Fixed 365-day year.
    Fixed,
    /// ISDA leap/common split.
    Isda,
    /// Euro / AFB.
    Euro,
}

/// Enumeration of all declared day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// 30/360, no adjustments
    Thirty360,
    /// 30/360 US
    Thirty360US,
    /// Actual/Actual ISDA
    ActActIsda,
    /// Actual/Actual Euro (AFB) - declared, not implemented
    ActActEuro,
    /// Actual/365 Fixed
    Act365Fixed,
}

impl DayCountConvention {
    /// Looks a convention up by its (days in month, days in year, flavor) key.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidInput` for a key with no convention.
    pub fn from_basis(
        days_in_month: DayBasis,
        days_in_year: YearBasis,
        flavor: Flavor,
    ) -> ValoraResult<Self> {
        use DayBasis as M;
        use YearBasis as Y;

        match (days_in_month, days_in_year, flavor) {
            (M::Thirty, Y::ThreeSixty, Flavor::None) => Ok(Self::Thirty360),
            (M::Thirty, Y::ThreeSixty, Flavor::Us) => Ok(Self::Thirty360US),
            (M::Actual, Y::Actual, Flavor::Fixed) => Ok(Self::Act365Fixed),
            (M::Actual, Y::Actual, Flavor::Isda) => Ok(Self::ActActIsda),
            (M::Actual, Y::Actual, Flavor::Euro) => Ok(Self::ActActEuro),
            key => Err(ValoraError::invalid_input(format!(
                "no day count convention for key {key:?}"
            ))),
        }
    }

    /// Creates a boxed day count implementation.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::UnsupportedConvention` for `ActActEuro`.
    pub fn to_day_count(&self) -> ValoraResult<Box<dyn DayCount>> {
        match self {
            Self::Thirty360 => Ok(Box::new(Thirty360)),
            Self::Thirty360US => Ok(Box::new(Thirty360US)),
            Self::ActActIsda => Ok(Box::new(ActActIsda)),
            Self::Act365Fixed => Ok(Box::new(Act365Fixed)),
            Self::ActActEuro => Err(ValoraError::unsupported_convention(self.name())),
        }
    }

    /// Year fraction between two dates under this convention.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::UnsupportedConvention` for `ActActEuro`.
    pub fn fraction(&self, start: Date, end: Date) -> ValoraResult<YearFraction> {
        let yf = match self {
            Self::Thirty360 => Thirty360.fraction(start, end),
            Self::Thirty360US => Thirty360US.fraction(start, end),
            Self::ActActIsda => ActActIsda.fraction(start, end),
            Self::Act365Fixed => Act365Fixed.fraction(start, end),
            Self::ActActEuro => return Err(ValoraError::unsupported_convention(self.name())),
        };
        log::debug!("{}({}, {}) = {}", self.name(), start, end, yf);
        Ok(yf)
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Thirty360 => "30/360",
            Self::Thirty360US => "30/360 US",
            Self::ActActIsda => "ACT/ACT ISDA",
            Self::ActActEuro => "ACT/ACT EURO",
            Self::Act365Fixed => "ACT/365F",
        }
    }

    /// Returns whether the convention has an implementation.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::ActActEuro)
    }

    /// Returns all declared day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            Self::Thirty360,
            Self::Thirty360US,
            Self::ActActIsda,
            Self::ActActEuro,
            Self::Act365Fixed,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = ValoraError;

    /// Parses a convention from a market name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "30/360" | "THIRTY360" | "30_360_NONE" => Ok(Self::Thirty360),
            "30/360 US" | "30U/360" | "THIRTY360US" | "30_360_US" => Ok(Self::Thirty360US),
            "ACT/365F" | "ACT/365 FIXED" | "ACT/365" | "ACT365FIXED" | "ACT_ACT_FIXED" => {
                Ok(Self::Act365Fixed)
            }
            "ACT/ACT ISDA" | "ACT/ACT" | "ACTACTISDA" | "ACT_ACT_ISDA" => Ok(Self::ActActIsda),
            "ACT/ACT EURO" | "ACT/ACT AFB" | "AFB" | "ACTACTEURO" | "ACT_ACT_EURO" => {
                Ok(Self::ActActEuro)
            }
            _ => Err(ValoraError::invalid_input(format!(
                "unknown day count convention: '{s}'"
            ))),
        }
    }
}
