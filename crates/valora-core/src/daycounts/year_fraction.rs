//! Rational year fractions.

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{ValoraError, ValoraResult};

/// Elapsed time as a fraction of a year under some day count convention.
///
/// Kept as an integer numerator/denominator pair so that the exact ratio is
/// available alongside its floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearFraction {
    numerator: i64,
    denominator: i64,
}

impl YearFraction {
    /// Creates a year fraction.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidInput` if `denominator` is not positive.
    pub fn new(numerator: i64, denominator: i64) -> ValoraResult<Self> {
        if denominator <= 0 {
            return Err(ValoraError::invalid_input(format!(
                "year fraction denominator must be positive, got {denominator}"
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Internal constructor for the fixed, positive denominators used by the
    /// conventions in this module.
    pub(crate) const fn with_basis(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Day count numerator.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Day count denominator (year basis).
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Floating-point quotient.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Quotient as a `Decimal`.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

impl From<YearFraction> for f64 {
    fn from(yf: YearFraction) -> Self {
        yf.value()
    }
}

impl fmt::Display for YearFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
