//! Interest rate value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::conversion::convert_rate;
use super::quote::RateQuoteCase;
use crate::error::{ValoraError, ValoraResult};

/// How a spread is applied to a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadMode {
    /// `i + spread`, keeping the rate's own quotation.
    Additive,
    /// `(1 + AER(i)) * (1 + spread) - 1`, as an annual effective rate.
    Compounding,
}

impl FromStr for SpreadMode {
    type Err = ValoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "additive" => Ok(Self::Additive),
            "combine" | "compounding" => Ok(Self::Compounding),
            _ => Err(ValoraError::invalid_input(format!("unknown spread mode: '{s}'"))),
        }
    }
}

impl fmt::Display for SpreadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => f.write_str("additive"),
            Self::Compounding => f.write_str("compounding"),
        }
    }
}

/// An interest rate quoted under a specific convention.
///
/// Immutable: applying a spread returns a new rate.
///
/// # Example
///
/// ```rust
/// use valora_core::rates::{InterestRate, RateQuoteCase, SpreadMode};
///
/// let ibr = InterestRate::new(0.032, 12.0, RateQuoteCase::Mnr1);
/// let with_margin = ibr.combine_spread(0.02, SpreadMode::Additive).unwrap();
/// assert!((with_margin.value() - 0.052).abs() < 1e-15);
/// assert_eq!(ibr.value(), 0.032);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRate {
    value: f64,
    periods_per_year: f64,
    #[serde(default)]
    spread_mode: Option<SpreadMode>,
    term: RateQuoteCase,
}

impl InterestRate {
    /// Creates a rate with no spread mode.
    ///
    /// `value` is a fraction (0.05 = 5%).
    #[must_use]
    pub fn new(value: f64, periods_per_year: f64, term: RateQuoteCase) -> Self {
        Self {
            value,
            periods_per_year,
            spread_mode: None,
            term,
        }
    }

    /// Creates an annual effective rate (`EMR1`, one period a year).
    #[must_use]
    pub fn annual_effective(value: f64) -> Self {
        Self::new(value, 1.0, RateQuoteCase::Emr1)
    }

    /// Sets the default spread mode used by [`InterestRate::apply_spread`].
    #[must_use]
    pub fn with_spread_mode(mut self, mode: SpreadMode) -> Self {
        self.spread_mode = Some(mode);
        self
    }

    /// Rate value as a fraction.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Periods per year of the quotation.
    #[must_use]
    pub fn periods_per_year(&self) -> f64 {
        self.periods_per_year
    }

    /// Default spread mode, if any.
    #[must_use]
    pub fn spread_mode(&self) -> Option<SpreadMode> {
        self.spread_mode
    }

    /// Quotation case of the rate.
    #[must_use]
    pub fn term(&self) -> RateQuoteCase {
        self.term
    }

    /// Equivalent annual effective rate.
    pub fn to_annual_effective(&self) -> ValoraResult<f64> {
        convert_rate(
            self.value,
            self.term,
            self.periods_per_year,
            RateQuoteCase::Emr2,
            1.0,
        )
    }

    /// Equivalent rate under another quotation.
    pub fn convert_to(&self, target: RateQuoteCase, target_piy: f64) -> ValoraResult<f64> {
        convert_rate(self.value, self.term, self.periods_per_year, target, target_piy)
    }

    /// Returns a new rate with `spread` applied under `mode`.
    ///
    /// Additive keeps the periods per year and quotation. Compounding goes
    /// through the annual effective rate and returns an `EMR1` rate with one
    /// period a year.
    pub fn combine_spread(&self, spread: f64, mode: SpreadMode) -> ValoraResult<Self> {
        match mode {
            SpreadMode::Additive => Ok(Self {
                value: self.value + spread,
                ..*self
            }),
            SpreadMode::Compounding => {
                let aer = self.to_annual_effective()?;
                Ok(Self {
                    value: (1.0 + aer) * (1.0 + spread) - 1.0,
                    periods_per_year: 1.0,
                    spread_mode: self.spread_mode,
                    term: RateQuoteCase::Emr1,
                })
            }
        }
    }

    /// Applies `spread` using the rate's own spread mode.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidInput` if no spread mode was set.
    pub fn apply_spread(&self, spread: f64) -> ValoraResult<Self> {
        let mode = self.spread_mode.ok_or_else(|| {
            ValoraError::invalid_input(format!("rate {self} has no spread mode"))
        })?;
        self.combine_spread(spread, mode)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}% {} ({} piy)",
            self.value * 100.0,
            self.term,
            self.periods_per_year
        )
    }
}
