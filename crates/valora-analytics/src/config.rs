//! Valuation configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use valora_core::daycounts::DayCountConvention;
use valora_math::solvers::{BisectionSolver, BrentSolver, RootFinder, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult, Validate, ValidationError};

/// Bracketed root finder used to solve NPV functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Brent's method.
    #[default]
    Brent,
    /// Interval bisection.
    Bisection,
}

impl SolverKind {
    /// The root finder for this kind.
    pub fn finder(&self) -> &'static dyn RootFinder {
        match self {
            Self::Brent => &BrentSolver,
            Self::Bisection => &BisectionSolver,
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.finder().name())
    }
}

impl FromStr for SolverKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brent" => Ok(Self::Brent),
            "bisection" | "bisect" => Ok(Self::Bisection),
            _ => Err(AnalyticsError::invalid_input(format!("unknown solver: '{s}'"))),
        }
    }
}

/// Settings for building and solving NPV functions.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use valora_analytics::config::{SolverKind, ValuationConfig};
///
/// let config = ValuationConfig::from_json(r#"{"solver": "bisection"}"#).unwrap();
/// assert_eq!(config.solver, SolverKind::Bisection);
/// assert_eq!(config.day_count_base, 365.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Days per year dividing cashflow day offsets (365 by Circular Externa
    /// 030 de 2009).
    #[serde(default = "default_day_count_base")]
    pub day_count_base: f64,

    /// Convention counting days from the valuation date to each payment date,
    /// used when solving dated flows.
    #[serde(default = "default_day_count")]
    pub day_count: DayCountConvention,

    /// Search interval for the rate or spread.
    #[serde(default = "default_bracket")]
    pub bracket: (f64, f64),

    /// Absolute tolerance of the root finder.
    #[serde(default = "default_solver_tolerance")]
    pub solver_tolerance: f64,

    /// Iteration budget of the root finder.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Root finder.
    #[serde(default)]
    pub solver: SolverKind,
}

fn default_day_count_base() -> f64 {
    365.0
}

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Act365Fixed
}

fn default_bracket() -> (f64, f64) {
    (-0.999, 0.999)
}

fn default_solver_tolerance() -> f64 {
    1e-10
}

fn default_max_iterations() -> u32 {
    100
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            day_count_base: default_day_count_base(),
            day_count: default_day_count(),
            bracket: default_bracket(),
            solver_tolerance: default_solver_tolerance(),
            max_iterations: default_max_iterations(),
            solver: SolverKind::default(),
        }
    }
}

impl ValuationConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> AnalyticsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the day count base.
    #[must_use]
    pub fn with_day_count_base(mut self, day_count_base: f64) -> Self {
        self.day_count_base = day_count_base;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the search bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.bracket = (lower, upper);
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_solver_tolerance(mut self, tolerance: f64) -> Self {
        self.solver_tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the root finder.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Root finder settings.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.solver_tolerance, self.max_iterations)
    }
}

impl Validate for ValuationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.day_count_base.is_finite() && self.day_count_base > 0.0) {
            errors.push(ValidationError::with_rule(
                "day_count_base",
                format!("Day count base must be positive, got {}", self.day_count_base),
                "positive_base",
            ));
        }

        if !self.day_count.is_supported() {
            errors.push(ValidationError::with_rule(
                "day_count",
                format!("Day count convention {} is not implemented", self.day_count),
                "supported_convention",
            ));
        }

        let (lower, upper) = self.bracket;
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            errors.push(ValidationError::with_rule(
                "bracket",
                format!("Bracket [{lower}, {upper}] must be finite and ordered"),
                "ordered_bracket",
            ));
        } else if lower <= -1.0 {
            errors.push(ValidationError::with_rule(
                "bracket",
                format!("Bracket lower bound {lower} must be above -1"),
                "discountable_bracket",
            ));
        }

        if self.solver_tolerance.is_nan()
            || self.solver_tolerance <= 0.0
            || self.solver_tolerance > 1e-4
        {
            errors.push(ValidationError::with_rule(
                "solver_tolerance",
                "Solver tolerance must be between 0 and 1e-4",
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10000 {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        errors
    }
}
