//! Error types for the analytics crate.
//!
//! Lower-level errors are wrapped, never re-worded: a day count or rate
//! failure arrives as [`AnalyticsError::Core`], a root finder failure as
//! [`AnalyticsError::Solver`].

use std::fmt;
use thiserror::Error;

use valora_core::ValoraError;
use valora_math::MathError;

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Unified error type for NPV construction, solving and configuration.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Calendar, day count or input validation failure.
    #[error(transparent)]
    Core(#[from] ValoraError),

    /// Root finder failure: no sign change in the bracket or no convergence.
    #[error(transparent)]
    Solver(#[from] MathError),

    /// A single configuration field failed validation.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Several configuration fields failed validation.
    #[error("Multiple validation errors: {0:?}")]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Configuration could not be read.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration could not be written.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnalyticsError {
    /// Creates an invalid input error, reported as the core `InvalidInput` kind.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::Core(ValoraError::invalid_input(reason))
    }

    /// Returns true for root finder failures.
    #[must_use]
    pub fn is_solver_failure(&self) -> bool {
        matches!(self, Self::Solver(_))
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            AnalyticsError::Deserialization(err.to_string())
        } else {
            AnalyticsError::Serialization(err.to_string())
        }
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "{}: {} (rule: {})", self.field, self.message, rule),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns every validation error, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> AnalyticsResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(AnalyticsError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(AnalyticsError::MultipleValidationErrors(errors)),
        }
    }
}
