//! Error types for the Valora core crate.
//!
//! Every failure in this crate is a deterministic validation failure raised
//! before any numeric work is done.

use thiserror::Error;

/// A specialized Result type for Valora core operations.
pub type ValoraResult<T> = Result<T, ValoraError>;

/// The main error type for calendar, day count and rate conversion operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValoraError {
    /// A (year, month, day) triple that is not a valid Gregorian date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed input: mismatched lengths, unknown keys, unreachable targets.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// A convention that is declared but has no implementation.
    #[error("Unsupported day count convention: {convention}")]
    UnsupportedConvention {
        /// Name of the convention that was selected.
        convention: String,
    },
}

impl ValoraError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(convention: impl Into<String>) -> Self {
        Self::UnsupportedConvention {
            convention: convention.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValoraError::invalid_date("2023-02-29");
        assert!(err.to_string().contains("Invalid date"));
        assert!(err.to_string().contains("2023-02-29"));
    }

    #[test]
    fn test_unsupported_is_distinct_from_invalid_input() {
        let unsupported = ValoraError::unsupported_convention("ACT/ACT EURO");
        let invalid = ValoraError::invalid_input("ACT/ACT EURO");
        assert_ne!(unsupported, invalid);
        assert!(unsupported.to_string().starts_with("Unsupported"));
    }
}
