//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing deductions.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use kenya_payroll::error::EngineError;
///
/// let error = EngineError::InvalidAmount {
///     field: "basic_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid amount for 'basic_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary input was negative or too large.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A monetary input could not be read as a number.
    #[error("Invalid amount for '{field}': '{input}' is not a number")]
    NotANumber {
        /// The field that was being read.
        field: String,
        /// The text that was entered.
        input: String,
    },

    /// A band table broke one of its ordering or coverage rules.
    #[error("Invalid {table} bands: {message}")]
    InvalidBands {
        /// The table that failed validation (e.g. "PAYE").
        table: String,
        /// A description of the violated rule.
        message: String,
    },

    /// The statutory rates document could not be parsed.
    #[error("Failed to parse statutory rates '{source_name}': {message}")]
    ConfigParseError {
        /// Name of the document that failed to parse.
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// A quadratic coefficient was outside the solvable domain.
    #[error("Invalid coefficient: {message}")]
    InvalidCoefficient {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_displays_field_and_message() {
        let error = EngineError::InvalidAmount {
            field: "allowances".to_string(),
            message: "-5 must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'allowances': -5 must not be negative"
        );
    }

    #[test]
    fn test_not_a_number_displays_field_and_input() {
        let error = EngineError::NotANumber {
            field: "allowances".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'allowances': 'abc' is not a number"
        );
    }

    #[test]
    fn test_invalid_bands_displays_table_and_message() {
        let error = EngineError::InvalidBands {
            table: "NHIF".to_string(),
            message: "final band must be unbounded".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid NHIF bands: final band must be unbounded"
        );
    }

    #[test]
    fn test_config_parse_error_displays_source_and_message() {
        let error = EngineError::ConfigParseError {
            source_name: "statutory_rates.yaml".to_string(),
            message: "missing field `paye`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse statutory rates 'statutory_rates.yaml': missing field `paye`"
        );
    }

    #[test]
    fn test_invalid_coefficient_displays_message() {
        let error = EngineError::InvalidCoefficient {
            message: "a must not be zero".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid coefficient: a must not be zero");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_amount() -> EngineResult<()> {
            Err(EngineError::InvalidAmount {
                field: "gross".to_string(),
                message: "must not be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_amount()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
