//! Error types for the work-time balance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a balance report.
//! Every error is fatal: the engine has no partial-success mode.

use thiserror::Error;

/// The main error type for the work-time balance engine.
///
/// # Example
///
/// ```
/// use worktime_balance::error::EngineError;
///
/// let error = EngineError::UnsupportedYear { year: 2019 };
/// assert_eq!(error.to_string(), "No holiday calendar configured for year 2019");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Calendar configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Calendar configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Calendar configuration parsed but holds inconsistent values.
    #[error("Invalid calendar configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// An input file (attendance export or vacation list) could not be read.
    #[error("Input file could not be read: {path}")]
    InputNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// A date token or date range could not be parsed.
    #[error("Invalid date '{input}': {message}")]
    InvalidDateFormat {
        /// The offending text.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// An attendance row was malformed.
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord {
        /// The 1-based line number in the source file.
        line: u64,
        /// A description of what made the row invalid.
        message: String,
    },

    /// No record falls in the anchor month, so the reporting year is unknown.
    #[error("No record found in anchor month {month}; cannot determine the reporting year")]
    NoReferenceMonthFound {
        /// The anchor month that was searched for.
        month: u32,
    },

    /// The attendance export contained no rows.
    #[error("No attendance records found")]
    EmptyInput,

    /// The detected reporting year has no holiday table.
    #[error("No holiday calendar configured for year {year}")]
    UnsupportedYear {
        /// The year that was requested.
        year: i32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calendar.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calendar.yaml"
        );
    }

    #[test]
    fn test_invalid_date_format_displays_input_and_message() {
        let error = EngineError::InvalidDateFormat {
            input: "32/01/2017".to_string(),
            message: "expected a day-first date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '32/01/2017': expected a day-first date"
        );
    }

    #[test]
    fn test_invalid_record_displays_line_and_message() {
        let error = EngineError::InvalidRecord {
            line: 7,
            message: "missing clock-out column".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record on line 7: missing clock-out column"
        );
    }

    #[test]
    fn test_no_reference_month_displays_month() {
        let error = EngineError::NoReferenceMonthFound { month: 4 };
        assert_eq!(
            error.to_string(),
            "No record found in anchor month 4; cannot determine the reporting year"
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            EngineError::EmptyInput.to_string(),
            "No attendance records found"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty() -> EngineResult<()> {
            Err(EngineError::EmptyInput)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::EmptyInput)));
    }
}
