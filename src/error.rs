//! Error types for the attendance engine.
//!
//! Classification itself is total; these errors only arise while loading
//! configuration or validating caller-supplied input.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested year/month does not name a calendar month.
    #[error("Invalid month {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-based).
        month: u32,
    },

    /// A leave interval ends before it starts.
    #[error("Invalid leave '{leave_type}': start date {start_date} is after end date {end_date}")]
    InvalidLeave {
        /// The leave type of the offending interval.
        leave_type: String,
        /// The interval start date.
        start_date: NaiveDate,
        /// The interval end date.
        end_date: NaiveDate,
    },

    /// The punch records supplied for a month are inconsistent.
    #[error("Invalid punch on {date}: {message}")]
    InvalidPunch {
        /// The date the punch was recorded against.
        date: NaiveDate,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
