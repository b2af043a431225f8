//! Error types for the Shift Aggregation and Overtime Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during recomputation. Errors are
//! always returned as typed results, never as silent zeros: a caller cannot
//! mistake "computation skipped" for "zero hours worked".

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the engine.
///
/// State-machine violations (`AlreadyOpenShift`, `AlreadyClosed`,
/// `ShiftNotFound`, `SessionTooShort`) reject the whole transition with no
/// partial mutation. Recoverable per-record conditions are surfaced as
/// warnings during aggregation instead of aborting the day.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format: '25:00'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string was malformed or out of range.
    #[error("Invalid time format: '{value}'")]
    InvalidTimeFormat {
        /// The raw input that failed to parse.
        value: String,
    },

    /// A shift has a check-out but no check-in.
    #[error("Shift '{shift_id}' has a check-out without a check-in")]
    IncompleteShift {
        /// The ID of the incomplete shift.
        shift_id: String,
    },

    /// An open shift already exists for the employee on that date.
    #[error("Employee '{employee_id}' already has an open shift on {date}")]
    AlreadyOpenShift {
        /// The employee attempting to check in.
        employee_id: String,
        /// The work day of the existing open shift.
        date: NaiveDate,
    },

    /// The shift already has a check-out recorded.
    #[error("Shift '{shift_id}' is already closed")]
    AlreadyClosed {
        /// The ID of the closed shift.
        shift_id: String,
    },

    /// No shift with the given ID exists in the day snapshot.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was not found.
        shift_id: String,
    },

    /// The session is shorter than the minimum allowed duration.
    ///
    /// The shift remains open; the checkout transition is blocked before
    /// any allocation or pay computation.
    #[error("Shift '{shift_id}' session of {hours} hours is under the {minimum} hour minimum")]
    SessionTooShort {
        /// The ID of the shift being checked out.
        shift_id: String,
        /// The elapsed hours of the rejected session.
        hours: Decimal,
        /// The configured minimum session length in hours.
        minimum: Decimal,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
