//! Ephemeral per-day aggregation types.
//!
//! A [`DailyTotal`] exists only during recomputation; it is never persisted
//! as its own entity.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One shift's contribution to a day, as seen by the overtime allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedShift {
    /// The shift this slice came from.
    pub shift_id: String,
    /// Check-in time, used for ordering within the day.
    pub check_in_time: NaiveTime,
    /// Elapsed hours for the session, rounded to 2 decimal places.
    pub hours: Decimal,
}

/// An employee's aggregated day: total worked hours and the contributing
/// shifts ordered by check-in time (stable on ties, preserving record
/// creation order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The employee the day belongs to.
    pub employee_id: String,
    /// The calendar date being aggregated.
    pub date: NaiveDate,
    /// Sum of the contributing shifts' hours.
    pub total_hours: Decimal,
    /// Contributing shifts in check-in order.
    pub shifts: Vec<WorkedShift>,
}

/// A per-record condition noticed during aggregation that does not abort
/// the day, surfaced to the caller alongside the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The shift the warning applies to.
    pub shift_id: String,
}

impl AggregationWarning {
    /// Warning code for a shift with a check-out but no check-in.
    pub const INCOMPLETE_SHIFT: &'static str = "incomplete_shift";

    /// Builds the warning for a shift excluded because it has a check-out
    /// without a check-in.
    pub fn incomplete_shift(shift_id: &str) -> Self {
        Self {
            code: Self::INCOMPLETE_SHIFT.to_string(),
            message: format!(
                "Shift '{}' has a check-out without a check-in and was excluded from the day total",
                shift_id
            ),
            shift_id: shift_id.to_string(),
        }
    }
}
