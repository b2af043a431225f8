//! Shift record model and the derived-field patch written back after
//! recomputation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{elapsed_hours, time_option_format};

/// One check-in/check-out work session.
///
/// A shift is "open" while the check-out is absent; all derived numeric
/// fields stay at zero until the shift closes and the day is recomputed.
/// The `date` is the shift's work day and does not change even when the
/// check-out crosses midnight.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftRecord::new_open(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// assert!(shift.is_open());
/// assert!(!shift.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Opaque identifier, stable across updates.
    pub id: String,
    /// The employee this session belongs to (owned externally).
    pub employee_id: String,
    /// The calendar work day of the shift.
    pub date: NaiveDate,
    /// Check-in time of day, absent until recorded.
    #[serde(default, with = "time_option_format")]
    pub check_in_time: Option<NaiveTime>,
    /// Check-out time of day, absent while the shift is open.
    #[serde(default, with = "time_option_format")]
    pub check_out_time: Option<NaiveTime>,
    /// Derived: elapsed hours for this session.
    #[serde(default)]
    pub total_hours: Decimal,
    /// Derived: hours paid at the base hourly rate.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Derived: hours paid at the overtime rate.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Derived: pay for the regular hours.
    #[serde(default)]
    pub regular_pay: Decimal,
    /// Derived: pay for the overtime hours.
    #[serde(default)]
    pub overtime_pay: Decimal,
    /// Derived: total pay for the session.
    #[serde(default)]
    pub salary: Decimal,
}

impl ShiftRecord {
    /// Creates a new open shift for a check-in, with a generated ID and all
    /// derived fields at zero.
    pub fn new_open(employee_id: &str, date: NaiveDate, check_in_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date,
            check_in_time: Some(check_in_time),
            check_out_time: None,
            total_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            regular_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            salary: Decimal::ZERO,
        }
    }

    /// Returns true if the shift has a check-in but no check-out yet.
    pub fn is_open(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }

    /// Returns true if both times are recorded.
    pub fn is_closed(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_some()
    }

    /// Elapsed hours for the session, or `None` while either time is absent.
    pub fn worked_hours(&self) -> Option<Decimal> {
        match (self.check_in_time, self.check_out_time) {
            (Some(check_in), Some(check_out)) => Some(elapsed_hours(check_in, check_out)),
            _ => None,
        }
    }
}

/// The derived fields recomputed for one shift, returned for the caller to
/// persist atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPatch {
    /// The shift these derived fields belong to.
    pub shift_id: String,
    /// Elapsed hours for the session.
    pub total_hours: Decimal,
    /// Hours paid at the base hourly rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Pay for the regular hours.
    pub regular_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Total pay for the session.
    pub salary: Decimal,
}
