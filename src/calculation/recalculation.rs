//! Recalculation entry points for shift mutations.
//!
//! Every mutation of a shift's times (check-in, check-out, manual edit) runs
//! through this module, which re-derives all dependent fields for the whole
//! employee-day and returns them for the caller to persist atomically.
//! Editing one shift can change the regular/overtime split of a sibling on
//! the same day, so patches always cover every closed shift of the day, not
//! just the edited one.
//!
//! The functions here are pure over their inputs. The caller reads the day
//! snapshot and the employee rate, must serialize recomputation per
//! employee+date, and writes the returned patches back. Failed transitions
//! return an error and mutate nothing.

use chrono::{Local, NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::calculation::daily_aggregation::aggregate_day;
use crate::calculation::overtime_allocation::allocate_overtime;
use crate::calculation::salary::compute_pay;
use crate::calculation::time::{parse_time_of_day, truncate_to_minute};
use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AggregationWarning, EmployeeRate, ShiftPatch, ShiftRecord};

/// A source for the current wall-clock time of day.
///
/// Checkout without an explicit time reads the clock through this trait, so
/// tests and callers in other timezones can inject their own source. The
/// timezone decision happens in the implementation, where the raw clock
/// reading is first captured; stored values carry no zone.
pub trait Clock {
    /// Returns the current time of day at minute precision.
    fn time_of_day(&self) -> NaiveTime;
}

/// [`Clock`] backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        truncate_to_minute(Local::now().time())
    }
}

/// Derived fields for every closed shift of a recomputed day, plus any
/// per-record warnings raised while aggregating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecalculationResult {
    /// One patch per closed shift of the day, for atomic write-back.
    pub patches: Vec<ShiftPatch>,
    /// Warnings for records excluded from the day total.
    pub warnings: Vec<AggregationWarning>,
}

/// The outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutResult {
    /// The shift that was closed.
    pub shift_id: String,
    /// The checkout time that was recorded (supplied or clock-derived).
    pub check_out_time: NaiveTime,
    /// Recomputed derived fields for the whole day.
    pub recalculation: RecalculationResult,
}

/// The outcome of an [`edit_times`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The merged shift has both times; the day was recomputed.
    Recalculated {
        /// The merged check-in time to persist.
        check_in_time: NaiveTime,
        /// The merged check-out time to persist.
        check_out_time: NaiveTime,
        /// Recomputed derived fields for the whole day.
        recalculation: RecalculationResult,
    },
    /// The merged shift is still missing a time; persist only the raw time
    /// fields and leave derived fields untouched.
    TimesOnly {
        /// The merged check-in time, if any.
        check_in_time: Option<NaiveTime>,
        /// The merged check-out time, if any.
        check_out_time: Option<NaiveTime>,
    },
}

/// Recomputes the derived fields for one employee-day.
///
/// This is the single allocation path shared by every mutation flow:
/// aggregate the day, split regular/overtime hours, and price each split
/// with the employee's rates. An absent employee overtime rate falls back
/// to the policy default.
pub fn recalculate_day(
    employee_id: &str,
    date: NaiveDate,
    shifts: &[ShiftRecord],
    rate: &EmployeeRate,
    policy: &PayPolicy,
) -> RecalculationResult {
    let aggregation = aggregate_day(employee_id, date, shifts);
    let splits = allocate_overtime(&aggregation.day, policy.daily_overtime_threshold);

    let overtime_rate = rate.overtime_rate_or(policy.default_overtime_rate);

    let patches = splits
        .into_iter()
        .map(|split| {
            let pay = compute_pay(
                split.regular_hours,
                split.overtime_hours,
                rate.hourly_rate,
                overtime_rate,
            );
            ShiftPatch {
                shift_id: split.shift_id,
                total_hours: split.total_hours,
                regular_hours: split.regular_hours,
                overtime_hours: split.overtime_hours,
                regular_pay: pay.regular_pay,
                overtime_pay: pay.overtime_pay,
                salary: pay.salary,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        employee_id,
        %date,
        day_total = %aggregation.day.total_hours,
        patches = patches.len(),
        "recomputed day"
    );

    RecalculationResult {
        patches,
        warnings: aggregation.warnings,
    }
}

/// Opens a new shift for an employee checking in.
///
/// # Errors
///
/// Returns [`EngineError::AlreadyOpenShift`] when the employee already has
/// an open shift on that date; no record is created in that case.
pub fn check_in(
    employee_id: &str,
    date: NaiveDate,
    check_in_time: NaiveTime,
    existing: &[ShiftRecord],
) -> EngineResult<ShiftRecord> {
    if existing.iter().any(|s| s.date == date && s.is_open()) {
        return Err(EngineError::AlreadyOpenShift {
            employee_id: employee_id.to_string(),
            date,
        });
    }

    let shift = ShiftRecord::new_open(employee_id, date, truncate_to_minute(check_in_time));
    info!(shift_id = %shift.id, employee_id, %date, "shift opened");
    Ok(shift)
}

/// Closes an open shift and recomputes its day.
///
/// When `check_out_time` is not supplied the time is derived from `clock`.
/// The minimum-session check runs before any allocation or pay computation;
/// when it fails the transition is blocked entirely and the shift remains
/// open.
///
/// # Errors
///
/// - [`EngineError::ShiftNotFound`] when `shift_id` is not in `day_shifts`.
/// - [`EngineError::AlreadyClosed`] when a check-out is already recorded.
/// - [`EngineError::IncompleteShift`] when the shift has no check-in.
/// - [`EngineError::SessionTooShort`] when the session is under the policy
///   minimum.
pub fn check_out(
    shift_id: &str,
    check_out_time: Option<NaiveTime>,
    day_shifts: &[ShiftRecord],
    rate: &EmployeeRate,
    policy: &PayPolicy,
    clock: &dyn Clock,
) -> EngineResult<CheckOutResult> {
    let shift = find_shift(shift_id, day_shifts)?;

    if shift.check_out_time.is_some() {
        return Err(EngineError::AlreadyClosed {
            shift_id: shift_id.to_string(),
        });
    }
    let check_in_time = shift
        .check_in_time
        .ok_or_else(|| EngineError::IncompleteShift {
            shift_id: shift_id.to_string(),
        })?;

    let resolved = truncate_to_minute(check_out_time.unwrap_or_else(|| clock.time_of_day()));

    let hours = crate::calculation::elapsed_hours(check_in_time, resolved);
    if hours < policy.minimum_session_hours {
        return Err(EngineError::SessionTooShort {
            shift_id: shift_id.to_string(),
            hours,
            minimum: policy.minimum_session_hours,
        });
    }

    let snapshot = with_times(day_shifts, shift_id, Some(check_in_time), Some(resolved));
    let recalculation =
        recalculate_day(&shift.employee_id, shift.date, &snapshot, rate, policy);

    info!(
        shift_id,
        employee_id = %shift.employee_id,
        date = %shift.date,
        hours = %hours,
        "shift closed"
    );

    Ok(CheckOutResult {
        shift_id: shift_id.to_string(),
        check_out_time: resolved,
        recalculation,
    })
}

/// Applies a manual edit of a shift's raw times.
///
/// Supplied non-blank values merge over the persisted ones; an absent or
/// blank field is a no-op, never a reset-to-empty. When the merged shift has
/// both times the whole day is recomputed; otherwise only the raw time
/// fields change and derived fields are left untouched. Re-submitting
/// identical inputs produces identical outputs.
///
/// # Errors
///
/// - [`EngineError::ShiftNotFound`] when `shift_id` is not in `day_shifts`.
/// - [`EngineError::InvalidTimeFormat`] when a supplied value is malformed;
///   the field is rejected and nothing is merged.
pub fn edit_times(
    shift_id: &str,
    new_check_in: Option<&str>,
    new_check_out: Option<&str>,
    day_shifts: &[ShiftRecord],
    rate: &EmployeeRate,
    policy: &PayPolicy,
) -> EngineResult<EditOutcome> {
    let shift = find_shift(shift_id, day_shifts)?;

    let merged_check_in = merge_time(new_check_in, shift.check_in_time)?;
    let merged_check_out = merge_time(new_check_out, shift.check_out_time)?;

    match (merged_check_in, merged_check_out) {
        (Some(check_in_time), Some(check_out_time)) => {
            let snapshot = with_times(
                day_shifts,
                shift_id,
                Some(check_in_time),
                Some(check_out_time),
            );
            let recalculation =
                recalculate_day(&shift.employee_id, shift.date, &snapshot, rate, policy);

            info!(shift_id, employee_id = %shift.employee_id, "shift times edited, day recomputed");

            Ok(EditOutcome::Recalculated {
                check_in_time,
                check_out_time,
                recalculation,
            })
        }
        (check_in_time, check_out_time) => {
            info!(shift_id, "shift times edited, shift still incomplete");
            Ok(EditOutcome::TimesOnly {
                check_in_time,
                check_out_time,
            })
        }
    }
}

fn find_shift<'a>(shift_id: &str, day_shifts: &'a [ShiftRecord]) -> EngineResult<&'a ShiftRecord> {
    day_shifts
        .iter()
        .find(|s| s.id == shift_id)
        .ok_or_else(|| EngineError::ShiftNotFound {
            shift_id: shift_id.to_string(),
        })
}

/// Parses an edit field: `None` or blank keeps the persisted value.
fn merge_time(
    supplied: Option<&str>,
    persisted: Option<NaiveTime>,
) -> EngineResult<Option<NaiveTime>> {
    match supplied {
        None => Ok(persisted),
        Some(raw) => Ok(parse_time_of_day(raw)?.or(persisted)),
    }
}

/// Returns a copy of the day snapshot with one shift's times replaced.
fn with_times(
    day_shifts: &[ShiftRecord],
    shift_id: &str,
    check_in_time: Option<NaiveTime>,
    check_out_time: Option<NaiveTime>,
) -> Vec<ShiftRecord> {
    day_shifts
        .iter()
        .map(|s| {
            if s.id == shift_id {
                let mut updated = s.clone();
                updated.check_in_time = check_in_time;
                updated.check_out_time = check_out_time;
                updated
            } else {
                s.clone()
            }
        })
        .collect()
}
