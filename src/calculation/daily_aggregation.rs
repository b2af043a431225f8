//! Per-day shift aggregation.
//!
//! Groups an employee's shift records for one calendar date into a
//! [`DailyTotal`]: the day's total worked hours and the contributing shifts
//! ordered by check-in time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::elapsed_hours;
use crate::models::{AggregationWarning, DailyTotal, ShiftRecord, WorkedShift};

/// The result of aggregating one employee-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAggregation {
    /// The aggregated day.
    pub day: DailyTotal,
    /// Per-record conditions noticed while aggregating.
    pub warnings: Vec<AggregationWarning>,
}

/// Aggregates every shift record for one employee on one date.
///
/// Each closed shift contributes its [`elapsed_hours`], independently rounded
/// to 2 decimal places; the day total is the sum of those contributions. The
/// contributing shifts are sorted ascending by check-in time with a stable
/// sort, so ties keep the input (record creation) order.
///
/// Records that cannot contribute are excluded rather than failing the day:
/// - a shift with neither time, or with only a check-in (still open), adds
///   nothing and produces no warning;
/// - a shift with a check-out but no check-in is a data-integrity problem
///   and is excluded with an `incomplete_shift` warning.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::aggregate_day;
/// use timeclock_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let mut shift = ShiftRecord::new_open("emp_001", date, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// shift.check_out_time = NaiveTime::from_hms_opt(18, 0, 0);
///
/// let aggregation = aggregate_day("emp_001", date, &[shift]);
/// assert_eq!(aggregation.day.total_hours, Decimal::new(1000, 2)); // 10.00
/// ```
pub fn aggregate_day(employee_id: &str, date: NaiveDate, shifts: &[ShiftRecord]) -> DayAggregation {
    let mut worked: Vec<WorkedShift> = Vec::with_capacity(shifts.len());
    let mut warnings: Vec<AggregationWarning> = Vec::new();

    for shift in shifts {
        match (shift.check_in_time, shift.check_out_time) {
            (Some(check_in), Some(check_out)) => {
                worked.push(WorkedShift {
                    shift_id: shift.id.clone(),
                    check_in_time: check_in,
                    hours: elapsed_hours(check_in, check_out),
                });
            }
            (None, Some(_)) => {
                warn!(
                    shift_id = %shift.id,
                    employee_id,
                    %date,
                    "excluding shift with check-out but no check-in"
                );
                warnings.push(AggregationWarning::incomplete_shift(&shift.id));
            }
            // Open or empty shifts exist as records but add no hours
            _ => {}
        }
    }

    // Stable sort keeps creation order for identical check-in times
    worked.sort_by_key(|w| w.check_in_time);

    let total_hours: Decimal = worked.iter().map(|w| w.hours).sum();

    DayAggregation {
        day: DailyTotal {
            employee_id: employee_id.to_string(),
            date,
            total_hours,
            shifts: worked,
        },
        warnings,
    }
}
