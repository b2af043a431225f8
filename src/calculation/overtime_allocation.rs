//! Daily overtime allocation.
//!
//! This is the central algorithm of the engine, invoked by every mutation
//! path so the checkout flow and later edits can never drift apart. Overtime
//! is a day-level concept: the day's hours beyond the threshold are
//! attributed entirely to the day's last shift, the session that pushed the
//! day over the line.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::DailyTotal;

/// The regular/overtime split for one shift within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHoursSplit {
    /// The shift the split belongs to.
    pub shift_id: String,
    /// The shift's elapsed hours.
    pub total_hours: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
}

/// Splits a day's worked hours into per-shift regular and overtime portions.
///
/// With daily threshold `D` and day total `T`:
/// - `daily_regular = min(T, D)`, `daily_overtime = max(0, T - D)`;
/// - every shift except the last keeps all of its hours as regular, even if
///   it alone exceeds the threshold;
/// - the last shift (latest check-in) carries all of the day's overtime, and
///   its regular share is its proportional slice of the daily regular hours,
///   capped at its own hours: `min(hours, daily_regular * hours / T)`.
///
/// A single-shift day reduces to the plain `min(hours, D)` /
/// `max(0, hours - D)` split. A zero-hour day yields all-zero splits; the
/// proportional computation is guarded against division by zero.
///
/// Hour values are rounded to 2 decimal places once, here at the output,
/// not at intermediate steps.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::allocate_overtime;
/// use timeclock_engine::models::{DailyTotal, WorkedShift};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let day = DailyTotal {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     total_hours: Decimal::from_str("12.5").unwrap(),
///     shifts: vec![WorkedShift {
///         shift_id: "shift_001".to_string(),
///         check_in_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         hours: Decimal::from_str("12.5").unwrap(),
///     }],
/// };
///
/// let splits = allocate_overtime(&day, Decimal::from(10));
/// assert_eq!(splits[0].regular_hours, Decimal::from_str("10.00").unwrap());
/// assert_eq!(splits[0].overtime_hours, Decimal::from_str("2.50").unwrap());
/// ```
pub fn allocate_overtime(day: &DailyTotal, threshold: Decimal) -> Vec<ShiftHoursSplit> {
    let total = day.total_hours;

    let daily_regular = total.min(threshold);
    let daily_overtime = (total - threshold).max(Decimal::ZERO);

    let last_index = match day.shifts.len().checked_sub(1) {
        Some(i) => i,
        None => return Vec::new(),
    };

    day.shifts
        .iter()
        .enumerate()
        .map(|(index, shift)| {
            let (regular, overtime) = if index < last_index {
                // Only the day's last shift may carry overtime
                (shift.hours, Decimal::ZERO)
            } else if total.is_zero() {
                (Decimal::ZERO, Decimal::ZERO)
            } else {
                let proportional = daily_regular * shift.hours / total;
                (shift.hours.min(proportional), daily_overtime)
            };

            ShiftHoursSplit {
                shift_id: shift.shift_id.clone(),
                total_hours: round_hours(shift.hours),
                regular_hours: round_hours(regular),
                overtime_hours: round_hours(overtime),
            }
        })
        .collect()
}

fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
