//! Calculation logic for the Shift Aggregation and Overtime Salary Engine.
//!
//! This module contains time-of-day parsing and elapsed-duration arithmetic,
//! per-day shift aggregation, daily overtime allocation, monetary pay
//! computation, and the recalculation entry points invoked on every shift
//! mutation.

mod daily_aggregation;
mod overtime_allocation;
mod recalculation;
mod salary;
mod time;

pub use daily_aggregation::{DayAggregation, aggregate_day};
pub use overtime_allocation::{ShiftHoursSplit, allocate_overtime};
pub use recalculation::{
    CheckOutResult, Clock, EditOutcome, RecalculationResult, SystemClock, check_in, check_out,
    edit_times, recalculate_day,
};
pub use salary::{PayBreakdown, compute_pay};
pub use time::{
    MINUTES_PER_DAY, elapsed_hours, format_time_of_day, parse_time_of_day, time_option_format,
    truncate_to_minute,
};
