//! Data models for the Shift Aggregation and Overtime Salary Engine.
//!
//! This module contains the shift record and its derived-field patch, the
//! read-only employee rate, and the ephemeral per-day aggregation types.

mod daily_total;
mod employee;
mod shift;

pub use daily_total::{AggregationWarning, DailyTotal, WorkedShift};
pub use employee::EmployeeRate;
pub use shift::{ShiftPatch, ShiftRecord};
