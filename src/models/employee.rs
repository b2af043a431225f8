//! Employee pay-rate model.
//!
//! Rates are owned by the employee-management subsystem; the engine only
//! reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee pay rates.
///
/// The overtime rate is a flat rate, not a multiplier of the hourly rate.
/// When it is absent the policy default applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRate {
    /// The employee these rates belong to.
    pub employee_id: String,
    /// Regular pay rate in currency units per hour.
    pub hourly_rate: Decimal,
    /// Flat overtime rate in currency units per hour, if set.
    pub overtime_hourly_rate: Option<Decimal>,
}

impl EmployeeRate {
    /// Returns the overtime rate, falling back to the given policy default.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeclock_engine::models::EmployeeRate;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = EmployeeRate {
    ///     employee_id: "emp_001".to_string(),
    ///     hourly_rate: Decimal::from(150_000),
    ///     overtime_hourly_rate: None,
    /// };
    /// assert_eq!(rate.overtime_rate_or(Decimal::from(30_000)), Decimal::from(30_000));
    /// ```
    pub fn overtime_rate_or(&self, default: Decimal) -> Decimal {
        self.overtime_hourly_rate.unwrap_or(default)
    }
}
