//! Monetary pay computation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The monetary result for one shift's hours.
///
/// `salary` is always the exact integer sum of the two components; there is
/// no residual fraction because each component is rounded to a whole
/// currency unit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Pay for the regular hours.
    pub regular_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Total pay: `regular_pay + overtime_pay`.
    pub salary: Decimal,
}

/// Converts regular and overtime hours into monetary amounts.
///
/// Each component is rounded to the nearest whole currency unit (the target
/// currency has no fractional unit). The overtime rate is a flat per-hour
/// rate; resolving an absent employee rate to the policy default is the
/// caller's job.
///
/// This is a pure function with no I/O, safe to unit test with literal
/// inputs.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::compute_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = compute_pay(
///     Decimal::from(10),
///     Decimal::from_str("2.5").unwrap(),
///     Decimal::from(150_000),
///     Decimal::from(30_000),
/// );
/// assert_eq!(pay.regular_pay, Decimal::from(1_500_000));
/// assert_eq!(pay.overtime_pay, Decimal::from(75_000));
/// assert_eq!(pay.salary, Decimal::from(1_575_000));
/// ```
pub fn compute_pay(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    overtime_hourly_rate: Decimal,
) -> PayBreakdown {
    let regular_pay = round_currency(regular_hours * hourly_rate);
    let overtime_pay = round_currency(overtime_hours * overtime_hourly_rate);

    PayBreakdown {
        regular_pay,
        overtime_pay,
        salary: regular_pay + overtime_pay,
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
