//! Pay policy configuration types.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Default minimum session duration in hours (30 minutes).
pub const DEFAULT_MINIMUM_SESSION_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Default flat overtime rate in currency units per hour, applied when an
/// employee record carries no overtime rate of its own.
pub const DEFAULT_OVERTIME_RATE: Decimal = Decimal::from_parts(30_000, 0, 0, false, 0);

/// The injectable pay policy.
///
/// Callers can vary every policy constant; none of them is hard-coded in
/// the calculation paths. Fields missing from a configuration file fall
/// back to the documented defaults.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.daily_overtime_threshold, Decimal::from(10));
/// assert_eq!(policy.default_overtime_rate, Decimal::from(30_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayPolicy {
    /// Hours per day before overtime starts.
    #[serde(default = "default_threshold")]
    pub daily_overtime_threshold: Decimal,
    /// Shortest session accepted at checkout, in hours.
    #[serde(default = "default_minimum_session")]
    pub minimum_session_hours: Decimal,
    /// Flat overtime rate used when the employee has none.
    #[serde(default = "default_overtime_rate")]
    pub default_overtime_rate: Decimal,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            daily_overtime_threshold: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            minimum_session_hours: DEFAULT_MINIMUM_SESSION_HOURS,
            default_overtime_rate: DEFAULT_OVERTIME_RATE,
        }
    }
}

fn default_threshold() -> Decimal {
    DEFAULT_DAILY_OVERTIME_THRESHOLD
}

fn default_minimum_session() -> Decimal {
    DEFAULT_MINIMUM_SESSION_HOURS
}

fn default_overtime_rate() -> Decimal {
    DEFAULT_OVERTIME_RATE
}
