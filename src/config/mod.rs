//! Pay policy configuration.
//!
//! The engine never hard-codes policy constants; the daily overtime
//! threshold, minimum session duration, and default overtime rate are all
//! carried in a [`PayPolicy`] supplied by the caller, either built in code
//! or loaded from a YAML file.

mod loader;
mod types;

pub use loader::load_policy;
pub use types::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_MINIMUM_SESSION_HOURS, DEFAULT_OVERTIME_RATE,
    PayPolicy,
};
