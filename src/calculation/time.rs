//! Time-of-day parsing, normalization, and elapsed-duration arithmetic.
//!
//! Stored times are plain wall-clock values with no timezone attached. Any
//! timezone adjustment happens at the boundary where a raw clock reading is
//! first captured, never inside this module.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses a time-of-day string into a normalized [`NaiveTime`].
///
/// Accepts `"HH:MM"` or `"HH:MM:SS"` in 24-hour form. Seconds are discarded
/// during normalization; the engine works at minute precision. Blank input
/// (empty or whitespace-only) is treated as "absent" and returns `Ok(None)`,
/// which is distinct from a malformed value.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] for malformed or out-of-range
/// input.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// let parsed = parse_time_of_day("08:30").unwrap();
/// assert_eq!(parsed, Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
///
/// // Seconds are accepted but dropped
/// let parsed = parse_time_of_day("08:30:45").unwrap();
/// assert_eq!(parsed, Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
///
/// // Blank means absent, not invalid
/// assert_eq!(parse_time_of_day("  ").unwrap(), None);
///
/// assert!(parse_time_of_day("25:00").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<Option<NaiveTime>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| EngineError::InvalidTimeFormat {
            value: value.to_string(),
        })?;

    // Normalize to minute precision
    let normalized = NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0).ok_or_else(
        || EngineError::InvalidTimeFormat {
            value: value.to_string(),
        },
    )?;

    Ok(Some(normalized))
}

/// Formats a time of day in the canonical `"HH:MM"` representation.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::format_time_of_day;
/// use chrono::NaiveTime;
///
/// let t = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
/// assert_eq!(format_time_of_day(t), "07:05");
/// ```
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Drops the seconds component of a raw clock reading.
///
/// Used where a time comes from an external clock source rather than a
/// parsed string, so every stored value carries minute precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Computes the elapsed hours between a check-in and a check-out.
///
/// Both times are converted to minutes since midnight. When the check-out
/// falls before the check-in the session is treated as crossing midnight and
/// one full day is added; overnight shifts are expected, not an error. The
/// result is rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::elapsed_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let check_out = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
/// assert_eq!(elapsed_hours(check_in, check_out), Decimal::new(40, 1)); // 4.0
/// ```
pub fn elapsed_hours(check_in: NaiveTime, check_out: NaiveTime) -> Decimal {
    let in_minutes = i64::from(check_in.num_seconds_from_midnight()) / 60;
    let out_minutes = i64::from(check_out.num_seconds_from_midnight()) / 60;

    let mut worked_minutes = out_minutes - in_minutes;
    if worked_minutes < 0 {
        // Session crosses midnight
        worked_minutes += MINUTES_PER_DAY;
    }

    (Decimal::from(worked_minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Serde adapter for `Option<NaiveTime>` model fields.
///
/// Serializes as the canonical `"HH:MM"` string and accepts both `"HH:MM"`
/// and legacy `"HH:MM:SS"` values on input, so format adaptation happens
/// once at the storage boundary instead of in every handler.
pub mod time_option_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_time_of_day, parse_time_of_day};

    /// Serializes an optional time of day as `"HH:MM"` or null.
    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&format_time_of_day(*time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional time of day, treating blank strings as absent.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_time_of_day(&s).map_err(serde::de::Error::custom),
        }
    }
}
