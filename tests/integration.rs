//! Integration tests for the Shift Aggregation and Overtime Salary Engine.
//!
//! This suite drives the recalculation entry points the way a calling
//! boundary would: check-in, check-out, and manual edits over a day
//! snapshot, asserting the derived fields that would be written back.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use timeclock_engine::calculation::{
    Clock, EditOutcome, check_in, check_out, edit_times, recalculate_day,
};
use timeclock_engine::config::{PayPolicy, load_policy};
use timeclock_engine::error::EngineError;
use timeclock_engine::models::{EmployeeRate, ShiftPatch, ShiftRecord};

// =============================================================================
// Test Helpers
// =============================================================================

struct FixedClock(NaiveTime);

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.0
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn standard_rate() -> EmployeeRate {
    EmployeeRate {
        employee_id: "emp_001".to_string(),
        hourly_rate: dec("150000"),
        overtime_hourly_rate: Some(dec("30000")),
    }
}

fn closed_shift(id: &str, day: &str, check_in: NaiveTime, check_out: NaiveTime) -> ShiftRecord {
    let mut shift = ShiftRecord::new_open("emp_001", date(day), check_in);
    shift.id = id.to_string();
    shift.check_out_time = Some(check_out);
    shift
}

fn patch_for<'a>(patches: &'a [ShiftPatch], shift_id: &str) -> &'a ShiftPatch {
    patches
        .iter()
        .find(|p| p.shift_id == shift_id)
        .unwrap_or_else(|| panic!("no patch for {}", shift_id))
}

// =============================================================================
// Scenario A: single shift exactly at the threshold
// =============================================================================

#[test]
fn test_scenario_a_single_10h_shift_no_overtime() {
    let shifts = vec![closed_shift("s1", "2025-03-10", time(8, 0), time(18, 0))];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    let patch = patch_for(&result.patches, "s1");
    assert_eq!(patch.total_hours, dec("10.00"));
    assert_eq!(patch.regular_hours, dec("10.00"));
    assert_eq!(patch.overtime_hours, dec("0.00"));
    assert_eq!(patch.regular_pay, dec("1500000"));
    assert_eq!(patch.overtime_pay, dec("0"));
    assert_eq!(patch.salary, dec("1500000"));
}

// =============================================================================
// Scenario B: single shift over the threshold
// =============================================================================

#[test]
fn test_scenario_b_single_12_5h_shift_with_overtime() {
    let shifts = vec![closed_shift("s1", "2025-03-10", time(8, 0), time(20, 30))];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    let patch = patch_for(&result.patches, "s1");
    assert_eq!(patch.total_hours, dec("12.50"));
    assert_eq!(patch.regular_hours, dec("10.00"));
    assert_eq!(patch.overtime_hours, dec("2.50"));
    assert_eq!(patch.regular_pay, dec("1500000"));
    assert_eq!(patch.overtime_pay, dec("75000"));
    assert_eq!(patch.salary, dec("1575000"));
}

// =============================================================================
// Scenario C: two shifts in one day, overtime on the last
// =============================================================================

#[test]
fn test_scenario_c_two_shifts_overtime_attributed_to_last() {
    let shifts = vec![
        closed_shift("morning", "2025-03-10", time(8, 0), time(13, 0)),
        closed_shift("evening", "2025-03-10", time(14, 0), time(21, 0)),
    ];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    assert_eq!(result.patches.len(), 2);

    let morning = patch_for(&result.patches, "morning");
    assert_eq!(morning.total_hours, dec("5.00"));
    assert_eq!(morning.regular_hours, dec("5.00"));
    assert_eq!(morning.overtime_hours, dec("0.00"));
    assert_eq!(morning.salary, dec("750000"));

    // Last shift regular = min(7, 10 * 7/12) = 5.83, all 2h of overtime
    let evening = patch_for(&result.patches, "evening");
    assert_eq!(evening.total_hours, dec("7.00"));
    assert_eq!(evening.regular_hours, dec("5.83"));
    assert_eq!(evening.overtime_hours, dec("2.00"));
    assert_eq!(evening.regular_pay, dec("874500"));
    assert_eq!(evening.overtime_pay, dec("60000"));
    assert_eq!(evening.salary, dec("934500"));
}

// =============================================================================
// Scenario D: checkout under the minimum session duration
// =============================================================================

#[test]
fn test_scenario_d_short_session_rejected_shift_stays_open() {
    let open = ShiftRecord::new_open("emp_001", date("2025-03-10"), time(9, 0));
    let shift_id = open.id.clone();
    let clock = FixedClock(time(9, 10));

    let result = check_out(
        &shift_id,
        None,
        std::slice::from_ref(&open),
        &standard_rate(),
        &PayPolicy::default(),
        &clock,
    );

    match result {
        Err(EngineError::SessionTooShort { hours, minimum, .. }) => {
            assert_eq!(hours, dec("0.17"));
            assert_eq!(minimum, dec("0.5"));
        }
        other => panic!("Expected SessionTooShort, got {:?}", other),
    }

    // The engine returned no patches; the caller persists nothing and the
    // snapshot still holds an open shift
    assert!(open.is_open());
}

// =============================================================================
// Scenario E: session crossing midnight
// =============================================================================

#[test]
fn test_scenario_e_overnight_shift_counts_four_hours() {
    let shifts = vec![closed_shift("night", "2025-03-10", time(22, 0), time(2, 0))];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    let patch = patch_for(&result.patches, "night");
    assert_eq!(patch.total_hours, dec("4.00"));
    assert_eq!(patch.regular_hours, dec("4.00"));
    assert_eq!(patch.overtime_hours, dec("0.00"));
    assert_eq!(patch.salary, dec("600000"));
}

// =============================================================================
// Full lifecycle: check-in then check-out
// =============================================================================

#[test]
fn test_check_in_then_check_out_lifecycle() {
    let day = date("2025-03-10");

    let opened = check_in("emp_001", day, time(8, 0), &[]).unwrap();
    assert!(opened.is_open());

    // A second check-in the same day is rejected while the shift is open
    let second = check_in("emp_001", day, time(9, 0), std::slice::from_ref(&opened));
    assert!(matches!(second, Err(EngineError::AlreadyOpenShift { .. })));

    let clock = FixedClock(time(18, 0));
    let closed = check_out(
        &opened.id,
        None,
        std::slice::from_ref(&opened),
        &standard_rate(),
        &PayPolicy::default(),
        &clock,
    )
    .unwrap();

    assert_eq!(closed.check_out_time, time(18, 0));
    let patch = patch_for(&closed.recalculation.patches, &opened.id);
    assert_eq!(patch.regular_hours, dec("10.00"));
    assert_eq!(patch.salary, dec("1500000"));
}

// =============================================================================
// Sibling recompute: editing one shift moves a sibling's split
// =============================================================================

#[test]
fn test_editing_one_shift_changes_sibling_allocation() {
    let shifts = vec![
        closed_shift("morning", "2025-03-10", time(8, 0), time(13, 0)),
        closed_shift("evening", "2025-03-10", time(14, 0), time(21, 0)),
    ];

    // Extend the morning shift by one hour; the evening shift's proration
    // and overtime change even though its own times did not
    let outcome = edit_times(
        "morning",
        None,
        Some("14:00"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    )
    .unwrap();

    let recalculation = match outcome {
        EditOutcome::Recalculated { recalculation, .. } => recalculation,
        other => panic!("Expected Recalculated, got {:?}", other),
    };

    let morning = patch_for(&recalculation.patches, "morning");
    assert_eq!(morning.total_hours, dec("6.00"));
    assert_eq!(morning.regular_hours, dec("6.00"));

    // Day total is now 13h: evening regular = min(7, 10 * 7/13) = 5.38,
    // overtime = 3
    let evening = patch_for(&recalculation.patches, "evening");
    assert_eq!(evening.regular_hours, dec("5.38"));
    assert_eq!(evening.overtime_hours, dec("3.00"));
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_edit_times_is_idempotent() {
    let shifts = vec![closed_shift("s1", "2025-03-10", time(8, 0), time(17, 0))];

    let first = edit_times(
        "s1",
        Some("08:00"),
        Some("20:30"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    )
    .unwrap();
    let second = edit_times(
        "s1",
        Some("08:00"),
        Some("20:30"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_recalculate_day_is_deterministic() {
    let shifts = vec![
        closed_shift("a", "2025-03-10", time(8, 0), time(13, 0)),
        closed_shift("b", "2025-03-10", time(14, 0), time(21, 0)),
    ];

    let first = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );
    let second = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    assert_eq!(first, second);
}

// =============================================================================
// Warnings and partial edits
// =============================================================================

#[test]
fn test_incomplete_sibling_warns_but_day_still_computes() {
    let mut broken = closed_shift("broken", "2025-03-10", time(8, 0), time(12, 0));
    broken.check_in_time = None;
    let shifts = vec![
        broken,
        closed_shift("valid", "2025-03-10", time(13, 0), time(21, 0)),
    ];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    assert_eq!(result.patches.len(), 1);
    assert_eq!(result.patches[0].shift_id, "valid");
    assert_eq!(result.patches[0].regular_hours, dec("8.00"));

    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, "incomplete_shift");
    assert_eq!(result.warnings[0].shift_id, "broken");
}

#[test]
fn test_partial_edit_keeps_derived_fields_untouched() {
    let open = ShiftRecord::new_open("emp_001", date("2025-03-10"), time(8, 0));
    let shift_id = open.id.clone();

    let outcome = edit_times(
        &shift_id,
        Some("07:30"),
        Some(""),
        std::slice::from_ref(&open),
        &standard_rate(),
        &PayPolicy::default(),
    )
    .unwrap();

    assert_eq!(
        outcome,
        EditOutcome::TimesOnly {
            check_in_time: Some(time(7, 30)),
            check_out_time: None,
        }
    );
}

// =============================================================================
// Policy injection
// =============================================================================

#[test]
fn test_shipped_policy_file_drives_the_engine() {
    let policy = load_policy("./config/policy.yaml").unwrap();
    let shifts = vec![closed_shift("s1", "2025-03-10", time(8, 0), time(20, 30))];

    let rate = EmployeeRate {
        employee_id: "emp_001".to_string(),
        hourly_rate: dec("150000"),
        overtime_hourly_rate: None,
    };

    let result = recalculate_day("emp_001", date("2025-03-10"), &shifts, &rate, &policy);

    // Overtime priced at the policy's 30,000 default
    let patch = patch_for(&result.patches, "s1");
    assert_eq!(patch.overtime_hours, dec("2.50"));
    assert_eq!(patch.overtime_pay, dec("75000"));
}

#[test]
fn test_custom_threshold_changes_the_split() {
    let policy = PayPolicy {
        daily_overtime_threshold: dec("8"),
        ..PayPolicy::default()
    };
    let shifts = vec![closed_shift("s1", "2025-03-10", time(8, 0), time(18, 0))];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &policy,
    );

    let patch = patch_for(&result.patches, "s1");
    assert_eq!(patch.regular_hours, dec("8.00"));
    assert_eq!(patch.overtime_hours, dec("2.00"));
    assert_eq!(patch.salary, dec("1260000"));
}

#[test]
fn test_custom_minimum_session_allows_short_checkout() {
    let policy = PayPolicy {
        minimum_session_hours: dec("0.1"),
        ..PayPolicy::default()
    };
    let open = ShiftRecord::new_open("emp_001", date("2025-03-10"), time(9, 0));
    let clock = FixedClock(time(9, 10));

    let result = check_out(
        &open.id,
        None,
        std::slice::from_ref(&open),
        &standard_rate(),
        &PayPolicy::default(),
        &clock,
    );
    assert!(matches!(result, Err(EngineError::SessionTooShort { .. })));

    let result = check_out(
        &open.id,
        None,
        std::slice::from_ref(&open),
        &standard_rate(),
        &policy,
        &clock,
    );
    assert!(result.is_ok());
}

// =============================================================================
// Hour conservation
// =============================================================================

#[test]
fn test_day_under_threshold_conserves_hours_exactly() {
    let shifts = vec![
        closed_shift("a", "2025-03-10", time(8, 0), time(11, 30)),
        closed_shift("b", "2025-03-10", time(13, 0), time(17, 15)),
    ];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    let regular: Decimal = result.patches.iter().map(|p| p.regular_hours).sum();
    let overtime: Decimal = result.patches.iter().map(|p| p.overtime_hours).sum();
    let total: Decimal = result.patches.iter().map(|p| p.total_hours).sum();

    assert_eq!(regular + overtime, total);
    assert_eq!(overtime, dec("0.00"));
}

#[test]
fn test_single_shift_conserves_hours_over_threshold() {
    let shifts = vec![closed_shift("s1", "2025-03-10", time(6, 0), time(19, 45))];

    let result = recalculate_day(
        "emp_001",
        date("2025-03-10"),
        &shifts,
        &standard_rate(),
        &PayPolicy::default(),
    );

    let patch = patch_for(&result.patches, "s1");
    assert_eq!(
        patch.regular_hours + patch.overtime_hours,
        patch.total_hours
    );
    assert_eq!(patch.salary, patch.regular_pay + patch.overtime_pay);
}
