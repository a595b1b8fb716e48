//! Month aggregation.
//!
//! Counts derived from a month of [`ClassifiedDay`]s: payable days, per-status
//! counts, the [`MonthSummary`] shown on report pages and the export rows
//! handed to Excel/PDF renderers.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    ClassifiedDay, DailyHours, DayClassification, HolidayCalendar, LeaveCount, LeaveInterval,
    MonthSummary, StatusCount,
};

use super::{HolidayKind, holiday_kind, is_holiday, is_week_off};

/// Counts days with the given status code on or before `as_of`.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::count_by_status;
/// use attendance_engine::models::{ClassifiedDay, DayClassification};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
/// let days = vec![
///     ClassifiedDay { date: d(1), classification: DayClassification::Present },
///     ClassifiedDay { date: d(2), classification: DayClassification::Absent },
///     ClassifiedDay { date: d(3), classification: DayClassification::Present },
/// ];
/// assert_eq!(count_by_status(&days, "P", d(3)), 2);
/// assert_eq!(count_by_status(&days, "P", d(2)), 1);
/// ```
pub fn count_by_status(days: &[ClassifiedDay], code: &str, as_of: NaiveDate) -> usize {
    days.iter()
        .filter(|day| day.date <= as_of && day.code() == code)
        .count()
}

/// Counts payable days on or before `today`.
///
/// The payable set is `P`, `H`, `CF`, `EL`, `SL`, `CL` and `CompOff`. Future
/// days are excluded by date as well as by their empty classification.
pub fn count_payable_days(days: &[ClassifiedDay], today: NaiveDate) -> usize {
    days.iter()
        .filter(|day| day.date <= today && day.classification.is_payable())
        .count()
}

/// Builds the month summary for one employee.
///
/// # Arguments
///
/// * `days` - The classified month, one entry per day
/// * `today` - The report date
/// * `leaves` - The employee's leave intervals (for the pending count)
/// * `calendar` - The holiday calendar
/// * `hours` - Per-day worked hours
pub fn summarize_month(
    days: &[ClassifiedDay],
    today: NaiveDate,
    leaves: &[LeaveInterval],
    calendar: &HolidayCalendar,
    hours: &[DailyHours],
) -> MonthSummary {
    let count = |classification: DayClassification| {
        count_by_status(days, classification.code(), today)
    };

    let leave_types: BTreeSet<&str> = days
        .iter()
        .filter(|day| day.classification.is_leave())
        .map(ClassifiedDay::code)
        .collect();
    let leave_counts = leave_types
        .into_iter()
        .map(|leave_type| LeaveCount {
            leave_type: leave_type.to_string(),
            days: count_by_status(days, leave_type, today),
        })
        .collect();

    let elapsed = move || days.iter().filter(move |day| day.date <= today);

    let pending_leaves = match (days.first(), days.last()) {
        (Some(first), Some(last)) => leaves
            .iter()
            .filter(|leave| leave.is_pending() && leave.overlaps(first.date, last.date))
            .count(),
        _ => 0,
    };

    let absent = count(DayClassification::Absent);

    MonthSummary {
        present: count(DayClassification::Present),
        absent,
        holidays: count(DayClassification::Holiday),
        comp_off_earned: count(DayClassification::CompOffEarned),
        leave_counts,
        payable_days: count_payable_days(days, today),
        lop_days: absent,
        week_offs: elapsed().filter(|day| is_week_off(day.date)).count(),
        government_holidays: elapsed()
            .filter(|day| {
                matches!(
                    holiday_kind(day.date, calendar),
                    Some(HolidayKind::Listed { .. })
                )
            })
            .count(),
        working_days: days
            .iter()
            .filter(|day| !is_holiday(day.date, calendar))
            .count(),
        pending_leaves,
        worked_hours: hours.iter().map(|h| h.worked_hours).sum::<Decimal>(),
    }
}

/// Produces `{label, count}` rows for exporters.
///
/// Rows are always emitted in the same order: Present, Absent, Holiday,
/// Comp Off, one row per leave type, Payable Days, LOP, Week Offs.
pub fn export_rows(summary: &MonthSummary) -> Vec<StatusCount> {
    let mut rows = vec![
        StatusCount::new("Present", summary.present),
        StatusCount::new("Absent", summary.absent),
        StatusCount::new("Holiday", summary.holidays),
        StatusCount::new("Comp Off", summary.comp_off_earned),
    ];
    rows.extend(
        summary
            .leave_counts
            .iter()
            .map(|leave| StatusCount::new(leave.leave_type.clone(), leave.days)),
    );
    rows.push(StatusCount::new("Payable Days", summary.payable_days));
    rows.push(StatusCount::new("LOP", summary.lop_days));
    rows.push(StatusCount::new("Week Offs", summary.week_offs));
    rows
}
