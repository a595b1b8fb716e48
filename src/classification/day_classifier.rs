//! Attendance day classification.
//!
//! Classifies one calendar day for one employee. Rules are applied in a fixed
//! order and the first match wins:
//!
//! 1. days after the report date are left unclassified;
//! 2. an approved leave covering the day yields its leave type as the code;
//! 3. a holiday yields `CF` when fully punched, otherwise `H`;
//! 4. a working day yields `P` or `A` from the punch record.

use chrono::NaiveDate;
use tracing::trace;

use crate::models::{DayClassification, HolidayCalendar, LeaveInterval, PunchRecord};

use super::is_holiday;

/// Finds the first approved leave, in input order, that covers `date`.
///
/// Overlapping approved leaves are not deduplicated; whichever appears first
/// in `leaves` wins.
pub fn find_approved_leave(date: NaiveDate, leaves: &[LeaveInterval]) -> Option<&LeaveInterval> {
    leaves
        .iter()
        .find(|leave| leave.is_approved() && leave.covers(date))
}

/// Classifies a single day.
///
/// # Arguments
///
/// * `date` - The calendar day being classified
/// * `today` - The report date; later days are not evaluated
/// * `leaves` - The employee's leave intervals, in the order received
/// * `punch` - The employee's punch record for `date`, if any
/// * `calendar` - The holiday calendar
///
/// # Example
///
/// ```
/// use attendance_engine::classification::classify_day;
/// use attendance_engine::models::{DayClassification, HolidayCalendar, PunchRecord};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new("empty", vec![]);
/// let today = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
/// let punch = PunchRecord {
///     status: Some("Present".to_string()),
///     punch_in_time: Some("2025-05-18T09:00:00".to_string()),
///     punch_out_time: Some("2025-05-18T13:00:00".to_string()),
/// };
///
/// // Worked a full Sunday.
/// let sunday = NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
/// assert_eq!(
///     classify_day(sunday, today, &[], Some(&punch), &calendar),
///     DayClassification::CompOffEarned
/// );
/// ```
pub fn classify_day(
    date: NaiveDate,
    today: NaiveDate,
    leaves: &[LeaveInterval],
    punch: Option<&PunchRecord>,
    calendar: &HolidayCalendar,
) -> DayClassification {
    if date > today {
        return DayClassification::Unclassified;
    }

    if let Some(leave) = find_approved_leave(date, leaves) {
        trace!(%date, leave_type = %leave.leave_type, "Day covered by approved leave");
        return DayClassification::from_code(&leave.leave_type);
    }

    if is_holiday(date, calendar) {
        return if punch.is_some_and(PunchRecord::has_both_punches) {
            DayClassification::CompOffEarned
        } else {
            DayClassification::Holiday
        };
    }

    let attended = punch.is_some_and(|p| {
        p.is_present_status() && p.has_punch_in() && (p.has_punch_out() || date == today)
    });

    if attended {
        DayClassification::Present
    } else {
        DayClassification::Absent
    }
}
