//! Month report assembly.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{DatedPunch, HolidayCalendar, LeaveInterval, MonthReport};

use super::{classify_month, daily_hours, export_rows, month_bounds, summarize_month};

/// Classifies a month for one employee and assembles the full report.
///
/// # Errors
///
/// Propagates [`classify_month`] errors: invalid month, reversed leave
/// interval or duplicate punch dates.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::build_month_report;
/// use attendance_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new("empty", vec![]);
/// let today = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
/// let report = build_month_report("emp_001", 2025, 5, today, &[], &[], &calendar).unwrap();
///
/// assert_eq!(report.days.len(), 31);
/// // Sundays and 2nd/4th Saturdays of May 2025
/// assert_eq!(report.summary.week_offs, 6);
/// ```
pub fn build_month_report(
    employee_id: &str,
    year: i32,
    month: u32,
    today: NaiveDate,
    leaves: &[LeaveInterval],
    punches: &[DatedPunch],
    calendar: &HolidayCalendar,
) -> EngineResult<MonthReport> {
    let (first, last) = month_bounds(year, month)?;
    let days = classify_month(year, month, today, leaves, punches, calendar)?;
    let hours = daily_hours(punches, first, last);
    let summary = summarize_month(&days, today, leaves, calendar, &hours);
    let rows = export_rows(&summary);

    info!(
        employee_id,
        year,
        month,
        payable_days = summary.payable_days,
        lop_days = summary.lop_days,
        "Month report built"
    );

    Ok(MonthReport {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        year,
        month,
        as_of: today,
        calculated_at: Utc::now(),
        calendar: calendar.name.clone(),
        days,
        summary,
        export_rows: rows,
        hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{DayClassification, PunchRecord};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn full_punch(d: u32) -> DatedPunch {
        DatedPunch {
            date: date(d),
            record: PunchRecord {
                status: Some("Present".to_string()),
                punch_in_time: Some(format!("2025-05-{:02}T09:30:00", d)),
                punch_out_time: Some(format!("2025-05-{:02}T18:00:00", d)),
            },
        }
    }

    /// May 2025: EL on 10-12, full punches on the 3rd Saturday (17th) and on
    /// Sunday the 18th.
    #[test]
    fn test_may_2025_end_to_end() {
        let leaves = vec![LeaveInterval {
            start_date: date(10),
            end_date: date(12),
            leave_type: "EL".to_string(),
            status: "Approved".to_string(),
        }];
        let punches = vec![full_punch(17), full_punch(18)];
        let calendar = HolidayCalendar::new("empty", vec![]);

        let report =
            build_month_report("emp_001", 2025, 5, date(31), &leaves, &punches, &calendar).unwrap();

        let code = |d: u32| report.days[(d - 1) as usize].classification.clone();
        assert_eq!(code(10), DayClassification::Leave("EL".to_string()));
        assert_eq!(code(11), DayClassification::Leave("EL".to_string()));
        assert_eq!(code(12), DayClassification::Leave("EL".to_string()));
        assert_eq!(code(17), DayClassification::Present);
        assert_eq!(code(18), DayClassification::CompOffEarned);

        assert_eq!(report.summary.present, 1);
        assert_eq!(report.summary.comp_off_earned, 1);
        assert_eq!(report.hours.len(), 2);
        assert_eq!(report.employee_id, "emp_001");
        assert_eq!(report.as_of, date(31));
        assert_eq!(report.calendar, "empty");
        assert_eq!(
            report.export_rows.last().map(|row| row.label.as_str()),
            Some("Week Offs")
        );
    }

    #[test]
    fn test_reserved_code_leave_counts_once_and_as_payable() {
        let leaves = vec![LeaveInterval {
            start_date: date(19),
            end_date: date(19),
            leave_type: "P".to_string(),
            status: "Approved".to_string(),
        }];
        let calendar = HolidayCalendar::new("empty", vec![]);

        let report =
            build_month_report("emp_001", 2025, 5, date(19), &leaves, &[], &calendar).unwrap();

        assert_eq!(report.days[18].classification, DayClassification::Present);
        assert_eq!(report.summary.present, 1);
        // Sundays 4, 11, 18, the 2nd Saturday and the leave day.
        assert_eq!(report.summary.payable_days, 5);
        assert!(report.summary.leave_counts.is_empty());
    }

    #[test]
    fn test_invalid_month_is_reported() {
        let calendar = HolidayCalendar::new("empty", vec![]);
        let result = build_month_report("emp_001", 2025, 0, date(31), &[], &[], &calendar);
        assert!(matches!(result, Err(EngineError::InvalidMonth { .. })));
    }
}
