//! Month classification.
//!
//! Produces one [`ClassifiedDay`] per calendar day of a month for one
//! employee, after validating the month and the leave intervals.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClassifiedDay, DatedPunch, HolidayCalendar, LeaveInterval, PunchRecord};

use super::classify_day;

/// Returns the first and last day of a month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when the month is not 1..=12 or the
/// year is outside the supported date range.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(2024, 2).unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(month_bounds(2024, 13).is_err());
/// ```
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;

    Ok((first, last))
}

/// Indexes punch records by date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPunch`] if a date appears twice.
pub fn index_punches(punches: &[DatedPunch]) -> EngineResult<HashMap<NaiveDate, &PunchRecord>> {
    let mut by_date = HashMap::with_capacity(punches.len());
    for punch in punches {
        if by_date.insert(punch.date, &punch.record).is_some() {
            return Err(EngineError::InvalidPunch {
                date: punch.date,
                message: "more than one punch record for this date".to_string(),
            });
        }
    }
    Ok(by_date)
}

/// Classifies every day of a month for one employee.
///
/// Punch records for dates outside the month are ignored. Leave intervals
/// are validated first, so a reversed interval fails the whole month rather
/// than silently never matching.
///
/// # Arguments
///
/// * `year`, `month` - The month to classify (month is 1-based)
/// * `today` - The report date
/// * `leaves` - The employee's leave intervals, in the order received
/// * `punches` - The employee's punch records
/// * `calendar` - The holiday calendar
///
/// # Returns
///
/// One entry per calendar day, in date order.
pub fn classify_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    leaves: &[LeaveInterval],
    punches: &[DatedPunch],
    calendar: &HolidayCalendar,
) -> EngineResult<Vec<ClassifiedDay>> {
    let (first, last) = month_bounds(year, month)?;

    for leave in leaves {
        leave.validate()?;
    }

    let punches_by_date = index_punches(punches)?;

    let days: Vec<ClassifiedDay> = first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| ClassifiedDay {
            date,
            classification: classify_day(
                date,
                today,
                leaves,
                punches_by_date.get(&date).copied(),
                calendar,
            ),
        })
        .collect();

    debug!(
        year,
        month,
        %today,
        days = days.len(),
        leaves = leaves.len(),
        punches = punches.len(),
        "Classified month"
    );

    Ok(days)
}

/// Returns the number of days in a month, or an error for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    month_bounds(year, month).map(|(_, last)| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayClassification;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_punch(day: NaiveDate, punch_out: bool) -> DatedPunch {
        DatedPunch {
            date: day,
            record: PunchRecord {
                status: Some("Present".to_string()),
                punch_in_time: Some(format!("{}T09:00:00", day)),
                punch_out_time: punch_out.then(|| format!("{}T18:00:00", day)),
            },
        }
    }

    fn empty_calendar() -> HolidayCalendar {
        HolidayCalendar::new("empty", vec![])
    }

    #[test]
    fn test_month_bounds_december() {
        let (first, last) = month_bounds(2025, 12).unwrap();
        assert_eq!(first, date(2025, 12, 1));
        assert_eq!(last, date(2025, 12, 31));
    }

    #[test]
    fn test_month_bounds_rejects_zero() {
        match month_bounds(2025, 0) {
            Err(EngineError::InvalidMonth { year, month }) => {
                assert_eq!(year, 2025);
                assert_eq!(month, 0);
            }
            other => panic!("Expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
        assert_eq!(days_in_month(2025, 5).unwrap(), 31);
    }

    #[test]
    fn test_classify_month_returns_one_entry_per_day() {
        let days = classify_month(2025, 2, date(2025, 12, 31), &[], &[], &empty_calendar()).unwrap();
        assert_eq!(days.len(), 28);
        assert_eq!(days.first().unwrap().date, date(2025, 2, 1));
        assert_eq!(days.last().unwrap().date, date(2025, 2, 28));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_classify_month_leaves_future_days_unclassified() {
        let days = classify_month(2025, 5, date(2025, 5, 15), &[], &[], &empty_calendar()).unwrap();
        assert!(days[..15].iter().all(|d| d.classification != DayClassification::Unclassified));
        assert!(days[15..].iter().all(|d| d.classification == DayClassification::Unclassified));
    }

    #[test]
    fn test_classify_month_uses_punch_for_matching_date() {
        let punches = vec![dated_punch(date(2025, 5, 19), true)];
        let days = classify_month(2025, 5, date(2025, 5, 31), &[], &punches, &empty_calendar()).unwrap();
        assert_eq!(days[18].classification, DayClassification::Present);
        assert_eq!(days[19].classification, DayClassification::Absent);
    }

    #[test]
    fn test_classify_month_ignores_punches_outside_month() {
        let punches = vec![dated_punch(date(2025, 6, 2), true)];
        let days = classify_month(2025, 5, date(2025, 6, 30), &[], &punches, &empty_calendar()).unwrap();
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn test_classify_month_rejects_reversed_leave() {
        let leaves = vec![LeaveInterval {
            start_date: date(2025, 5, 12),
            end_date: date(2025, 5, 10),
            leave_type: "EL".to_string(),
            status: "Approved".to_string(),
        }];
        let result = classify_month(2025, 5, date(2025, 5, 31), &leaves, &[], &empty_calendar());
        assert!(matches!(result, Err(EngineError::InvalidLeave { .. })));
    }

    #[test]
    fn test_classify_month_rejects_duplicate_punch_dates() {
        let punches = vec![
            dated_punch(date(2025, 5, 19), true),
            dated_punch(date(2025, 5, 19), false),
        ];
        let result = classify_month(2025, 5, date(2025, 5, 31), &[], &punches, &empty_calendar());
        assert!(matches!(result, Err(EngineError::InvalidPunch { .. })));
    }

    #[test]
    fn test_classify_month_rejects_invalid_month() {
        let result = classify_month(2025, 13, date(2025, 5, 31), &[], &[], &empty_calendar());
        assert!(matches!(result, Err(EngineError::InvalidMonth { .. })));
    }
}
