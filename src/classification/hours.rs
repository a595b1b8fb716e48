//! Worked hours for the hourly attendance report.

use chrono::NaiveDate;

use crate::models::{DailyHours, DatedPunch};

/// Collects worked hours for each punch inside `[from, to]`.
///
/// Days without a complete, well-ordered punch pair are skipped. The result
/// is sorted by date.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::daily_hours;
/// use attendance_engine::models::{DatedPunch, PunchRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2025, 5, 16).unwrap();
/// let punches = vec![DatedPunch {
///     date: day,
///     record: PunchRecord {
///         status: Some("Present".to_string()),
///         punch_in_time: Some("2025-05-16T09:00:00".to_string()),
///         punch_out_time: Some("2025-05-16T17:45:00".to_string()),
///     },
/// }];
///
/// let hours = daily_hours(&punches, day, day);
/// assert_eq!(hours[0].worked_hours, Decimal::new(875, 2));
/// ```
pub fn daily_hours(punches: &[DatedPunch], from: NaiveDate, to: NaiveDate) -> Vec<DailyHours> {
    let mut hours: Vec<DailyHours> = punches
        .iter()
        .filter(|punch| from <= punch.date && punch.date <= to)
        .filter_map(|punch| {
            punch.record.worked_hours().map(|worked_hours| DailyHours {
                date: punch.date,
                worked_hours,
            })
        })
        .collect();
    hours.sort_by_key(|h| h.date);
    hours
}
