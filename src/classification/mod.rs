//! Attendance classification logic.
//!
//! This module contains the holiday predicate, the per-day classifier, month
//! classification, payable-day and per-status aggregation, the worked hours
//! used by the hourly report, and assembly of the month report.

mod aggregation;
mod day_classifier;
mod holiday;
mod hours;
mod month;
mod report;

pub use aggregation::{count_by_status, count_payable_days, export_rows, summarize_month};
pub use day_classifier::{classify_day, find_approved_leave};
pub use holiday::{
    HolidayKind, holiday_kind, is_holiday, is_second_or_fourth_saturday, is_week_off,
    weekday_occurrence,
};
pub use hours::daily_hours;
pub use month::{classify_month, days_in_month, index_punches, month_bounds};
pub use report::build_month_report;
