//! Month report models.
//!
//! This module contains the [`MonthReport`] type and its associated structures
//! that capture everything a report page or exporter needs for one employee
//! and one month: classified days, aggregate counts, export rows and hours.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClassifiedDay;

/// A `{label, count}` row consumed by Excel/PDF exporters.
///
/// # Example
///
/// ```
/// use attendance_engine::models::StatusCount;
///
/// let row = StatusCount::new("Present", 21);
/// assert_eq!(row.label, "Present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The row label.
    pub label: String,
    /// The number of days.
    pub count: usize,
}

impl StatusCount {
    /// Creates a new export row.
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Days classified as one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCount {
    /// The leave type code.
    pub leave_type: String,
    /// The number of days on that leave up to the report date.
    pub days: usize,
}

/// Aggregate counts for one employee's month, up to the report date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    /// Days classified `P`.
    pub present: usize,
    /// Days classified `A`.
    pub absent: usize,
    /// Days classified `H`.
    pub holidays: usize,
    /// Days classified `CF`.
    pub comp_off_earned: usize,
    /// Days on each leave type, sorted by leave type.
    pub leave_counts: Vec<LeaveCount>,
    /// Days counting toward salary.
    pub payable_days: usize,
    /// Loss-of-pay days.
    pub lop_days: usize,
    /// Sundays and 2nd/4th Saturdays.
    pub week_offs: usize,
    /// Listed government holidays.
    pub government_holidays: usize,
    /// Days in the whole month that are not holidays by policy.
    pub working_days: usize,
    /// Leave requests still awaiting approval that touch the month.
    pub pending_leaves: usize,
    /// Total hours between punch-in and punch-out across the month.
    pub worked_hours: Decimal,
}

/// Worked hours for one day with a complete punch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHours {
    /// The attendance date.
    pub date: NaiveDate,
    /// Hours between punch-in and punch-out.
    pub worked_hours: Decimal,
}

/// The complete classification report for one employee and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    /// Unique identifier for this report.
    pub id: Uuid,
    /// The employee the report is for.
    pub employee_id: String,
    /// The report year.
    pub year: i32,
    /// The report month (1-based).
    pub month: u32,
    /// The date treated as "today".
    pub as_of: NaiveDate,
    /// When the report was produced.
    pub calculated_at: DateTime<Utc>,
    /// Name of the holiday calendar used.
    pub calendar: String,
    /// One entry per calendar day of the month, in date order.
    pub days: Vec<ClassifiedDay>,
    /// Aggregate counts.
    pub summary: MonthSummary,
    /// Rows for exporters.
    pub export_rows: Vec<StatusCount>,
    /// Per-day worked hours for the hourly report.
    pub hours: Vec<DailyHours>,
}
