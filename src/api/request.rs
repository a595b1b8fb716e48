//! Request types for the attendance engine API.
//!
//! This module defines the JSON request bodies for the `/attendance/month`
//! and `/attendance/batch` endpoints and the query for `/holidays`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DatedPunch, LeaveRecord};

/// Request body for the `/attendance/month` endpoint.
///
/// Carries one employee's already-fetched leave history and punch records
/// for the month to classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReportRequest {
    /// The employee the data belongs to.
    pub employee_id: String,
    /// The report year.
    pub year: i32,
    /// The report month (1-based).
    pub month: u32,
    /// The date to treat as "today"; defaults to the server's local date.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The employee's leave intervals, in the order received upstream.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// The employee's punch records.
    #[serde(default)]
    pub punches: Vec<DatedPunch>,
}

/// One employee's data within a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendance {
    /// The employee the data belongs to.
    pub employee_id: String,
    /// The employee's leave intervals, in the order received upstream.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// The employee's punch records.
    #[serde(default)]
    pub punches: Vec<DatedPunch>,
}

/// Request body for the `/attendance/batch` endpoint.
///
/// Used by the overall summary page, which classifies every employee for
/// the same month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReportRequest {
    /// The report year.
    pub year: i32,
    /// The report month (1-based).
    pub month: u32,
    /// The date to treat as "today"; defaults to the server's local date.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The employees to classify.
    pub employees: Vec<EmployeeAttendance>,
}

/// Query parameters for `/holidays`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysQuery {
    /// Restrict the listing to one year.
    pub year: Option<i32>,
}
