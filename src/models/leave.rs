//! Leave interval model.
//!
//! A leave interval is one leave request spanning an inclusive range of
//! local calendar days. Only approved intervals take part in day
//! classification. [`LeaveRecord`] is the form received from upstream, whose
//! dates may be instants that still need the calendar's UTC offset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::HolidayCalendar;
use super::date_format::DateInput;

/// Status value that makes a leave interval count during classification.
pub const APPROVED_STATUS: &str = "Approved";

/// Status value of a leave request still awaiting a decision.
pub const PENDING_STATUS: &str = "Pending";

/// Represents a leave request for one employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let leave = LeaveInterval {
///     start_date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
///     leave_type: "EL".to_string(),
///     status: "Approved".to_string(),
/// };
///
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()));
/// assert!(!leave.covers(NaiveDate::from_ymd_opt(2025, 5, 13).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInterval {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The leave type code, reported verbatim (e.g. "EL", "SL", "CL", "CompOff").
    pub leave_type: String,
    /// The workflow status (e.g. "Approved", "Pending", "Rejected").
    pub status: String,
}

impl LeaveInterval {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED_STATUS
    }

    /// Returns true if the request is still awaiting approval.
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_STATUS
    }

    /// Checks if `date` falls within the interval, inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Checks if the interval shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && from <= self.end_date
    }

    /// Validates that the interval does not end before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidLeave {
                leave_type: self.leave_type.clone(),
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }
}

/// A leave request as received from upstream.
///
/// Upstream stores local-midnight leave dates as UTC instants, so
/// `2025-05-09T18:30:00.000Z` is May 10 on a +05:30 calendar. Plain dates are
/// taken as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    /// First day of leave (inclusive).
    pub start_date: DateInput,
    /// Last day of leave (inclusive).
    pub end_date: DateInput,
    /// The leave type code.
    pub leave_type: String,
    /// The workflow status.
    pub status: String,
}

impl LeaveRecord {
    /// Resolves the record to local calendar days of `calendar`.
    pub fn resolve(&self, calendar: &HolidayCalendar) -> LeaveInterval {
        LeaveInterval {
            start_date: self.start_date.local_date(calendar.utc_offset_minutes),
            end_date: self.end_date.local_date(calendar.utc_offset_minutes),
            leave_type: self.leave_type.clone(),
            status: self.status.clone(),
        }
    }
}

impl From<LeaveInterval> for LeaveRecord {
    fn from(leave: LeaveInterval) -> Self {
        Self {
            start_date: leave.start_date.into(),
            end_date: leave.end_date.into(),
            leave_type: leave.leave_type,
            status: leave.status,
        }
    }
}

/// Resolves upstream leave records against `calendar`, keeping input order.
pub fn resolve_leaves(records: &[LeaveRecord], calendar: &HolidayCalendar) -> Vec<LeaveInterval> {
    records.iter().map(|record| record.resolve(calendar)).collect()
}
