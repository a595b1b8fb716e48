//! Punch record model.
//!
//! A punch record is the raw attendance entry for one employee on one day.
//! Every field is optional and empty strings count as missing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date_format;

/// Status value recorded by the punch system for an attended day.
pub const PRESENT_STATUS: &str = "Present";

/// Raw punch-in/punch-out record for one day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PunchRecord;
///
/// let punch = PunchRecord {
///     status: Some("Present".to_string()),
///     punch_in_time: Some("2025-05-17T09:02:00".to_string()),
///     punch_out_time: Some(String::new()),
/// };
///
/// assert!(punch.has_punch_in());
/// assert!(!punch.has_punch_out());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRecord {
    /// The recorded status, typically "Present".
    #[serde(default)]
    pub status: Option<String>,
    /// ISO timestamp of the punch-in.
    #[serde(default)]
    pub punch_in_time: Option<String>,
    /// ISO timestamp of the punch-out.
    #[serde(default)]
    pub punch_out_time: Option<String>,
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

impl PunchRecord {
    /// Returns true if the record's status is exactly "Present".
    pub fn is_present_status(&self) -> bool {
        self.status.as_deref() == Some(PRESENT_STATUS)
    }

    /// Returns true if a non-empty punch-in time is recorded.
    pub fn has_punch_in(&self) -> bool {
        is_set(&self.punch_in_time)
    }

    /// Returns true if a non-empty punch-out time is recorded.
    pub fn has_punch_out(&self) -> bool {
        is_set(&self.punch_out_time)
    }

    /// Returns true if both punch-in and punch-out are recorded.
    pub fn has_both_punches(&self) -> bool {
        self.has_punch_in() && self.has_punch_out()
    }

    /// Calculates the hours between punch-in and punch-out.
    ///
    /// Returns `None` when either punch is missing or unparseable, or when
    /// the punch-out precedes the punch-in. The result is rounded to two
    /// decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::PunchRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let punch = PunchRecord {
    ///     status: Some("Present".to_string()),
    ///     punch_in_time: Some("2025-05-16T09:00:00".to_string()),
    ///     punch_out_time: Some("2025-05-16T17:30:00".to_string()),
    /// };
    /// assert_eq!(punch.worked_hours(), Some(Decimal::new(850, 2)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        let minutes = date_format::minutes_between(
            self.punch_in_time.as_deref()?,
            self.punch_out_time.as_deref()?,
        )?;
        if minutes < 0 {
            return None;
        }

        Some((Decimal::from(minutes) / Decimal::from(60)).round_dp(2))
    }
}

/// A punch record attached to the date it was recorded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedPunch {
    /// The attendance date.
    #[serde(deserialize_with = "date_format::deserialize")]
    pub date: NaiveDate,
    /// The punch data for that date.
    #[serde(flatten)]
    pub record: PunchRecord,
}
