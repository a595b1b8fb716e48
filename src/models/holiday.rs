//! Holiday calendar models.
//!
//! This module contains the [`HolidayEntry`] and [`HolidayCalendar`] types.
//! The calendar holds the hand-maintained list of government holidays and
//! the UTC offset of the deployment that maintains it.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A listed government holiday.
///
/// The date is kept as the `YYYY-MM-DD` string it was configured with. An
/// entry whose date is malformed simply never matches.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HolidayEntry;
///
/// let holiday = HolidayEntry {
///     date: "2025-08-15".to_string(),
///     description: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The holiday date as `YYYY-MM-DD`.
    pub date: String,
    /// The name of the holiday.
    pub description: String,
}

/// A list of government holidays plus the offset used to key them.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{HolidayCalendar, HolidayEntry};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar {
///     name: "Head office".to_string(),
///     utc_offset_minutes: 0,
///     entries: vec![HolidayEntry {
///         date: "2025-05-01".to_string(),
///         description: "Labour Day".to_string(),
///     }],
/// };
///
/// assert!(calendar.listed_holiday(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCalendar {
    /// Human-readable name of the calendar.
    pub name: String,
    /// Offset of local time from UTC in minutes (e.g. 330 for +05:30).
    pub utc_offset_minutes: i32,
    /// The listed holidays.
    pub entries: Vec<HolidayEntry>,
}

impl HolidayCalendar {
    /// Creates a calendar keyed at UTC.
    pub fn new(name: impl Into<String>, entries: Vec<HolidayEntry>) -> Self {
        Self {
            name: name.into(),
            utc_offset_minutes: 0,
            entries,
        }
    }

    /// Returns the key a date is looked up under in the holiday list.
    ///
    /// The key is the UTC date of local midnight on `date`. For offsets east
    /// of UTC this is the previous calendar day, so a holiday listed as
    /// `2025-08-15` matches the local date 2025-08-16 on a +05:30 calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::HolidayCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let mut calendar = HolidayCalendar::new("IST", vec![]);
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
    /// assert_eq!(calendar.utc_date_key(date), "2025-08-16");
    ///
    /// calendar.utc_offset_minutes = 330;
    /// assert_eq!(calendar.utc_date_key(date), "2025-08-15");
    /// ```
    pub fn utc_date_key(&self, date: NaiveDate) -> String {
        let local_midnight = date.and_time(NaiveTime::MIN);
        let utc = local_midnight - Duration::minutes(i64::from(self.utc_offset_minutes));
        utc.date().format("%Y-%m-%d").to_string()
    }

    /// Finds the listed holiday that `date` falls on, if any.
    pub fn listed_holiday(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        let key = self.utc_date_key(date);
        self.entries.iter().find(|entry| entry.date == key)
    }
}
