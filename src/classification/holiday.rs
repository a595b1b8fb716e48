//! Holiday predicate.
//!
//! Decides whether a date is a non-working day by policy, independent of any
//! employee's attendance. Three rules apply, first match wins:
//!
//! 1. every Sunday;
//! 2. the 2nd and 4th Saturday of the month;
//! 3. a date listed in the [`HolidayCalendar`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// Which holiday rule a date matched.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::HolidayKind;
///
/// assert!(HolidayKind::Sunday.is_week_off());
/// assert!(!HolidayKind::Listed { description: "Diwali".to_string() }.is_week_off());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HolidayKind {
    /// Every Sunday.
    Sunday,
    /// The 2nd Saturday of the month.
    SecondSaturday,
    /// The 4th Saturday of the month.
    FourthSaturday,
    /// A listed government holiday.
    Listed {
        /// The holiday's description from the calendar.
        description: String,
    },
}

impl HolidayKind {
    /// Returns true for the Saturday/Sunday rules.
    pub fn is_week_off(&self) -> bool {
        !matches!(self, HolidayKind::Listed { .. })
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayKind::Sunday => write!(f, "Sunday"),
            HolidayKind::SecondSaturday => write!(f, "2nd Saturday"),
            HolidayKind::FourthSaturday => write!(f, "4th Saturday"),
            HolidayKind::Listed { description } => write!(f, "{}", description),
        }
    }
}

/// Returns the 1-based occurrence of the date's weekday within its month.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::weekday_occurrence;
/// use chrono::NaiveDate;
///
/// // 2025-05-17 is the third Saturday of May 2025.
/// assert_eq!(weekday_occurrence(NaiveDate::from_ymd_opt(2025, 5, 17).unwrap()), 3);
/// ```
pub fn weekday_occurrence(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Returns true if the date is the 2nd or 4th Saturday of its month.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::is_second_or_fourth_saturday;
/// use chrono::NaiveDate;
///
/// assert!(is_second_or_fourth_saturday(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()));
/// assert!(!is_second_or_fourth_saturday(NaiveDate::from_ymd_opt(2025, 5, 17).unwrap()));
/// ```
pub fn is_second_or_fourth_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat && matches!(weekday_occurrence(date), 2 | 4)
}

/// Returns true if the date is a Sunday or a 2nd/4th Saturday.
pub fn is_week_off(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun || is_second_or_fourth_saturday(date)
}

/// Determines which holiday rule, if any, the date matches.
///
/// Rules are evaluated in order: Sunday, 2nd/4th Saturday, listed holiday.
/// The listed-holiday lookup uses [`HolidayCalendar::utc_date_key`], so on
/// calendars east of UTC a listed date matches the following local day.
pub fn holiday_kind(date: NaiveDate, calendar: &HolidayCalendar) -> Option<HolidayKind> {
    if date.weekday() == Weekday::Sun {
        return Some(HolidayKind::Sunday);
    }

    if is_second_or_fourth_saturday(date) {
        return Some(if weekday_occurrence(date) == 2 {
            HolidayKind::SecondSaturday
        } else {
            HolidayKind::FourthSaturday
        });
    }

    calendar
        .listed_holiday(date)
        .map(|entry| HolidayKind::Listed {
            description: entry.description.clone(),
        })
}

/// Returns true when the date is a non-working day by policy.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::is_holiday;
/// use attendance_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new("empty", vec![]);
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 5, 18).unwrap(), &calendar)); // Sunday
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2025, 5, 19).unwrap(), &calendar)); // Monday
/// ```
pub fn is_holiday(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    holiday_kind(date, calendar).is_some()
}
