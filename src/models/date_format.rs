//! Lenient date and timestamp parsing for API payloads.
//!
//! Upstream HR data mixes plain dates (`2025-05-10`), wall-clock timestamps
//! (`2025-05-10T09:00:00`) and instants carrying an offset
//! (`2025-05-09T18:30:00.000Z`). An instant only names a calendar day once
//! the local UTC offset is known, so [`DateInput`] keeps it intact until then.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, de};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A date or timestamp as received from upstream.
///
/// # Example
///
/// ```
/// use attendance_engine::models::date_format::DateInput;
/// use chrono::NaiveDate;
///
/// let input = DateInput::parse("2025-05-09T18:30:00.000Z").unwrap();
/// assert_eq!(input.local_date(330), NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
/// assert_eq!(input.local_date(0), NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateInput {
    /// A plain calendar date.
    Date(NaiveDate),
    /// A wall-clock timestamp without offset.
    Local(NaiveDateTime),
    /// An instant with its UTC offset.
    Instant(DateTime<FixedOffset>),
}

impl DateInput {
    /// Parses a plain date, an RFC 3339 instant or a naive timestamp.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Some(DateInput::Date(date));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            return Some(DateInput::Instant(instant));
        }
        NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT)
            .ok()
            .map(DateInput::Local)
    }

    /// Returns the calendar day at the given UTC offset.
    ///
    /// Plain dates and wall-clock timestamps keep the date as written;
    /// instants are shifted to the offset first.
    pub fn local_date(&self, utc_offset_minutes: i32) -> NaiveDate {
        match self {
            DateInput::Date(date) => *date,
            DateInput::Local(datetime) => datetime.date(),
            DateInput::Instant(instant) => {
                (instant.naive_utc() + Duration::minutes(i64::from(utc_offset_minutes))).date()
            }
        }
    }

    /// Returns the date as written, ignoring any offset.
    pub fn written_date(&self) -> NaiveDate {
        match self {
            DateInput::Date(date) => *date,
            DateInput::Local(datetime) => datetime.date(),
            DateInput::Instant(instant) => instant.date_naive(),
        }
    }

    /// Returns the wall-clock time as written. Plain dates have none.
    fn wall_clock(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Date(_) => None,
            DateInput::Local(datetime) => Some(*datetime),
            DateInput::Instant(instant) => Some(instant.naive_local()),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl TryFrom<String> for DateInput {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateInput::parse(&value).ok_or_else(|| format!("invalid date: {}", value))
    }
}

impl From<DateInput> for String {
    fn from(input: DateInput) -> Self {
        match input {
            DateInput::Date(date) => date.format(DATE_FORMAT).to_string(),
            DateInput::Local(datetime) => datetime.format(NAIVE_DATETIME_FORMAT).to_string(),
            DateInput::Instant(instant) => instant.to_rfc3339(),
        }
    }
}

/// Parses a plain date or a timestamp into the date as written.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DateInput::parse(value).map(|input| input.written_date())
}

/// Minutes from `start` to `end`, both punch timestamps.
///
/// Two instants are compared as instants, so differing offsets are
/// accounted for. Otherwise the wall-clock times as written are compared.
/// Returns `None` if either side is not a timestamp.
pub fn minutes_between(start: &str, end: &str) -> Option<i64> {
    let start = DateInput::parse(start)?;
    let end = DateInput::parse(end)?;

    let elapsed = match (start, end) {
        (DateInput::Instant(start), DateInput::Instant(end)) => end.signed_duration_since(start),
        (start, end) => end.wall_clock()? - start.wall_clock()?,
    };
    Some(elapsed.num_minutes())
}

/// Serde `deserialize_with` adapter for [`parse_date`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2025-05-10"), Some(date(2025, 5, 10)));
    }

    #[test]
    fn test_parse_offset_datetime_keeps_written_date() {
        assert_eq!(
            parse_date("2025-05-10T00:15:00+05:30"),
            Some(date(2025, 5, 10))
        );
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(parse_date("2025-05-10T09:00:00"), Some(date(2025, 5, 10)));
    }

    #[test]
    fn test_parse_invalid_returns_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_utc_instant_resolves_to_following_local_day_in_ist() {
        let input = DateInput::parse("2025-05-09T18:30:00.000Z").unwrap();
        assert_eq!(input.local_date(330), date(2025, 5, 10));
        assert_eq!(input.local_date(0), date(2025, 5, 9));
    }

    #[test]
    fn test_instant_just_before_local_midnight_stays_on_day() {
        let input = DateInput::parse("2025-05-09T18:29:59Z").unwrap();
        assert_eq!(input.local_date(330), date(2025, 5, 9));
    }

    #[test]
    fn test_negative_offset_moves_to_previous_day() {
        let input = DateInput::parse("2025-05-10T02:00:00Z").unwrap();
        assert_eq!(input.local_date(-300), date(2025, 5, 9));
    }

    #[test]
    fn test_plain_and_naive_inputs_ignore_offset() {
        assert_eq!(
            DateInput::parse("2025-05-10").unwrap().local_date(330),
            date(2025, 5, 10)
        );
        assert_eq!(
            DateInput::parse("2025-05-10T23:00:00").unwrap().local_date(330),
            date(2025, 5, 10)
        );
    }

    #[test]
    fn test_date_input_serde_keeps_original_form() {
        let input: DateInput = serde_json::from_str("\"2025-05-09T18:30:00Z\"").unwrap();
        assert!(matches!(input, DateInput::Instant(_)));
        let json = serde_json::to_string(&DateInput::from(date(2025, 5, 10))).unwrap();
        assert_eq!(json, "\"2025-05-10\"");
        assert!(serde_json::from_str::<DateInput>("\"tenth of May\"").is_err());
    }

    #[test]
    fn test_minutes_between_wall_clock() {
        assert_eq!(
            minutes_between("2025-05-10T09:30:00", "2025-05-10T18:00:00"),
            Some(510)
        );
    }

    #[test]
    fn test_minutes_between_instants_with_different_offsets() {
        // 09:00 IST is 03:30 UTC.
        assert_eq!(
            minutes_between("2025-05-10T09:00:00+05:30", "2025-05-10T12:30:00Z"),
            Some(540)
        );
    }

    #[test]
    fn test_minutes_between_mixed_forms_uses_written_times() {
        assert_eq!(
            minutes_between("2025-05-10T09:00:00+05:30", "2025-05-10T17:00:00"),
            Some(480)
        );
    }

    #[test]
    fn test_minutes_between_rejects_plain_dates() {
        assert_eq!(minutes_between("2025-05-10", "2025-05-10T17:00:00"), None);
    }

    #[test]
    fn test_minutes_between_with_fraction() {
        assert_eq!(
            minutes_between("2025-05-10T09:30:15.250", "2025-05-10T09:45:15.250"),
            Some(15)
        );
    }
}
