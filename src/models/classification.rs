//! Day classification models.
//!
//! This module contains [`DayClassification`], the per-day status code
//! rendered verbatim by report tables and exporters, and [`ClassifiedDay`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status codes that count toward payable days.
pub const PAYABLE_CODES: [&str; 7] = ["P", "H", "CF", "EL", "SL", "CL", "CompOff"];

/// The classification of one calendar day for one employee.
///
/// Serializes as its status code: `""`, `"P"`, `"A"`, `"H"`, `"CF"` or the
/// leave type verbatim.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayClassification;
///
/// assert_eq!(DayClassification::CompOffEarned.code(), "CF");
/// assert_eq!(DayClassification::from_code("EL"), DayClassification::Leave("EL".to_string()));
/// assert_eq!(DayClassification::from_code(""), DayClassification::Unclassified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DayClassification {
    /// The day is after the report date and has not been evaluated.
    Unclassified,
    /// Attended a working day.
    Present,
    /// Did not attend a working day.
    Absent,
    /// Holiday, not worked.
    Holiday,
    /// Worked a full day on a holiday; earns comp-off.
    CompOffEarned,
    /// On approved leave of the given type.
    Leave(String),
}

impl DayClassification {
    /// Returns the status code for this classification.
    pub fn code(&self) -> &str {
        match self {
            DayClassification::Unclassified => "",
            DayClassification::Present => "P",
            DayClassification::Absent => "A",
            DayClassification::Holiday => "H",
            DayClassification::CompOffEarned => "CF",
            DayClassification::Leave(leave_type) => leave_type,
        }
    }

    /// Parses a status code. Unknown codes are treated as leave types.
    ///
    /// A leave type that reuses a reserved code (`"P"`, `"H"`, ...) maps to
    /// that status, so every classification survives a serde round trip.
    pub fn from_code(code: &str) -> Self {
        match code {
            "" => DayClassification::Unclassified,
            "P" => DayClassification::Present,
            "A" => DayClassification::Absent,
            "H" => DayClassification::Holiday,
            "CF" => DayClassification::CompOffEarned,
            other => DayClassification::Leave(other.to_string()),
        }
    }

    /// Returns true if the day counts toward salary.
    ///
    /// Decided by status code against [`PAYABLE_CODES`].
    pub fn is_payable(&self) -> bool {
        PAYABLE_CODES.contains(&self.code())
    }

    /// Returns true if this is a leave classification.
    pub fn is_leave(&self) -> bool {
        matches!(self, DayClassification::Leave(_))
    }
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<DayClassification> for String {
    fn from(classification: DayClassification) -> Self {
        classification.code().to_string()
    }
}

impl From<String> for DayClassification {
    fn from(code: String) -> Self {
        DayClassification::from_code(&code)
    }
}

/// A calendar day together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// The day's classification.
    pub classification: DayClassification,
}

impl ClassifiedDay {
    /// Returns the status code of the classification.
    pub fn code(&self) -> &str {
        self.classification.code()
    }
}
