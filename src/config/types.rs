//! Configuration types for the holiday calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::HolidayEntry;

/// Metadata about the holiday calendar, from `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar.
    pub name: String,
    /// Offset of the deployment's local time from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Optional free-form description (e.g. the issuing authority).
    #[serde(default)]
    pub description: Option<String>,
}

/// One year's holiday list, from `holidays/<year>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year the list applies to.
    pub year: i32,
    /// The listed holidays.
    pub holidays: Vec<HolidayEntry>,
}
