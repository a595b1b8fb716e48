//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod classification;
pub mod date_format;
mod holiday;
mod leave;
mod punch;
mod report;

pub use classification::{ClassifiedDay, DayClassification, PAYABLE_CODES};
pub use holiday::{HolidayCalendar, HolidayEntry};
pub use leave::{APPROVED_STATUS, LeaveInterval, LeaveRecord, PENDING_STATUS, resolve_leaves};
pub use punch::{DatedPunch, PRESENT_STATUS, PunchRecord};
pub use report::{DailyHours, LeaveCount, MonthReport, MonthSummary, StatusCount};
