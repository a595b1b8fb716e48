//! Attendance classification engine for HR reports.
//!
//! This crate classifies each calendar day of an employee's month as Present,
//! Absent, Holiday, Comp-off or a leave type, from approved leave intervals,
//! a government holiday calendar and the day's punch record, and derives the
//! payable-day, LOP and per-status counts shown on report pages.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
