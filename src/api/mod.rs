//! HTTP API module for the attendance engine.
//!
//! This module provides the REST API endpoints that report pages post
//! already-fetched leave and punch data to.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchReportRequest, EmployeeAttendance, HolidaysQuery, MonthReportRequest};
pub use response::{ApiError, ApiErrorResponse, BatchReportResponse, HolidaysResponse};
pub use state::AppState;
