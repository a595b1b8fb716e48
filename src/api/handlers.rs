//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::build_month_report;
use crate::error::EngineError;
use crate::models::{HolidayEntry, resolve_leaves};

use super::request::{BatchReportRequest, HolidaysQuery, MonthReportRequest};
use super::response::{ApiError, ApiErrorResponse, BatchReportResponse, HolidaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/month", post(month_report_handler))
        .route("/attendance/batch", post(batch_report_handler))
        .route("/holidays", get(holidays_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Classification failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Handler for POST /attendance/month.
///
/// Classifies one employee's month and returns the full report.
async fn month_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let as_of = resolve_as_of(request.as_of);
    let start_time = Instant::now();
    let leaves = resolve_leaves(&request.leaves, state.calendar());

    match build_month_report(
        &request.employee_id,
        request.year,
        request.month,
        as_of,
        &leaves,
        &request.punches,
        state.calendar(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                payable_days = report.summary.payable_days,
                duration_us = start_time.elapsed().as_micros(),
                "Month report completed"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /attendance/batch.
///
/// Classifies the same month for every employee in the request. The first
/// invalid employee fails the whole batch.
async fn batch_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let as_of = resolve_as_of(request.as_of);
    let start_time = Instant::now();
    let mut reports = Vec::with_capacity(request.employees.len());

    for employee in &request.employees {
        let leaves = resolve_leaves(&employee.leaves, state.calendar());
        match build_month_report(
            &employee.employee_id,
            request.year,
            request.month,
            as_of,
            &leaves,
            &employee.punches,
            state.calendar(),
        ) {
            Ok(report) => reports.push(report),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %employee.employee_id,
                    "Batch aborted on invalid employee data"
                );
                return error_response(correlation_id, err);
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        employees = reports.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Batch report completed"
    );
    json_response(StatusCode::OK, BatchReportResponse { reports })
}

/// Handler for GET /holidays.
///
/// Lists the configured government holidays, optionally for one year.
async fn holidays_handler(
    State(state): State<AppState>,
    Query(query): Query<HolidaysQuery>,
) -> impl IntoResponse {
    let calendar = state.calendar();
    let holidays: Vec<HolidayEntry> = match query.year {
        Some(year) => state
            .config()
            .holidays_for_year(year)
            .into_iter()
            .cloned()
            .collect(),
        None => calendar.entries.clone(),
    };

    json_response(
        StatusCode::OK,
        HolidaysResponse {
            name: calendar.name.clone(),
            utc_offset_minutes: calendar.utc_offset_minutes,
            holidays,
        },
    )
}
