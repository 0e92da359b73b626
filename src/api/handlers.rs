//! HTTP request handlers for the Attendance Ledger & Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::ledger::LedgerFilter;
use crate::models::ActorContext;
use crate::payroll::compute_payroll;

use super::request::{Actor, ImportRequest, ListQuery, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, ImportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/clock-in", post(clock_in_handler))
        .route("/attendance/clock-out", post(clock_out_handler))
        .route("/attendance/me", get(my_attendance_handler))
        .route("/attendance", get(list_attendance_handler))
        .route("/attendance/import", post(import_handler))
        .route("/payroll/calculate", post(payroll_handler))
        .with_state(state)
}

/// Unwraps a JSON body, converting axum's rejection into the API error shape.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Rejects actors whose role is not permitted company-wide operations.
fn require_privileged(actor: &ActorContext) -> Result<(), ApiErrorResponse> {
    if actor.role.is_privileged() {
        Ok(())
    } else {
        Err(EngineError::Forbidden {
            role: actor.role.to_string(),
        }
        .into())
    }
}

/// Handler for POST /attendance/clock-in.
async fn clock_in_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let record = state.writer().clock_in(&actor).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Clock-in rejected");
    })?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        day = %record.day,
        "Clocked in"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for POST /attendance/clock-out.
async fn clock_out_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let record = state.writer().clock_out(&actor).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Clock-out rejected");
    })?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        day = %record.day,
        work_duration_mins = record.work_duration_mins,
        "Clocked out"
    );
    Ok(Json(record))
}

/// Handler for GET /attendance/me.
async fn my_attendance_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let records = state.writer().history(&actor)?;
    Ok(Json(records))
}

/// Handler for GET /attendance (admin listing).
async fn list_attendance_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    require_privileged(&actor)?;
    let filter = LedgerFilter {
        day: query.day,
        employees: query.employee_id.map(|id| vec![id]),
    };
    let records = state.store().list_for_company(actor.company_id, &filter);
    Ok(Json(records))
}

/// Handler for POST /attendance/import.
async fn import_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_privileged(&actor)?;
    let request = parse_json(payload, correlation_id)?;

    let result = state.pipeline().import(actor.company_id, &request.records);
    info!(
        correlation_id = %correlation_id,
        company_id = %actor.company_id,
        records = request.records.len(),
        success = result.success_count,
        errors = result.errors.len(),
        "Import batch processed"
    );
    Ok(Json(ImportResponse::from(result)))
}

/// Handler for POST /payroll/calculate.
async fn payroll_handler(
    State(state): State<AppState>,
    Actor(actor): Actor,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_privileged(&actor)?;
    let request = parse_json(payload, correlation_id)?;

    let result = compute_payroll(
        request.gross_salary,
        request.payable_days,
        request.total_days_in_period,
        state.rates(),
    )
    .inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll computation rejected");
    })?;
    info!(
        correlation_id = %correlation_id,
        company_id = %actor.company_id,
        payable_days = request.payable_days,
        net_salary = %result.calculated.net_salary,
        "Payroll computed"
    );
    Ok(Json(result))
}
