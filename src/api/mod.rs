//! HTTP API module for the Attendance Ledger & Payroll Engine.
//!
//! This module provides the REST endpoints for clock events, attendance
//! listings, bulk import and payroll computation. Authentication happens
//! upstream; the actor identity arrives in gateway-set headers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{Actor, ImportRequest, ListQuery, PayrollRequest};
pub use response::{ApiError, ImportResponse};
pub use state::AppState;
