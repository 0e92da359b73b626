//! Core data models for the Attendance Ledger & Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod batch;
mod ids;
mod leave;
mod payroll;

pub use attendance::{
    utc_day, AttendanceRecord, AttendanceSource, AttendanceStatus,
};
pub use batch::{BatchResult, ImportErrorKind, ImportFailure, ImportRecord};
pub use ids::{ActorContext, CompanyId, EmployeeId, LeaveId, Role};
pub use leave::{LeaveRequest, LeaveStatus, SyncInfo};
pub use payroll::{EarnedPay, PayrollResult, SalaryStructure};
