//! Error types for the Attendance Ledger & Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine. Conflict variants
//! ([`EngineError::RecordExists`], [`EngineError::AlreadyClockedOut`]) are the
//! expected outcome of racing or repeated calls, not system faults.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{EmployeeId, LeaveId};

/// The main error type for the Attendance Ledger & Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::NonPositivePeriod { total_days: 0 };
/// assert_eq!(error.to_string(), "Total days in period must be positive, got 0");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An attendance record already exists for this employee and day.
    #[error("Attendance record already exists for employee {employee_id} on {day}")]
    RecordExists {
        /// The employee whose record already exists.
        employee_id: EmployeeId,
        /// The calendar day that is already taken.
        day: NaiveDate,
    },

    /// No attendance record exists for this employee and day.
    #[error("No attendance record found for employee {employee_id} on {day}")]
    NoRecordForDay {
        /// The employee with no record.
        employee_id: EmployeeId,
        /// The calendar day with no record.
        day: NaiveDate,
    },

    /// The record for this day has already been closed by a clock-out.
    #[error("Employee {employee_id} already clocked out on {day}")]
    AlreadyClockedOut {
        /// The employee who already clocked out.
        employee_id: EmployeeId,
        /// The day whose record is closed.
        day: NaiveDate,
    },

    /// A clock-out instant preceding the stored clock-in.
    #[error("Clock-out precedes clock-in for employee {employee_id} on {day}")]
    ClockOutBeforeClockIn {
        /// The employee with inconsistent clock events.
        employee_id: EmployeeId,
        /// The day of the inconsistent record.
        day: NaiveDate,
    },

    /// The caller's user account is not linked to an employee profile.
    #[error("Actor has no linked employee profile")]
    NoEmployeeProfile,

    /// The caller's role does not permit the requested operation.
    #[error("Role {role} is not permitted to perform this operation")]
    Forbidden {
        /// The role that was rejected.
        role: String,
    },

    /// Reconciliation was requested for a leave that is not approved.
    #[error("Leave {leave_id} is {status}, only APPROVED leaves can be reconciled")]
    LeaveNotApproved {
        /// The leave that was not approved.
        leave_id: LeaveId,
        /// The status the leave was actually in.
        status: String,
    },

    /// A payroll period of zero or fewer days.
    #[error("Total days in period must be positive, got {total_days}")]
    NonPositivePeriod {
        /// The invalid period length.
        total_days: u32,
    },

    /// More payable days than days in the period.
    #[error("Payable days {payable_days} exceeds total days in period {total_days}")]
    PayableDaysOutOfRange {
        /// The out-of-range payable day count.
        payable_days: u32,
        /// The period length the count was checked against.
        total_days: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
