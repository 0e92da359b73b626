//! Leave request model and reconciliation summary.
//!
//! Leave requests are owned by the leave-management collaborator; the engine
//! consumes them read-only when an approval triggers reconciliation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CompanyId, EmployeeId, LeaveId};

/// The lifecycle status of a leave request.
///
/// The collaborator enforces that a request transitions out of `Pending`
/// exactly once, which is what makes reconciliation run exactly once per
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting an approval decision.
    Pending,
    /// Approved; attendance facts are fanned out for the date range.
    Approved,
    /// Rejected; no attendance impact.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "PENDING"),
            LeaveStatus::Approved => write!(f, "APPROVED"),
            LeaveStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A leave request as seen by the reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier of the request.
    pub id: LeaveId,
    /// The employee the leave belongs to.
    pub employee_id: EmployeeId,
    /// The tenant the leave belongs to.
    pub company_id: CompanyId,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// The kind of leave, e.g. "CASUAL" or "SICK". Opaque to the engine;
    /// it only appears in the remarks of reconciled records.
    pub leave_type: String,
    /// Current lifecycle status.
    pub status: LeaveStatus,
}

/// Summary of a reconciliation run.
///
/// Counts only; which specific days were skipped is not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncInfo {
    /// Days for which an on-leave fact was created.
    pub created: u32,
    /// Days skipped because a fact already existed.
    pub skipped: u32,
}
