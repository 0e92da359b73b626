//! Leave-approval fan-out into the ledger.
//!
//! When the leave-management collaborator approves a request, the reconciler
//! walks the leave's inclusive date range and writes an ON_LEAVE fact for
//! every day that has none. An existing fact always wins: an employee who
//! clocked in and later had leave approved retroactively keeps the PRESENT
//! record, and the day is merely counted as skipped. Operators should be
//! aware of this policy when reading reconciliation summaries.

use std::sync::Arc;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::ledger::LedgerStore;
use crate::models::{
    AttendanceRecord, AttendanceSource, AttendanceStatus, LeaveRequest, LeaveStatus, SyncInfo,
};

/// Derives ledger facts from approved leave requests.
#[derive(Debug, Clone)]
pub struct LeaveReconciler {
    store: Arc<LedgerStore>,
}

impl LeaveReconciler {
    /// Creates a reconciler over the shared ledger.
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Writes non-conflicting ON_LEAVE facts for every day of an approved
    /// leave.
    ///
    /// Invoked synchronously as part of the approval transition. The leave's
    /// status is flipped to APPROVED before this runs, so a failure partway
    /// leaves an observable approved-but-not-fully-synced state; because
    /// every per-day write is an insert-if-absent, re-running to completion
    /// is always safe and a fully-synced leave reports
    /// `created = 0, skipped = range length`.
    ///
    /// An inverted range (`from_date > to_date`) touches no days.
    pub fn reconcile(&self, leave: &LeaveRequest) -> EngineResult<SyncInfo> {
        if leave.status != LeaveStatus::Approved {
            return Err(EngineError::LeaveNotApproved {
                leave_id: leave.id,
                status: leave.status.to_string(),
            });
        }

        let mut sync = SyncInfo::default();
        let mut day = leave.from_date;
        while day <= leave.to_date {
            let outcome = self.store.upsert_if_absent(AttendanceRecord {
                employee_id: leave.employee_id,
                company_id: leave.company_id,
                day,
                status: AttendanceStatus::OnLeave,
                clock_in: None,
                clock_out: None,
                work_duration_mins: None,
                source: AttendanceSource::System,
                remarks: Some(format!("Leave: {}", leave.leave_type)),
            });
            if outcome.inserted() {
                sync.created += 1;
            } else {
                sync.skipped += 1;
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        info!(
            leave_id = %leave.id,
            employee_id = %leave.employee_id,
            created = sync.created,
            skipped = sync.skipped,
            "Leave reconciled into attendance ledger"
        );
        Ok(sync)
    }
}
