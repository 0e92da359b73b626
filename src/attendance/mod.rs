//! Manual clock-in/clock-out transitions against the ledger.
//!
//! The writer implements a small per-day state machine: a vacant key becomes
//! a PRESENT record on clock-in, and an open PRESENT record is closed exactly
//! once by clock-out, which derives the worked duration. "Today" is taken
//! from a single `now` snapshot per call so the key and the stored instants
//! can never disagree.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::ledger::{LedgerStore, UpsertOutcome};
use crate::models::{
    utc_day, ActorContext, AttendanceRecord, AttendanceSource, AttendanceStatus, EmployeeId,
};

/// Number of history records returned by [`AttendanceWriter::history`].
pub const HISTORY_LIMIT: usize = 30;

/// Writes manual attendance facts on behalf of an authenticated employee.
#[derive(Debug, Clone)]
pub struct AttendanceWriter {
    store: Arc<LedgerStore>,
}

impl AttendanceWriter {
    /// Creates a writer over the shared ledger.
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    fn require_employee(actor: &ActorContext) -> EngineResult<EmployeeId> {
        actor.employee_id.ok_or(EngineError::NoEmployeeProfile)
    }

    /// Clocks the actor in for today.
    ///
    /// Fails with [`EngineError::RecordExists`] when any writer already
    /// produced a fact for today — including an earlier clock-in, a machine
    /// import, or leave reconciliation.
    pub fn clock_in(&self, actor: &ActorContext) -> EngineResult<AttendanceRecord> {
        self.clock_in_at(actor, Utc::now())
    }

    /// Clocks the actor in using an explicit `now` snapshot.
    pub fn clock_in_at(
        &self,
        actor: &ActorContext,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceRecord> {
        let employee_id = Self::require_employee(actor)?;
        let day = utc_day(now);

        let record = AttendanceRecord {
            employee_id,
            company_id: actor.company_id,
            day,
            status: AttendanceStatus::Present,
            clock_in: Some(now),
            clock_out: None,
            work_duration_mins: None,
            source: AttendanceSource::Manual,
            remarks: None,
        };

        match self.store.upsert_if_absent(record) {
            UpsertOutcome::Inserted(record) => Ok(record),
            UpsertOutcome::Exists(_) => Err(EngineError::RecordExists { employee_id, day }),
        }
    }

    /// Clocks the actor out for today, deriving the worked duration.
    ///
    /// Fails with [`EngineError::NoRecordForDay`] when no clock-in happened
    /// today and [`EngineError::AlreadyClockedOut`] on a repeated call; a
    /// repeated call leaves the stored duration untouched.
    pub fn clock_out(&self, actor: &ActorContext) -> EngineResult<AttendanceRecord> {
        self.clock_out_at(actor, Utc::now())
    }

    /// Clocks the actor out using an explicit `now` snapshot.
    pub fn clock_out_at(
        &self,
        actor: &ActorContext,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceRecord> {
        let employee_id = Self::require_employee(actor)?;
        let day = utc_day(now);

        self.store
            .modify(actor.company_id, employee_id, day, |record| {
                if record.is_closed() {
                    return Err(EngineError::AlreadyClockedOut { employee_id, day });
                }
                let Some(clock_in) = record.clock_in else {
                    // Records without a clock-in (machine rows, reconciled
                    // leave days) cannot be closed manually.
                    return Err(EngineError::NoRecordForDay { employee_id, day });
                };
                if now < clock_in {
                    return Err(EngineError::ClockOutBeforeClockIn { employee_id, day });
                }

                record.clock_out = Some(now);
                record.work_duration_mins = Some((now - clock_in).num_seconds() / 60);
                Ok(())
            })
    }

    /// Returns the actor's most recent attendance facts, newest first,
    /// capped at [`HISTORY_LIMIT`].
    pub fn history(&self, actor: &ActorContext) -> EngineResult<Vec<AttendanceRecord>> {
        let employee_id = Self::require_employee(actor)?;
        Ok(self
            .store
            .list_for_employee(actor.company_id, employee_id, HISTORY_LIMIT))
    }
}
