//! The attendance ledger — authoritative per-employee-per-day fact storage.
//!
//! The central consistency contract of the engine lives here: at most one
//! [`AttendanceRecord`] exists per (employee, calendar day), no matter how
//! many writers race. [`LedgerStore::upsert_if_absent`] is the single atomic
//! compare-and-insert primitive every writer goes through; a check-then-insert
//! sequence is never exposed. Keys are independent, so no cross-key or global
//! locking is needed.

use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, CompanyId, EmployeeId};

/// The outcome of an atomic insert-if-absent attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// The record was inserted; the key was previously vacant.
    Inserted(AttendanceRecord),
    /// A record already existed for the key; the prior fact is returned
    /// unchanged and the attempted write is discarded.
    Exists(AttendanceRecord),
}

impl UpsertOutcome {
    /// Returns true if the attempted record won the key.
    pub fn inserted(&self) -> bool {
        matches!(self, UpsertOutcome::Inserted(_))
    }
}

/// Filters for company-wide ledger listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerFilter {
    /// Restrict to a single calendar day.
    pub day: Option<NaiveDate>,
    /// Restrict to a set of employees (e.g. one department, resolved by
    /// the employee-management collaborator).
    pub employees: Option<Vec<EmployeeId>>,
}

/// In-memory keyed storage of attendance facts.
///
/// Backed by a [`DashMap`] keyed by (employee, day); the map's entry API is
/// the uniqueness guard, so two concurrent writers targeting the same key
/// resolve deterministically to one winner and one observer.
///
/// Every query takes the caller's [`CompanyId`]; records belonging to another
/// tenant are invisible, not merely filtered on a best-effort basis.
#[derive(Debug, Default)]
pub struct LedgerStore {
    records: DashMap<(EmployeeId, NaiveDate), AttendanceRecord>,
}

impl LedgerStore {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Atomically inserts `record` if no fact exists for its (employee, day)
    /// key.
    ///
    /// Losing a race is not an error at this layer; callers decide whether
    /// [`UpsertOutcome::Exists`] means a conflict (clock-in, import) or a
    /// skip (leave reconciliation).
    pub fn upsert_if_absent(&self, record: AttendanceRecord) -> UpsertOutcome {
        let key = (record.employee_id, record.day);
        match self.records.entry(key) {
            Entry::Occupied(existing) => UpsertOutcome::Exists(existing.get().clone()),
            Entry::Vacant(slot) => {
                let stored = record.clone();
                slot.insert(record);
                UpsertOutcome::Inserted(stored)
            }
        }
    }

    /// Looks up the fact for an (employee, day) key within a tenant.
    pub fn find(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> Option<AttendanceRecord> {
        self.records
            .get(&(employee_id, day))
            .filter(|record| record.company_id == company_id)
            .map(|record| record.clone())
    }

    /// Returns all facts for an employee in `[from, to]` inclusive, ordered
    /// by day ascending.
    pub fn find_range(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .records
            .iter()
            .filter(|entry| {
                let record = entry.value();
                record.company_id == company_id
                    && record.employee_id == employee_id
                    && record.day >= from
                    && record.day <= to
            })
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.day);
        records
    }

    /// Returns the most recent facts for an employee, newest first, capped
    /// at `limit`.
    pub fn list_for_employee(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        limit: usize,
    ) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .records
            .iter()
            .filter(|entry| {
                let record = entry.value();
                record.company_id == company_id && record.employee_id == employee_id
            })
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| std::cmp::Reverse(record.day));
        records.truncate(limit);
        records
    }

    /// Returns all facts for a tenant matching `filter`, ordered by day
    /// descending.
    pub fn list_for_company(
        &self,
        company_id: CompanyId,
        filter: &LedgerFilter,
    ) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .records
            .iter()
            .filter(|entry| {
                let record = entry.value();
                record.company_id == company_id
                    && filter.day.is_none_or(|day| record.day == day)
                    && filter
                        .employees
                        .as_ref()
                        .is_none_or(|ids| ids.contains(&record.employee_id))
            })
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| std::cmp::Reverse(record.day));
        records
    }

    /// Applies `mutate` to an existing record under its per-key lock and
    /// returns the updated fact.
    ///
    /// Used by the clock-out transition; the closure runs while the entry is
    /// exclusively held, so concurrent clock-outs serialize and exactly one
    /// of them observes the open record.
    pub fn modify<F>(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        day: NaiveDate,
        mutate: F,
    ) -> EngineResult<AttendanceRecord>
    where
        F: FnOnce(&mut AttendanceRecord) -> EngineResult<()>,
    {
        match self.records.get_mut(&(employee_id, day)) {
            Some(mut entry) if entry.company_id == company_id => {
                mutate(entry.value_mut())?;
                Ok(entry.value().clone())
            }
            _ => Err(EngineError::NoRecordForDay { employee_id, day }),
        }
    }

    /// Number of facts in the ledger, across all tenants.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no facts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
