//! Bulk ingestion of external attendance records.
//!
//! Machine exports (biometric terminals, badge readers) arrive as batches of
//! rows keyed by an external id. The pipeline resolves every external id for
//! the tenant in one directory pass, then processes each row independently:
//! a failing row is reported and counted, never allowed to abort the batch.
//! There is no transaction spanning the batch — partial success is the
//! defining property, not a degraded mode.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::ledger::{LedgerStore, UpsertOutcome};
use crate::models::{
    AttendanceRecord, AttendanceSource, AttendanceStatus, BatchResult, CompanyId, EmployeeId,
    ImportErrorKind, ImportFailure, ImportRecord,
};

/// Resolves external identifiers to employees of a tenant.
///
/// This is the seam to the employee-management collaborator: the engine never
/// owns the directory, it only asks for a one-pass lookup table per company.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the external-id to employee mapping for a company.
    fn external_id_map(&self, company_id: CompanyId) -> HashMap<String, EmployeeId>;
}

/// A directory backed by an in-process map, for wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    entries: HashMap<(CompanyId, String), EmployeeId>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an external id for an employee of a company.
    pub fn insert(
        &mut self,
        company_id: CompanyId,
        external_id: impl Into<String>,
        employee_id: EmployeeId,
    ) {
        self.entries
            .insert((company_id, external_id.into()), employee_id);
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn external_id_map(&self, company_id: CompanyId) -> HashMap<String, EmployeeId> {
        self.entries
            .iter()
            .filter(|((company, _), _)| *company == company_id)
            .map(|((_, external_id), employee_id)| (external_id.clone(), *employee_id))
            .collect()
    }
}

/// Ingests external attendance batches into the ledger.
#[derive(Clone)]
pub struct ImportPipeline {
    store: Arc<LedgerStore>,
    directory: Arc<dyn EmployeeDirectory>,
}

impl ImportPipeline {
    /// Creates a pipeline over the shared ledger and directory.
    pub fn new(store: Arc<LedgerStore>, directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { store, directory }
    }

    /// Imports a batch of records for a tenant.
    ///
    /// Returns the full tally: every record ends up either in
    /// `success_count` or in `errors` with a reason. Ordering between
    /// records is not guaranteed to matter; each row's write is an
    /// independent atomic insert.
    pub fn import(&self, company_id: CompanyId, records: &[ImportRecord]) -> BatchResult {
        // One directory pass for the whole batch.
        let external_ids = self.directory.external_id_map(company_id);

        let mut result = BatchResult::default();
        for record in records {
            match self.import_one(company_id, &external_ids, record) {
                Ok(()) => result.success_count += 1,
                Err(failure) => {
                    debug!(
                        external_id = %failure.external_id,
                        reason = ?failure.reason,
                        "Import record rejected"
                    );
                    result.errors.push(failure);
                }
            }
        }
        result
    }

    fn import_one(
        &self,
        company_id: CompanyId,
        external_ids: &HashMap<String, EmployeeId>,
        record: &ImportRecord,
    ) -> Result<(), ImportFailure> {
        let fail = |reason, message: &str| ImportFailure {
            external_id: record.external_id.clone(),
            reason,
            message: message.to_string(),
        };

        let Some(&employee_id) = external_ids.get(&record.external_id) else {
            return Err(fail(
                ImportErrorKind::UnknownExternalId,
                "Employee not found or invalid external id",
            ));
        };

        let Some(day) = record.day else {
            return Err(fail(ImportErrorKind::InvalidRecord, "Missing day"));
        };
        let Some(status) = record.status.as_deref() else {
            return Err(fail(ImportErrorKind::InvalidRecord, "Missing status"));
        };
        let status: AttendanceStatus = status
            .parse()
            .map_err(|message: String| fail(ImportErrorKind::InvalidRecord, &message))?;

        let work_duration_mins = match (record.clock_in, record.clock_out) {
            (Some(clock_in), Some(clock_out)) => {
                if clock_out < clock_in {
                    return Err(fail(
                        ImportErrorKind::InvalidRecord,
                        "Clock-out precedes clock-in",
                    ));
                }
                Some((clock_out - clock_in).num_seconds() / 60)
            }
            _ => None,
        };

        let outcome = self.store.upsert_if_absent(AttendanceRecord {
            employee_id,
            company_id,
            day,
            status,
            clock_in: record.clock_in,
            clock_out: record.clock_out,
            work_duration_mins,
            source: AttendanceSource::Machine,
            remarks: None,
        });

        match outcome {
            UpsertOutcome::Inserted(_) => Ok(()),
            UpsertOutcome::Exists(_) => Err(fail(
                ImportErrorKind::DuplicateRecord,
                "Attendance record already exists",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn setup() -> (ImportPipeline, Arc<LedgerStore>, CompanyId, EmployeeId) {
        let store = Arc::new(LedgerStore::new());
        let company = CompanyId::new();
        let employee = EmployeeId::new();
        let mut directory = InMemoryDirectory::new();
        directory.insert(company, "EMP-0001", employee);
        let pipeline = ImportPipeline::new(Arc::clone(&store), Arc::new(directory));
        (pipeline, store, company, employee)
    }

    fn valid_record(external_id: &str, d: u32) -> ImportRecord {
        ImportRecord {
            external_id: external_id.to_string(),
            day: Some(day(d)),
            status: Some("PRESENT".to_string()),
            clock_in: None,
            clock_out: None,
        }
    }

    /// IM-001: a valid record is persisted with MACHINE provenance
    #[test]
    fn test_valid_record_persisted_as_machine() {
        let (pipeline, store, company, employee) = setup();

        let result = pipeline.import(company, &[valid_record("EMP-0001", 2)]);

        assert_eq!(result.success_count, 1);
        assert!(result.errors.is_empty());
        let record = store.find(company, employee, day(2)).unwrap();
        assert_eq!(record.source, AttendanceSource::Machine);
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    /// IM-002: unknown external id fails that record alone
    #[test]
    fn test_partial_failure_on_unknown_external_id() {
        let (pipeline, store, company, _) = setup();
        let records = vec![
            valid_record("EMP-0001", 2),
            valid_record("EMP-9999", 2),
            valid_record("EMP-0001", 3),
        ];

        let result = pipeline.import(company, &records);

        assert_eq!(result.success_count, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].external_id, "EMP-9999");
        assert_eq!(result.errors[0].reason, ImportErrorKind::UnknownExternalId);
        assert_eq!(store.len(), 2);
    }

    /// IM-003: missing day or status is an invalid record
    #[test]
    fn test_missing_fields_rejected_per_record() {
        let (pipeline, _, company, _) = setup();
        let records = vec![
            ImportRecord {
                day: None,
                ..valid_record("EMP-0001", 2)
            },
            ImportRecord {
                status: None,
                ..valid_record("EMP-0001", 3)
            },
            valid_record("EMP-0001", 4),
        ];

        let result = pipeline.import(company, &records);

        assert_eq!(result.success_count, 1);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.reason == ImportErrorKind::InvalidRecord));
    }

    /// IM-004: existing ledger fact makes the row a duplicate
    #[test]
    fn test_duplicate_against_existing_fact() {
        let (pipeline, _, company, _) = setup();

        let first = pipeline.import(company, &[valid_record("EMP-0001", 2)]);
        assert_eq!(first.success_count, 1);

        let second = pipeline.import(company, &[valid_record("EMP-0001", 2)]);
        assert_eq!(second.success_count, 0);
        assert_eq!(second.errors[0].reason, ImportErrorKind::DuplicateRecord);
    }

    /// IM-005: status strings are case-normalized
    #[test]
    fn test_status_case_normalized() {
        let (pipeline, store, company, employee) = setup();
        let record = ImportRecord {
            status: Some("on_leave".to_string()),
            ..valid_record("EMP-0001", 2)
        };

        let result = pipeline.import(company, &[record]);

        assert_eq!(result.success_count, 1);
        assert_eq!(
            store.find(company, employee, day(2)).unwrap().status,
            AttendanceStatus::OnLeave
        );
    }

    /// IM-006: unparseable status is an invalid record, not a crash
    #[test]
    fn test_unknown_status_rejected() {
        let (pipeline, _, company, _) = setup();
        let record = ImportRecord {
            status: Some("HOLIDAY".to_string()),
            ..valid_record("EMP-0001", 2)
        };

        let result = pipeline.import(company, &[record]);

        assert_eq!(result.success_count, 0);
        assert_eq!(result.errors[0].reason, ImportErrorKind::InvalidRecord);
    }

    /// IM-007: duration derived only when both clock events exist
    #[test]
    fn test_duration_derived_from_clock_events() {
        let (pipeline, store, company, employee) = setup();
        let clock_in = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let clock_out = Utc.with_ymd_and_hms(2026, 3, 2, 17, 15, 30).unwrap();
        let record = ImportRecord {
            clock_in: Some(clock_in),
            clock_out: Some(clock_out),
            ..valid_record("EMP-0001", 2)
        };

        pipeline.import(company, &[record]);

        let stored = store.find(company, employee, day(2)).unwrap();
        assert_eq!(stored.work_duration_mins, Some(495));
    }

    /// IM-008: inverted clock events are rejected, not stored negative
    #[test]
    fn test_inverted_clock_events_rejected() {
        let (pipeline, store, company, _) = setup();
        let clock_in = Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap();
        let clock_out = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let record = ImportRecord {
            clock_in: Some(clock_in),
            clock_out: Some(clock_out),
            ..valid_record("EMP-0001", 2)
        };

        let result = pipeline.import(company, &[record]);

        assert_eq!(result.success_count, 0);
        assert_eq!(result.errors[0].reason, ImportErrorKind::InvalidRecord);
        assert!(store.is_empty());
    }

    /// IM-009: directory lookups never cross the tenant boundary
    #[test]
    fn test_directory_is_tenant_scoped() {
        let store = Arc::new(LedgerStore::new());
        let company_a = CompanyId::new();
        let company_b = CompanyId::new();
        let mut directory = InMemoryDirectory::new();
        directory.insert(company_a, "EMP-0001", EmployeeId::new());
        let pipeline = ImportPipeline::new(store, Arc::new(directory));

        let result = pipeline.import(company_b, &[valid_record("EMP-0001", 2)]);

        assert_eq!(result.success_count, 0);
        assert_eq!(result.errors[0].reason, ImportErrorKind::UnknownExternalId);
    }

    /// IM-010: a repeated row within one batch loses to the first row
    #[test]
    fn test_repeat_within_batch_is_duplicate() {
        let (pipeline, _, company, _) = setup();
        let records = vec![valid_record("EMP-0001", 2), valid_record("EMP-0001", 2)];

        let result = pipeline.import(company, &records);

        assert_eq!(result.success_count, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].reason, ImportErrorKind::DuplicateRecord);
    }
}
