//! Bulk import record and batch result types.
//!
//! External attendance sources deliver heterogeneous rows; required fields
//! are therefore optional at the type level and validated per record so one
//! bad row never aborts a batch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row of an external attendance import.
///
/// `day` and `status` are required for a successful import but modeled as
/// optional so a missing field fails that record alone rather than the
/// whole batch at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// The external identifier (e.g. a badge or login id) to resolve
    /// against the employee directory.
    pub external_id: String,
    /// The calendar day the row covers.
    #[serde(default)]
    pub day: Option<NaiveDate>,
    /// The status string as exported by the source; case-normalized
    /// before parsing.
    #[serde(default)]
    pub status: Option<String>,
    /// Clock-in instant, when the machine provides one.
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    /// Clock-out instant, when the machine provides one.
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
}

/// Why an individual import record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportErrorKind {
    /// The external id did not resolve to an employee of the tenant.
    UnknownExternalId,
    /// A required field was missing or malformed.
    InvalidRecord,
    /// An attendance record already exists for the (employee, day) key.
    DuplicateRecord,
}

/// A single rejected record in a batch report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFailure {
    /// The external id of the rejected record.
    pub external_id: String,
    /// Why the record was rejected.
    pub reason: ImportErrorKind,
    /// Human-readable detail for the operator report.
    pub message: String,
}

/// The full tally of a bulk import.
///
/// Batches are best-effort: every record is accounted for either in
/// `success_count` or in `errors`, and no failure is ever silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of records persisted.
    pub success_count: u32,
    /// Per-record rejections.
    pub errors: Vec<ImportFailure>,
}

impl BatchResult {
    /// Returns a one-line summary suitable for an operator-facing message.
    pub fn summary(&self) -> String {
        format!(
            "Import processed. Success: {}, Errors: {}",
            self.success_count,
            self.errors.len()
        )
    }
}
