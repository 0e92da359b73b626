//! Application state for the Attendance Ledger & Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::attendance::AttendanceWriter;
use crate::config::PayrollRates;
use crate::import::{EmployeeDirectory, ImportPipeline};
use crate::ledger::LedgerStore;

/// Shared application state.
///
/// Holds the ledger and the components built over it. All handlers share the
/// same [`LedgerStore`], which is what makes cross-request races resolve
/// through the store's atomic insert.
#[derive(Clone)]
pub struct AppState {
    store: Arc<LedgerStore>,
    writer: AttendanceWriter,
    pipeline: ImportPipeline,
    rates: Arc<PayrollRates>,
}

impl AppState {
    /// Creates the application state over a fresh ledger.
    pub fn new(directory: Arc<dyn EmployeeDirectory>, rates: PayrollRates) -> Self {
        let store = Arc::new(LedgerStore::new());
        Self {
            writer: AttendanceWriter::new(Arc::clone(&store)),
            pipeline: ImportPipeline::new(Arc::clone(&store), directory),
            rates: Arc::new(rates),
            store,
        }
    }

    /// Returns the shared ledger.
    pub fn store(&self) -> &Arc<LedgerStore> {
        &self.store
    }

    /// Returns the attendance writer.
    pub fn writer(&self) -> &AttendanceWriter {
        &self.writer
    }

    /// Returns the import pipeline.
    pub fn pipeline(&self) -> &ImportPipeline {
        &self.pipeline
    }

    /// Returns the configured payroll rates.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }
}
