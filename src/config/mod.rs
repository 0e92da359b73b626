//! Payroll rate configuration.
//!
//! The five percentage rates driving the salary structure ship with
//! statutory defaults and can be overridden per deployment from a YAML
//! file, e.g.:
//!
//! ```yaml
//! basic: "0.40"
//! hra: "0.30"
//! conveyance: "0.10"
//! pf: "0.12"
//! insurance: "0.02"
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The percentage rates for each salary component, as decimal fractions.
///
/// `basic` and `conveyance` are applied to gross salary; `hra`, `pf` and
/// `insurance` are applied to the basic component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRates {
    /// Basic pay as a fraction of gross.
    pub basic: Decimal,
    /// House rent allowance as a fraction of basic.
    pub hra: Decimal,
    /// Conveyance allowance as a fraction of gross.
    pub conveyance: Decimal,
    /// Provident fund deduction as a fraction of basic.
    pub pf: Decimal,
    /// Insurance deduction as a fraction of basic.
    pub insurance: Decimal,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            basic: Decimal::new(40, 2),
            hra: Decimal::new(30, 2),
            conveyance: Decimal::new(10, 2),
            pf: Decimal::new(12, 2),
            insurance: Decimal::new(2, 2),
        }
    }
}

impl PayrollRates {
    /// Loads rates from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// this shape.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
