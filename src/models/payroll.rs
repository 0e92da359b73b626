//! Payroll result models.
//!
//! A [`PayrollResult`] is a computed value, never persisted by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed salary structure derived from gross salary alone.
///
/// These figures represent the full-period entitlement and are returned for
/// reference; the amounts actually paid out come from [`EarnedPay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Basic pay component.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Provident fund deduction at full-period basic.
    pub pf: Decimal,
    /// Insurance deduction at full-period basic.
    pub insurance: Decimal,
}

/// The earned block, pro-rated by payable days over the period length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedPay {
    /// Gross pay earned for the payable days.
    pub earned_gross: Decimal,
    /// Deductions computed against the earned basic.
    pub earned_deductions: Decimal,
    /// Net pay after deductions.
    pub net_salary: Decimal,
}

/// The complete output of a payroll computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Full-period reference structure.
    pub salary_structure: SalaryStructure,
    /// Pro-rated earned amounts.
    pub calculated: EarnedPay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_payroll_result_serializes_nested_blocks() {
        let result = PayrollResult {
            salary_structure: SalaryStructure {
                basic: dec("12000"),
                hra: dec("3600"),
                conveyance: dec("3000"),
                pf: dec("1440"),
                insurance: dec("240"),
            },
            calculated: EarnedPay {
                earned_gross: dec("30000"),
                earned_deductions: dec("1680"),
                net_salary: dec("28320"),
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"salary_structure\""));
        assert!(json.contains("\"calculated\""));
        assert!(json.contains("\"net_salary\":\"28320\""));
    }
}
