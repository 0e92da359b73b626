//! Pure payroll computation.
//!
//! Turns (gross salary, payable days, days in period) into a fixed salary
//! structure and a pro-rated earned block. The function is side-effect free;
//! payable-day counts are aggregated from the ledger by the caller and the
//! gross figure comes from the employee-management collaborator.
//!
//! Intermediate figures (`daily wage`, `earned basic`) stay unrounded; only
//! the published amounts are rounded, half-up to whole currency units. The
//! deductions in the earned block are computed against the earned basic, not
//! the full-period basic — the fixed-structure pf/insurance are reference
//! figures only.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayrollRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{EarnedPay, PayrollResult, SalaryStructure};

/// Rounds to the nearest whole currency unit, ties rounding up.
///
/// All payroll figures are non-negative, so `MidpointAwayFromZero` is
/// exactly half-up here.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the salary structure and earned pay for one period.
///
/// # Arguments
///
/// * `gross_salary` - The full-period gross salary in currency units.
/// * `payable_days` - Days for which compensation is owed; must not exceed
///   `total_days`.
/// * `total_days` - Length of the period in days, typically the days in the
///   calendar month; must be positive.
/// * `rates` - The percentage rates for each salary component.
///
/// # Errors
///
/// Out-of-range input is a caller contract violation and is returned as
/// [`EngineError::NonPositivePeriod`] or
/// [`EngineError::PayableDaysOutOfRange`], never clamped.
///
/// # Examples
///
/// ```
/// use attendance_engine::config::PayrollRates;
/// use attendance_engine::payroll::compute_payroll;
/// use rust_decimal::Decimal;
///
/// let result = compute_payroll(
///     Decimal::from(30000),
///     30,
///     30,
///     &PayrollRates::default(),
/// )
/// .unwrap();
/// assert_eq!(result.salary_structure.basic, Decimal::from(12000));
/// assert_eq!(result.calculated.net_salary, Decimal::from(28320));
/// ```
pub fn compute_payroll(
    gross_salary: Decimal,
    payable_days: u32,
    total_days: u32,
    rates: &PayrollRates,
) -> EngineResult<PayrollResult> {
    if total_days == 0 {
        return Err(EngineError::NonPositivePeriod { total_days });
    }
    if payable_days > total_days {
        return Err(EngineError::PayableDaysOutOfRange {
            payable_days,
            total_days,
        });
    }

    // Fixed structure: the full-period entitlement, derived from gross alone.
    let basic = round_currency(gross_salary * rates.basic);
    let hra = round_currency(basic * rates.hra);
    let conveyance = round_currency(gross_salary * rates.conveyance);
    let pf = round_currency(basic * rates.pf);
    let insurance = round_currency(basic * rates.insurance);

    let total_days = Decimal::from(total_days);
    let payable_days = Decimal::from(payable_days);

    // Earned block, pro-rated by payable days over the period length.
    let daily_wage = gross_salary / total_days;
    let earned_gross = round_currency(daily_wage * payable_days);

    let earned_basic = basic / total_days * payable_days;
    let earned_pf = round_currency(earned_basic * rates.pf);
    let earned_insurance = round_currency(earned_basic * rates.insurance);
    let earned_deductions = earned_pf + earned_insurance;

    let net_salary = round_currency(earned_gross - earned_deductions);

    Ok(PayrollResult {
        salary_structure: SalaryStructure {
            basic,
            hra,
            conveyance,
            pf,
            insurance,
        },
        calculated: EarnedPay {
            earned_gross,
            earned_deductions,
            net_salary,
        },
    })
}
