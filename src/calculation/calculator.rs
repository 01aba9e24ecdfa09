//! The [`TaxCalculator`] facade over the statutory rules.

use rust_decimal::Decimal;

use crate::config::{ConfigLoader, StatutoryRates};
use crate::error::EngineResult;
use crate::models::{DeductionResult, Employee, Payslip};

use super::housing_levy::calculate_housing_levy;
use super::nhif::calculate_nhif;
use super::nssf::calculate_nssf;
use super::paye::{PayeBreakdown, calculate_paye_breakdown};
use super::payroll::{calculate_payroll, ensure_non_negative};

/// Computes statutory deductions against an immutable set of rates.
///
/// Every operation is pure and validates its input, rejecting negative
/// amounts with [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount).
///
/// # Example
///
/// ```
/// use kenya_payroll::calculation::TaxCalculator;
/// use rust_decimal::Decimal;
///
/// let calculator = TaxCalculator::kenya().unwrap();
/// assert_eq!(calculator.compute_nssf(Decimal::new(30000, 0)).unwrap(), Decimal::new(1800, 0));
/// assert!(calculator.compute_nhif(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rates: StatutoryRates,
}

impl TaxCalculator {
    /// Creates a calculator owning the given rates.
    pub fn new(rates: StatutoryRates) -> Self {
        Self { rates }
    }

    /// Creates a calculator over the embedded Kenyan tables.
    pub fn kenya() -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::kenya()?.into_rates()))
    }

    /// Returns the rates this calculator applies.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Two-tier NSSF contribution.
    pub fn compute_nssf(&self, gross: Decimal) -> EngineResult<Decimal> {
        let gross = ensure_non_negative("gross", gross)?;
        Ok(calculate_nssf(gross, &self.rates.nssf))
    }

    /// NHIF flat fee from the band table.
    pub fn compute_nhif(&self, gross: Decimal) -> EngineResult<Decimal> {
        let gross = ensure_non_negative("gross", gross)?;
        Ok(calculate_nhif(gross, &self.rates.nhif.bands))
    }

    /// Housing levy on gross pay.
    pub fn compute_housing_levy(&self, gross: Decimal) -> EngineResult<Decimal> {
        let gross = ensure_non_negative("gross", gross)?;
        Ok(calculate_housing_levy(gross, &self.rates.housing_levy))
    }

    /// PAYE after personal relief, never negative.
    pub fn compute_paye(&self, taxable_income: Decimal) -> EngineResult<Decimal> {
        Ok(self.compute_paye_breakdown(taxable_income)?.paye)
    }

    /// PAYE with the per-band slices.
    pub fn compute_paye_breakdown(&self, taxable_income: Decimal) -> EngineResult<PayeBreakdown> {
        let taxable_income = ensure_non_negative("taxable_income", taxable_income)?;
        Ok(calculate_paye_breakdown(taxable_income, &self.rates.paye))
    }

    /// All deductions and net pay for a basic salary and allowances.
    pub fn compute_payroll(
        &self,
        basic_salary: Decimal,
        allowances: Decimal,
    ) -> EngineResult<DeductionResult> {
        calculate_payroll(basic_salary, allowances, &self.rates)
    }

    /// Computes the deductions for an employee and wraps them in a payslip.
    pub fn payslip(&self, employee: &Employee) -> EngineResult<Payslip> {
        let deductions = self.compute_payroll(employee.basic_salary, employee.allowances)?;
        Ok(Payslip::new(employee.clone(), deductions))
    }
}
