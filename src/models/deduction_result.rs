//! Deduction result model.
//!
//! This module contains the [`DeductionResult`] type capturing every
//! intermediate and final value of a payroll computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// The complete result of a payroll computation.
///
/// All amounts are kept at full precision. Rounding for display is done by
/// the payslip rendering, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly allowances.
    pub allowances: Decimal,
    /// Basic salary plus allowances.
    pub gross: Decimal,
    /// NSSF contribution (Tier I + Tier II).
    pub nssf: Decimal,
    /// NHIF flat fee.
    pub nhif: Decimal,
    /// Affordable housing levy.
    pub housing_levy: Decimal,
    /// Gross less NSSF and housing levy.
    pub taxable_income: Decimal,
    /// PAYE after personal relief.
    pub paye: Decimal,
    /// Sum of all four deductions.
    pub total_deductions: Decimal,
    /// Gross less total deductions.
    pub net: Decimal,
    /// Rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}
