//! Full payroll computation.
//!
//! Combines the individual statutory deductions into a [`DeductionResult`]
//! with an audit step for every rule applied.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DeductionResult};

use super::housing_levy::calculate_housing_levy;
use super::nhif::calculate_nhif;
use super::nssf::calculate_nssf;
use super::paye::calculate_paye_breakdown;

/// Rejects negative monetary input.
pub(crate) fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: format!("{} must not be negative", amount),
        });
    }
    Ok(amount)
}

/// Adds basic salary and allowances, failing instead of overflowing.
pub(crate) fn gross_pay(basic_salary: Decimal, allowances: Decimal) -> EngineResult<Decimal> {
    basic_salary
        .checked_add(allowances)
        .ok_or_else(|| EngineError::InvalidAmount {
            field: "gross".to_string(),
            message: format!(
                "{} + {} exceeds the largest supported amount",
                basic_salary, allowances
            ),
        })
}

/// Computes all deductions and net pay from basic salary and allowances.
///
/// Taxable income is gross less NSSF and housing levy; NHIF is not deducted
/// before PAYE. No amount is rounded.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`] if either input is negative or
/// their sum does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_payroll;
/// use kenya_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = ConfigLoader::kenya().unwrap().into_rates();
/// let result = calculate_payroll(Decimal::new(80000, 0), Decimal::new(10000, 0), &rates).unwrap();
/// assert_eq!(result.paye, Decimal::from_str("17238.35").unwrap());
/// assert_eq!(result.net, Decimal::from_str("68011.65").unwrap());
/// ```
pub fn calculate_payroll(
    basic_salary: Decimal,
    allowances: Decimal,
    rates: &StatutoryRates,
) -> EngineResult<DeductionResult> {
    ensure_non_negative("basic_salary", basic_salary)?;
    ensure_non_negative("allowances", allowances)?;

    let gross = gross_pay(basic_salary, allowances)?;
    let nssf = calculate_nssf(gross, &rates.nssf);
    let nhif = calculate_nhif(gross, &rates.nhif.bands);
    let housing_levy = calculate_housing_levy(gross, &rates.housing_levy);
    let taxable_income = gross - nssf - housing_levy;
    let paye = calculate_paye_breakdown(taxable_income, &rates.paye);

    let total_deductions = nssf + nhif + housing_levy + paye.paye;
    let net = gross - total_deductions;

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "nssf".to_string(),
            rule_name: "NSSF Contribution".to_string(),
            input: json!({ "gross": gross.normalize().to_string() }),
            output: json!({ "nssf": nssf.normalize().to_string() }),
            reasoning: format!(
                "Tier I {} x {} + Tier II {} x {} on KES {} = KES {}",
                rates.nssf.tier_1.rate.normalize(),
                gross.min(rates.nssf.tier_1.limit).normalize(),
                rates.nssf.tier_2.rate.normalize(),
                (gross - rates.nssf.tier_1.limit)
                    .max(Decimal::ZERO)
                    .min(rates.nssf.tier_2.limit)
                    .normalize(),
                gross.normalize(),
                nssf.normalize()
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "nhif".to_string(),
            rule_name: "NHIF Contribution".to_string(),
            input: json!({ "gross": gross.normalize().to_string() }),
            output: json!({ "nhif": nhif.normalize().to_string() }),
            reasoning: format!("Flat fee KES {} for gross KES {}", nhif.normalize(), gross.normalize()),
        },
        AuditStep {
            step_number: 3,
            rule_id: "housing_levy".to_string(),
            rule_name: "Housing Levy".to_string(),
            input: json!({ "gross": gross.normalize().to_string() }),
            output: json!({ "housing_levy": housing_levy.normalize().to_string() }),
            reasoning: format!(
                "KES {} x {} = KES {}",
                gross.normalize(),
                rates.housing_levy.rate.normalize(),
                housing_levy.normalize()
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "paye".to_string(),
            rule_name: "PAYE".to_string(),
            input: json!({
                "taxable_income": taxable_income.normalize().to_string(),
                "personal_relief": rates.paye.personal_relief.normalize().to_string()
            }),
            output: json!({
                "gross_tax": paye.gross_tax.normalize().to_string(),
                "relief_applied": paye.relief_applied.normalize().to_string(),
                "paye": paye.paye.normalize().to_string(),
                "bands_used": paye.slices.len()
            }),
            reasoning: format!(
                "Banded tax KES {} less relief KES {} on taxable KES {} (gross less NSSF and housing levy)",
                paye.gross_tax.normalize(),
                paye.relief_applied.normalize(),
                taxable_income.normalize()
            ),
        },
    ];

    tracing::debug!(
        gross = %gross,
        nssf = %nssf,
        nhif = %nhif,
        housing_levy = %housing_levy,
        paye = %paye.paye,
        net = %net,
        "Computed payroll"
    );

    Ok(DeductionResult {
        basic_salary,
        allowances,
        gross,
        nssf,
        nhif,
        housing_levy,
        taxable_income,
        paye: paye.paye,
        total_deductions,
        net,
        audit_steps,
    })
}
