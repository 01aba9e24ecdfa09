//! Payslip model and text rendering.
//!
//! The payslip is the presentation boundary: every amount is rounded to two
//! decimal places here and only here.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DeductionResult, Employee};

/// Width of the label column in the rendered payslip.
const LABEL_WIDTH: usize = 16;

const RULE: &str = "========================";

/// Rounds an amount to two decimal places for display.
///
/// Midpoints round away from zero, the way a payroll clerk would.
///
/// # Examples
///
/// ```
/// use kenya_payroll::models::display_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(display_amount(Decimal::new(1800, 0)), "1800.00");
/// assert_eq!(display_amount(Decimal::new(1234565, 3)), "1234.57");
/// ```
pub fn display_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// A generated payslip for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// The employee the payslip is for.
    pub employee: Employee,
    /// The computed deductions.
    pub deductions: DeductionResult,
}

impl Payslip {
    /// Creates a payslip stamped with a fresh id and the current time.
    pub fn new(employee: Employee, deductions: DeductionResult) -> Self {
        Self {
            payslip_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            employee,
            deductions,
        }
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$} : {value}")
}

impl fmt::Display for Payslip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.deductions;

        writeln!(f, "{RULE}")?;
        writeln!(f, "       PAYSLIP")?;
        writeln!(f, "{RULE}")?;
        line(f, "Employee ID", &self.employee.id)?;
        line(f, "Name", &self.employee.name)?;
        line(f, "Basic Salary", &display_amount(d.basic_salary))?;
        line(f, "Allowances", &display_amount(d.allowances))?;
        line(f, "Gross Salary", &display_amount(d.gross))?;
        writeln!(f)?;
        writeln!(f, "--- Deductions ---")?;
        line(f, "NSSF", &display_amount(d.nssf))?;
        line(f, "NHIF", &display_amount(d.nhif))?;
        line(f, "Housing Levy", &display_amount(d.housing_levy))?;
        line(f, "PAYE", &display_amount(d.paye))?;
        line(f, "Total Deductions", &display_amount(d.total_deductions))?;
        writeln!(f)?;
        line(f, "Net Salary", &display_amount(d.net))?;
        write!(f, "{RULE}")
    }
}
