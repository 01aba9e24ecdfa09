//! Calculation logic for the payroll engine.
//!
//! This module contains the statutory deduction rules: NSSF tiers, the NHIF
//! fee table, the housing levy, and banded PAYE with personal relief. The
//! [`TaxCalculator`] ties them to one immutable set of rates.

mod calculator;
mod housing_levy;
mod nhif;
mod nssf;
mod paye;
mod payroll;

pub use calculator::TaxCalculator;
pub use housing_levy::calculate_housing_levy;
pub use nhif::calculate_nhif;
pub use nssf::calculate_nssf;
pub use paye::{BandSlice, PayeBreakdown, band_slices, calculate_paye, calculate_paye_breakdown};
pub use payroll::calculate_payroll;
pub(crate) use payroll::gross_pay;
