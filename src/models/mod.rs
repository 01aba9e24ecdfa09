//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod deduction_result;
mod employee;
mod payslip;

pub use audit::AuditStep;
pub use deduction_result::DeductionResult;
pub use employee::Employee;
pub use payslip::{Payslip, display_amount};
