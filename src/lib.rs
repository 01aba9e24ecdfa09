//! Payroll deductions engine for Kenyan statutory rates.
//!
//! This crate computes PAYE, NSSF, NHIF and the housing levy from a gross
//! monthly salary, renders payslips, and drives an interactive payroll menu.
//! A small quadratic-equation solver ships alongside.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod quadratic;
pub mod shell;
