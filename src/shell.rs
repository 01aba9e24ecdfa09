//! Interactive payroll menu.
//!
//! The shell reads commands from any [`BufRead`] and writes to any
//! [`Write`], so the same loop drives a terminal session and the tests. It
//! owns the employee list for the lifetime of the session and delegates all
//! arithmetic to [`TaxCalculator`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculation::TaxCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add an employee.
    AddEmployee,
    /// Print payslips for every employee.
    GeneratePayslips,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses the operator's menu entry. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddEmployee),
            "2" => Some(MenuChoice::GeneratePayslips),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parses a monetary amount typed at a prompt.
///
/// Accepts plain decimals (`"80000"`, `"1500.50"`) and scientific notation
/// (`"8e4"`). Text that is not a number gives [`EngineError::NotANumber`];
/// negative amounts give [`EngineError::InvalidAmount`].
///
/// # Examples
///
/// ```
/// use kenya_payroll::shell::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("basic_salary", " 80000 ").unwrap(), Decimal::new(80000, 0));
/// assert!(parse_amount("basic_salary", "eighty").is_err());
/// assert!(parse_amount("basic_salary", "-5").is_err());
/// ```
pub fn parse_amount(field: &str, input: &str) -> EngineResult<Decimal> {
    let text = input.trim();
    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| EngineError::NotANumber {
            field: field.to_string(),
            input: text.to_string(),
        })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: format!("{} must not be negative", amount),
        });
    }

    Ok(amount)
}

/// The interactive payroll menu.
pub struct Shell<R, W> {
    calculator: TaxCalculator,
    input: R,
    output: W,
    employees: Vec<Employee>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty employee list.
    pub fn new(calculator: TaxCalculator, input: R, output: W) -> Self {
        Self {
            calculator,
            input,
            output,
            employees: Vec::new(),
        }
    }

    /// Employees added so far, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// Only I/O failures end the loop with an error; bad entries are
    /// reported and the menu is shown again.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(entry) = self.prompt("Enter choice: ")? else {
                break;
            };

            match MenuChoice::parse(&entry) {
                Some(MenuChoice::AddEmployee) => {
                    if !self.add_employee()? {
                        break;
                    }
                }
                Some(MenuChoice::GeneratePayslips) => self.generate_payslips()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting payroll system...")?;
                    break;
                }
                None => {
                    tracing::debug!(entry = %entry.trim(), "Unknown menu option");
                    writeln!(self.output, "Invalid option, please try again.")?;
                }
            }
        }

        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "========== PAYROLL MENU ==========")?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. Generate Payslips")?;
        writeln!(self.output, "3. Exit")
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Collects one employee. Returns `false` if input ended mid-entry.
    ///
    /// An invalid amount is reported as soon as it is entered and the
    /// remaining prompts are skipped. An employee whose gross pay cannot be
    /// represented is reported and not added.
    fn add_employee(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt("Employee ID: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(false);
        };

        let Some(basic_salary) = self.prompt("Basic Salary: ")? else {
            return Ok(false);
        };
        let basic_salary = match parse_amount("basic_salary", &basic_salary) {
            Ok(amount) => amount,
            Err(err) => {
                self.report_invalid_amount(&err)?;
                return Ok(true);
            }
        };

        let Some(allowances) = self.prompt("Allowances: ")? else {
            return Ok(false);
        };
        let allowances = match parse_amount("allowances", &allowances) {
            Ok(amount) => amount,
            Err(err) => {
                self.report_invalid_amount(&err)?;
                return Ok(true);
            }
        };

        let employee = Employee::new(id.trim(), name.trim(), basic_salary, allowances);
        let gross = match employee.gross() {
            Ok(gross) => gross,
            Err(err) => {
                self.report_invalid_amount(&err)?;
                return Ok(true);
            }
        };
        tracing::info!(employee_id = %employee.id, gross = %gross, "Employee added");
        self.employees.push(employee);
        writeln!(self.output, "Employee added successfully!")?;

        Ok(true)
    }

    fn report_invalid_amount(&mut self, err: &EngineError) -> io::Result<()> {
        match err {
            EngineError::NotANumber { field, .. } => {
                tracing::warn!(field = %field, "Rejected non-numeric salary input");
                writeln!(self.output, "Invalid input. Salary must be a number.")
            }
            other => {
                tracing::warn!(error = %other, "Rejected salary input");
                writeln!(self.output, "{other}")
            }
        }
    }

    fn generate_payslips(&mut self) -> io::Result<()> {
        if self.employees.is_empty() {
            return writeln!(self.output, "No employees in the system yet.");
        }

        tracing::info!(count = self.employees.len(), "Generating payslips");
        for employee in &self.employees {
            match self.calculator.payslip(employee) {
                Ok(payslip) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{payslip}")?;
                }
                Err(err) => {
                    writeln!(self.output, "Cannot generate payslip for {}: {err}", employee.id)?
                }
            }
        }
        Ok(())
    }
}
