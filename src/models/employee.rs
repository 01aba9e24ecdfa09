//! Employee model.
//!
//! This module defines the Employee struct held by the interactive shell.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::gross_pay;
use crate::error::EngineResult;

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier for the employee, as entered by the operator.
    pub id: String,
    /// The employee's name.
    pub name: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly allowances.
    #[serde(default)]
    pub allowances: Decimal,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        basic_salary: Decimal,
        allowances: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            basic_salary,
            allowances,
        }
    }

    /// Returns the gross monthly salary (basic salary plus allowances).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount)
    /// for field `gross` if the sum does not fit in a [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kenya_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("E001", "Alice", Decimal::new(80000, 0), Decimal::new(10000, 0));
    /// assert_eq!(employee.gross().unwrap(), Decimal::new(90000, 0));
    /// ```
    pub fn gross(&self) -> EngineResult<Decimal> {
        gross_pay(self.basic_salary, self.allowances)
    }
}
