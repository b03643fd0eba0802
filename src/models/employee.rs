//! Employee capability and the closed set of employee variants.
//!
//! Every payroll-eligible person implements [`Payable`]. The [`Employee`]
//! enum is what the registry stores; it dispatches to the concrete
//! [`Worker`] or [`Manager`] formula.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::report;

use super::{Manager, Worker};

/// The job title of an employee, fixed by its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTitle {
    /// Hourly-paid employee.
    Worker,
    /// Salaried employee with an optional bonus.
    Manager,
}

impl JobTitle {
    /// Returns the display name of the job title.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobTitle::Worker => "Worker",
            JobTitle::Manager => "Manager",
        }
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for JobTitle {
    type Err = PayrollError;

    /// Parses a job title case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::JobTitle;
    ///
    /// assert_eq!("manager".parse::<JobTitle>().unwrap(), JobTitle::Manager);
    /// assert!("Employee".parse::<JobTitle>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worker" => Ok(JobTitle::Worker),
            "manager" => Ok(JobTitle::Manager),
            _ => Err(PayrollError::UnknownJobTitle {
                title: s.to_string(),
            }),
        }
    }
}

/// The salary-computation capability shared by all employees.
///
/// Implementors supply their own identity accessors and salary formula;
/// there is no default formula.
pub trait Payable {
    /// The employee's name.
    fn name(&self) -> &str;

    /// The caller-assigned employee id.
    fn employee_id(&self) -> u32;

    /// The job title determined by the employee's variant.
    fn job_title(&self) -> JobTitle;

    /// Computes the unrounded salary for this employee.
    fn calculate_salary(&self) -> Decimal;

    /// Formats this employee as a fixed-width report row.
    ///
    /// The salary is rounded to two decimal places for display only.
    fn format(&self) -> String {
        report::format_row(self)
    }
}

/// An employee registered with the payroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Employee {
    /// An hourly-paid worker.
    Worker(Worker),
    /// A salaried manager.
    Manager(Manager),
}

impl Payable for Employee {
    fn name(&self) -> &str {
        match self {
            Employee::Worker(worker) => worker.name(),
            Employee::Manager(manager) => manager.name(),
        }
    }

    fn employee_id(&self) -> u32 {
        match self {
            Employee::Worker(worker) => worker.employee_id(),
            Employee::Manager(manager) => manager.employee_id(),
        }
    }

    fn job_title(&self) -> JobTitle {
        match self {
            Employee::Worker(_) => JobTitle::Worker,
            Employee::Manager(_) => JobTitle::Manager,
        }
    }

    fn calculate_salary(&self) -> Decimal {
        match self {
            Employee::Worker(worker) => worker.calculate_salary(),
            Employee::Manager(manager) => manager.calculate_salary(),
        }
    }
}

impl From<Worker> for Employee {
    fn from(worker: Worker) -> Self {
        Employee::Worker(worker)
    }
}

impl From<Manager> for Employee {
    fn from(manager: Manager) -> Self {
        Employee::Manager(manager)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Rejects a negative numeric field before the employee is constructed.
pub(crate) fn ensure_non_negative(
    employee_id: u32,
    field: &str,
    value: Decimal,
) -> PayrollResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PayrollError::InvalidEmployee {
            employee_id,
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

/// Error for a salary formula whose result leaves the decimal range.
pub(crate) fn salary_overflow(employee_id: u32, formula: &str) -> PayrollError {
    PayrollError::InvalidEmployee {
        employee_id,
        field: "salary".to_string(),
        message: format!("{} overflows the decimal range", formula),
    }
}
