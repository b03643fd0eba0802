//! Serializable payroll summary.
//!
//! This module contains the [`PayrollSummary`] type, a snapshot of a registry
//! with one [`PayrollLine`] per employee and the total payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::{JobTitle, Payable};

/// Sums salaries in order, reporting the first one that overflows the total.
pub(crate) fn checked_total<I>(salaries: I) -> PayrollResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    for (index, salary) in salaries.into_iter().enumerate() {
        total = total
            .checked_add(salary)
            .ok_or_else(|| PayrollError::TotalOverflow { position: index + 1 })?;
    }
    Ok(total)
}

/// A single employee's line in a payroll summary.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{JobTitle, PayrollLine};
/// use rust_decimal::Decimal;
///
/// let line = PayrollLine {
///     employee_id: 1,
///     name: "Alice Johnson".to_string(),
///     job_title: JobTitle::Worker,
///     salary: Decimal::from(2400),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The caller-assigned employee id.
    pub employee_id: u32,
    /// The employee's name.
    pub name: String,
    /// The job title determined by the employee's variant.
    pub job_title: JobTitle,
    /// The unrounded computed salary.
    pub salary: Decimal,
}

impl PayrollLine {
    /// Captures the line for a single employee.
    pub fn from_employee<P: Payable + ?Sized>(employee: &P) -> Self {
        Self {
            employee_id: employee.employee_id(),
            name: employee.name().to_string(),
            job_title: employee.job_title(),
            salary: employee.calculate_salary(),
        }
    }
}

/// A snapshot of the whole payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// One line per employee, in registration order.
    pub lines: Vec<PayrollLine>,
    /// The sum of all line salaries.
    pub total_payroll: Decimal,
}

impl PayrollSummary {
    /// Builds a summary from employees in the given order.
    ///
    /// Fails with `TotalOverflow` if the total leaves the decimal range.
    pub fn from_employees<'a, P, I>(employees: I) -> PayrollResult<Self>
    where
        P: Payable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let lines: Vec<PayrollLine> = employees
            .into_iter()
            .map(PayrollLine::from_employee)
            .collect();
        let total_payroll = checked_total(lines.iter().map(|line| line.salary))?;

        Ok(Self {
            lines,
            total_payroll,
        })
    }

    /// Returns the number of employees in the summary.
    pub fn employee_count(&self) -> usize {
        self.lines.len()
    }
}
