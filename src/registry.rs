//! The payroll registry.
//!
//! [`PayrollRegistry`] owns an ordered, append-only list of employees and
//! computes aggregates over it on demand. Nothing is cached, so the total
//! always reflects the current contents.

use std::io::{self, Write};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, Payable, PayrollSummary, checked_total};
use crate::report;

/// An ordered collection of employees with aggregation and reporting.
///
/// The registry is meant for a single owner on a single thread. Callers that
/// share it across threads must serialize access themselves.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{Manager, Worker};
/// use payroll_ledger::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// registry.add_employee(Worker::new("Alice Johnson", 1, Decimal::from(15), Decimal::from(160))?);
/// registry.add_employee(Manager::new("Clara Smith", 3, Decimal::from(3000))?);
///
/// assert_eq!(registry.total_payroll()?, Decimal::from(5400));
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollRegistry {
    employees: Vec<Employee>,
}

impl PayrollRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee. Duplicate ids are allowed.
    pub fn add_employee(&mut self, employee: impl Into<Employee>) {
        let employee = employee.into();
        debug!(
            employee_id = employee.employee_id(),
            job_title = %employee.job_title(),
            "Registering employee"
        );
        self.employees.push(employee);
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sums the salaries of all employees; zero for an empty registry.
    ///
    /// Fails with `TotalOverflow` if the sum leaves the decimal range.
    pub fn total_payroll(&self) -> PayrollResult<Decimal> {
        checked_total(
            self.employees
                .iter()
                .map(|employee| employee.calculate_salary()),
        )
    }

    /// Captures a serializable snapshot of the payroll.
    pub fn summary(&self) -> PayrollResult<PayrollSummary> {
        PayrollSummary::from_employees(&self.employees)
    }

    /// Renders the full report as text.
    pub fn render(&self) -> PayrollResult<String> {
        Ok(report::render(&self.employees, self.total_payroll()?))
    }

    /// Writes the report to `writer`.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> PayrollResult<()> {
        let report = self.render()?;
        writer
            .write_all(report.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| PayrollError::ReportWrite {
                message: e.to_string(),
            })
    }

    /// Writes the summary to `writer` as pretty-printed JSON.
    pub fn write_summary_json<W: Write>(&self, writer: &mut W) -> PayrollResult<()> {
        let summary = self.summary()?;
        serde_json::to_writer_pretty(&mut *writer, &summary)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(writer))
            .and_then(|()| writer.flush())
            .map_err(|e| PayrollError::ReportWrite {
                message: e.to_string(),
            })
    }

    /// Prints the report to standard output.
    pub fn display_all(&self) -> PayrollResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)
    }
}

impl FromIterator<Employee> for PayrollRegistry {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Employee> for PayrollRegistry {
    fn extend<I: IntoIterator<Item = Employee>>(&mut self, iter: I) {
        for employee in iter {
            self.add_employee(employee);
        }
    }
}

impl<'a> IntoIterator for &'a PayrollRegistry {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
