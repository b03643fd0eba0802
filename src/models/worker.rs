//! Hourly-paid worker.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::PayrollResult;

use super::employee::{JobTitle, Payable, ensure_non_negative, salary_overflow};

/// An employee paid by the hour.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::{Payable, Worker};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worker = Worker::new(
///     "Bob Karimov",
///     2,
///     Decimal::from_str("12.5").unwrap(),
///     Decimal::from(120),
/// )
/// .unwrap();
/// assert_eq!(worker.calculate_salary(), Decimal::from(1500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    name: String,
    employee_id: u32,
    hourly_rate: Decimal,
    hours_worked: Decimal,
}

impl Worker {
    /// Creates a worker, rejecting a negative rate or hour count and a
    /// salary outside the decimal range.
    pub fn new(
        name: impl Into<String>,
        employee_id: u32,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> PayrollResult<Self> {
        ensure_non_negative(employee_id, "hourly_rate", hourly_rate)?;
        ensure_non_negative(employee_id, "hours_worked", hours_worked)?;
        hourly_rate
            .checked_mul(hours_worked)
            .ok_or_else(|| salary_overflow(employee_id, "hourly_rate * hours_worked"))?;

        Ok(Self {
            name: name.into(),
            employee_id,
            hourly_rate,
            hours_worked,
        })
    }

    /// The hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The number of hours worked.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }
}

impl Payable for Worker {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_id(&self) -> u32 {
        self.employee_id
    }

    fn job_title(&self) -> JobTitle {
        JobTitle::Worker
    }

    fn calculate_salary(&self) -> Decimal {
        self.hourly_rate * self.hours_worked
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
