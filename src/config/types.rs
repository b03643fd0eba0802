//! Roster file types.
//!
//! This module contains the structures deserialized from YAML or JSON roster
//! files and their conversion into validated [`Employee`] values.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, JobTitle, Manager, Worker};

/// Roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Employee records in registration order.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

/// A single employee as written in a roster file.
///
/// Variant-specific fields are optional here; which ones are required is
/// decided by `job_title` during conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    /// The job title naming the employee variant ("worker" or "manager").
    pub job_title: String,
    /// The employee's name.
    pub name: String,
    /// The caller-assigned employee id.
    pub employee_id: u32,
    /// Hourly rate, required for workers.
    pub hourly_rate: Option<Decimal>,
    /// Hours worked, required for workers.
    pub hours_worked: Option<Decimal>,
    /// Fixed salary, required for managers.
    pub fixed_salary: Option<Decimal>,
    /// Optional manager bonus; defaults to zero.
    pub bonus: Option<Decimal>,
}

impl EmployeeRecord {
    fn required(&self, field: &str, value: Option<Decimal>) -> PayrollResult<Decimal> {
        value.ok_or_else(|| PayrollError::InvalidEmployee {
            employee_id: self.employee_id,
            field: field.to_string(),
            message: format!("required for job title '{}'", self.job_title),
        })
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = PayrollError;

    fn try_from(record: EmployeeRecord) -> PayrollResult<Self> {
        let employee = match record.job_title.parse::<JobTitle>()? {
            JobTitle::Worker => {
                let hourly_rate = record.required("hourly_rate", record.hourly_rate)?;
                let hours_worked = record.required("hours_worked", record.hours_worked)?;
                Worker::new(record.name, record.employee_id, hourly_rate, hours_worked)?.into()
            }
            JobTitle::Manager => {
                let fixed_salary = record.required("fixed_salary", record.fixed_salary)?;
                let bonus = record.bonus.unwrap_or(Decimal::ZERO);
                Manager::with_bonus(record.name, record.employee_id, fixed_salary, bonus)?.into()
            }
        };
        Ok(employee)
    }
}
