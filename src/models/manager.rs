//! Salaried manager.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::PayrollResult;

use super::employee::{JobTitle, Payable, ensure_non_negative, salary_overflow};

/// An employee on a fixed salary with an optional bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    name: String,
    employee_id: u32,
    fixed_salary: Decimal,
    bonus: Decimal,
}

impl Manager {
    /// Creates a manager with no bonus.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Manager, Payable};
    /// use rust_decimal::Decimal;
    ///
    /// let manager = Manager::new("Clara Smith", 3, Decimal::from(3000)).unwrap();
    /// assert_eq!(manager.bonus(), Decimal::ZERO);
    /// assert_eq!(manager.calculate_salary(), Decimal::from(3000));
    /// ```
    pub fn new(
        name: impl Into<String>,
        employee_id: u32,
        fixed_salary: Decimal,
    ) -> PayrollResult<Self> {
        Self::with_bonus(name, employee_id, fixed_salary, Decimal::ZERO)
    }

    /// Creates a manager with a bonus, rejecting negative amounts and a
    /// salary outside the decimal range.
    pub fn with_bonus(
        name: impl Into<String>,
        employee_id: u32,
        fixed_salary: Decimal,
        bonus: Decimal,
    ) -> PayrollResult<Self> {
        ensure_non_negative(employee_id, "fixed_salary", fixed_salary)?;
        ensure_non_negative(employee_id, "bonus", bonus)?;
        fixed_salary
            .checked_add(bonus)
            .ok_or_else(|| salary_overflow(employee_id, "fixed_salary + bonus"))?;

        Ok(Self {
            name: name.into(),
            employee_id,
            fixed_salary,
            bonus,
        })
    }

    /// The fixed salary.
    pub fn fixed_salary(&self) -> Decimal {
        self.fixed_salary
    }

    /// The bonus paid on top of the fixed salary.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }
}

impl Payable for Manager {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_id(&self) -> u32 {
        self.employee_id
    }

    fn job_title(&self) -> JobTitle {
        JobTitle::Manager
    }

    fn calculate_salary(&self) -> Decimal {
        self.fixed_salary + self.bonus
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salary_is_fixed_plus_bonus() {
        let manager = Manager::with_bonus("Clara Smith", 3, dec("3000.0"), dec("500.0")).unwrap();
        assert_eq!(manager.calculate_salary(), dec("3500.00"));
    }

    #[test]
    fn test_dmitry_salary() {
        let manager =
            Manager::with_bonus("Dmitry Ivanov", 4, dec("2500.0"), dec("250.0")).unwrap();
        assert_eq!(manager.calculate_salary(), dec("2750"));
    }

    #[test]
    fn test_bonus_defaults_to_zero() {
        let manager = Manager::new("No Bonus", 10, dec("4000")).unwrap();
        assert_eq!(manager.bonus(), Decimal::ZERO);
        assert_eq!(manager.calculate_salary(), dec("4000"));
    }

    #[test]
    fn test_job_title_is_manager() {
        let manager = Manager::new("Clara Smith", 3, dec("3000")).unwrap();
        assert_eq!(manager.job_title(), JobTitle::Manager);
    }

    #[test]
    fn test_negative_fixed_salary_rejected() {
        let result = Manager::new("Bad Salary", 11, dec("-1"));
        match result {
            Err(PayrollError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "fixed_salary");
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_bonus_rejected() {
        let result = Manager::with_bonus("Bad Bonus", 12, dec("3000"), dec("-250"));
        match result {
            Err(PayrollError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "bonus");
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_overflow_rejected() {
        match Manager::with_bonus("Huge", 14, Decimal::MAX, dec("1")) {
            Err(PayrollError::InvalidEmployee { field, message, .. }) => {
                assert_eq!(field, "salary");
                assert!(message.contains("fixed_salary + bonus"));
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_salary_without_bonus_accepted() {
        let manager = Manager::new("Ceiling", 15, Decimal::MAX).unwrap();
        assert_eq!(manager.calculate_salary(), Decimal::MAX);
    }

    #[test]
    fn test_format_row() {
        let manager = Manager::with_bonus("Clara Smith", 3, dec("3000.0"), dec("500.0")).unwrap();
        assert_eq!(
            manager.to_string(),
            "0003 | Clara Smith          | Manager         |  3500.00"
        );
    }
}
