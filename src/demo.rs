//! Built-in demo roster.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{Manager, Worker};
use crate::registry::PayrollRegistry;

/// Builds the demo payroll: two hourly workers and two salaried managers.
///
/// The same employees are listed in `config/sample_roster.yaml`.
///
/// # Examples
///
/// ```
/// use payroll_ledger::demo::demo_registry;
/// use rust_decimal::Decimal;
///
/// let registry = demo_registry().unwrap();
/// assert_eq!(registry.total_payroll().unwrap(), Decimal::from(10150));
/// ```
pub fn demo_registry() -> PayrollResult<PayrollRegistry> {
    let mut registry = PayrollRegistry::new();

    registry.add_employee(Worker::new(
        "Alice Johnson",
        1,
        Decimal::new(150, 1),
        Decimal::from(160),
    )?);
    registry.add_employee(Worker::new(
        "Bob Karimov",
        2,
        Decimal::new(125, 1),
        Decimal::from(120),
    )?);
    registry.add_employee(Manager::with_bonus(
        "Clara Smith",
        3,
        Decimal::new(30000, 1),
        Decimal::new(5000, 1),
    )?);
    registry.add_employee(Manager::with_bonus(
        "Dmitry Ivanov",
        4,
        Decimal::new(25000, 1),
        Decimal::new(2500, 1),
    )?);

    Ok(registry)
}
