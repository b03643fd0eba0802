//! Fixed-width payroll report rendering.
//!
//! Rendering is pure: every function here returns text. Writing that text to
//! a stream is left to [`PayrollRegistry::write_report`](crate::registry::PayrollRegistry::write_report).
//!
//! The layout is:
//!
//! ```text
//! ID   | Name                 | Job Title       | Salary
//! -----+----------------------+-----------------+---------
//! 0001 | Alice Johnson        | Worker          |  2400.00
//! -----+----------------------+-----------------+---------
//! Total payroll: 2400.00
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Payable;

/// Column header line.
pub const HEADER: &str = "ID   | Name                 | Job Title       | Salary";

/// Separator line printed below the header and above the total.
pub const SEPARATOR: &str = "-----+----------------------+-----------------+---------";

/// Number of decimal places shown for money.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount for display.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats one employee row: `{id:04} | {name:<20} | {title:<15} | {salary:>8.2}`.
///
/// Names longer than the column are not truncated.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::Manager;
/// use payroll_ledger::report::format_row;
/// use rust_decimal::Decimal;
///
/// let manager = Manager::with_bonus("Dmitry Ivanov", 4, Decimal::from(2500), Decimal::from(250)).unwrap();
/// assert_eq!(
///     format_row(&manager),
///     "0004 | Dmitry Ivanov        | Manager         |  2750.00"
/// );
/// ```
pub fn format_row<P: Payable + ?Sized>(employee: &P) -> String {
    format!(
        "{:04} | {:<20} | {:<15} | {:>8.2}",
        employee.employee_id(),
        employee.name(),
        employee.job_title().as_str(),
        round_for_display(employee.calculate_salary()),
    )
}

/// Formats the closing total line.
pub fn format_total(total: Decimal) -> String {
    format!("Total payroll: {:.2}", round_for_display(total))
}

/// Renders the full listing for employees in the given order.
///
/// Every line, including the last, ends with a newline.
pub fn render<'a, P, I>(employees: I, total: Decimal) -> String
where
    P: Payable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for employee in employees {
        out.push_str(&format_row(employee));
        out.push('\n');
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format_total(total));
    out.push('\n');
    out
}
