//! Core data models for the payroll ledger.
//!
//! This module contains the employee capability, its variants, and the
//! serializable payroll summary.

mod employee;
mod manager;
mod summary;
mod worker;

pub use employee::{Employee, JobTitle, Payable};
pub use manager::Manager;
pub(crate) use summary::checked_total;
pub use summary::{PayrollLine, PayrollSummary};
pub use worker::Worker;
