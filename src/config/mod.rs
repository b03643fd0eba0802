//! Roster loading for the payroll ledger.
//!
//! This module loads employee rosters from YAML or JSON files into a
//! [`PayrollRegistry`](crate::registry::PayrollRegistry).
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::RosterLoader;
//!
//! let registry = RosterLoader::load("./config/sample_roster.yaml").unwrap();
//! println!("Employees: {}", registry.len());
//! ```

mod loader;
mod types;

pub use loader::{RosterFormat, RosterLoader};
pub use types::{EmployeeRecord, RosterFile};
