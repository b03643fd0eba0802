//! Payroll ledger
//!
//! This crate models a small payroll: hourly workers and salaried managers,
//! each computing their own salary, collected in a registry that totals the
//! payroll and renders a fixed-width report.

#![warn(missing_docs)]

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
