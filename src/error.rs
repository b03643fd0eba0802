//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building, loading, and
//! reporting a payroll.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::RosterNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A record named a job title that has no concrete employee variant.
    #[error("Cannot construct employee with job title '{title}': expected 'Worker' or 'Manager'")]
    UnknownJobTitle {
        /// The job title that was requested.
        title: String,
    },

    /// An employee field failed validation at construction.
    #[error("Invalid employee {employee_id:04} field '{field}': {message}")]
    InvalidEmployee {
        /// The id of the rejected employee.
        employee_id: u32,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Roster file extension is neither YAML nor JSON.
    #[error("Unsupported roster format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedRosterFormat {
        /// The offending path.
        path: String,
    },

    /// Summing the payroll exceeded the decimal range.
    #[error("Total payroll overflows the decimal range at employee {position}")]
    TotalOverflow {
        /// One-based position of the employee whose salary overflowed the total.
        position: usize,
    },

    /// The report could not be written to its output stream.
    #[error("Failed to write payroll report: {message}")]
    ReportWrite {
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
