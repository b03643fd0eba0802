//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading employee
//! rosters from YAML or JSON files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;
use crate::registry::PayrollRegistry;

use super::types::RosterFile;

/// Serialization format of a roster file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl RosterFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> PayrollResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(RosterFormat::Yaml),
            Some("json") => Ok(RosterFormat::Json),
            _ => Err(PayrollError::UnsupportedRosterFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Loads employee rosters into a [`PayrollRegistry`].
///
/// # File Structure
///
/// ```text
/// employees:
///   - job_title: worker
///     name: Alice Johnson
///     employee_id: 1
///     hourly_rate: 15.0
///     hours_worked: 160
///   - job_title: manager
///     name: Clara Smith
///     employee_id: 3
///     fixed_salary: 3000.0
///     bonus: 500.0
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::RosterLoader;
///
/// let registry = RosterLoader::load("./config/sample_roster.yaml")?;
/// println!("Total payroll: {}", registry.total_payroll()?);
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster file into a new registry.
    ///
    /// Returns an error if:
    /// - The file is missing or unreadable (`RosterNotFound`)
    /// - The extension is not YAML or JSON (`UnsupportedRosterFormat`)
    /// - The content does not parse (`RosterParseError`)
    /// - A record names an unknown job title (`UnknownJobTitle`)
    /// - A record is missing a variant field, has a negative amount, or its
    ///   salary leaves the decimal range (`InvalidEmployee`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollRegistry> {
        let path = path.as_ref();
        let format = RosterFormat::from_path(path)?;

        let content = fs::read_to_string(path).map_err(|_| PayrollError::RosterNotFound {
            path: path.display().to_string(),
        })?;

        let registry = Self::parse(&content, format, &path.display().to_string())?;

        info!(
            path = %path.display(),
            employees = registry.len(),
            "Loaded roster"
        );

        Ok(registry)
    }

    /// Parses roster content that has already been read.
    ///
    /// `origin` names the content's source in parse errors, e.g. a path or `<stdin>`.
    pub fn parse(
        content: &str,
        format: RosterFormat,
        origin: &str,
    ) -> PayrollResult<PayrollRegistry> {
        let roster: RosterFile = match format {
            RosterFormat::Yaml => {
                serde_yaml::from_str::<RosterFile>(content).map_err(|e| e.to_string())
            }
            RosterFormat::Json => {
                serde_json::from_str::<RosterFile>(content).map_err(|e| e.to_string())
            }
        }
        .map_err(|message| PayrollError::RosterParseError {
            path: origin.to_string(),
            message,
        })?;

        let mut registry = PayrollRegistry::new();
        for record in roster.employees {
            registry.add_employee(Employee::try_from(record)?);
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Payable;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn roster_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const SAMPLE_YAML: &str = r#"
employees:
  - job_title: worker
    name: Alice Johnson
    employee_id: 1
    hourly_rate: 15.0
    hours_worked: 160
  - job_title: manager
    name: Dmitry Ivanov
    employee_id: 4
    fixed_salary: 2500.0
    bonus: 250.0
"#;

    #[test]
    fn test_load_yaml_roster() {
        let file = roster_file(".yaml", SAMPLE_YAML);
        let registry = RosterLoader::load(file.path()).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.total_payroll().unwrap(), dec("5150"));
    }

    #[test]
    fn test_load_json_roster() {
        let json = r#"{
            "employees": [
                {
                    "job_title": "Worker",
                    "name": "Bob Karimov",
                    "employee_id": 2,
                    "hourly_rate": "12.5",
                    "hours_worked": "120"
                }
            ]
        }"#;
        let file = roster_file(".json", json);
        let registry = RosterLoader::load(file.path()).unwrap();

        assert_eq!(registry.total_payroll().unwrap(), dec("1500"));
    }

    #[test]
    fn test_yml_extension_accepted() {
        assert_eq!(
            RosterFormat::from_path(Path::new("staff.YML")).unwrap(),
            RosterFormat::Yaml
        );
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        match RosterFormat::from_path(Path::new("staff.csv")) {
            Err(PayrollError::UnsupportedRosterFormat { path }) => assert_eq!(path, "staff.csv"),
            other => panic!("Expected UnsupportedRosterFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match RosterLoader::load("/nonexistent/roster.yaml") {
            Err(PayrollError::RosterNotFound { path }) => {
                assert!(path.contains("roster.yaml"));
            }
            other => panic!("Expected RosterNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_reports_path() {
        let file = roster_file(".yaml", "employees: [this is: not: valid");
        match RosterLoader::load(file.path()) {
            Err(PayrollError::RosterParseError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected RosterParseError error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_origin() {
        match RosterLoader::parse("{ not json", RosterFormat::Json, "<stdin>") {
            Err(err @ PayrollError::RosterParseError { .. }) => {
                assert!(err.to_string().starts_with("Failed to parse roster file '<stdin>': "));
            }
            other => panic!("Expected RosterParseError error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_overflowing_salary_rejected() {
        let yaml = r#"
employees:
  - job_title: worker
    name: Huge
    employee_id: 6
    hourly_rate: "100000000000000000000"
    hours_worked: "10000000000"
"#;
        match RosterLoader::parse(yaml, RosterFormat::Yaml, "inline") {
            Err(PayrollError::InvalidEmployee { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unknown_job_title_is_construction_error() {
        let yaml = r#"
employees:
  - job_title: employee
    name: Abstract Person
    employee_id: 9
"#;
        let file = roster_file(".yaml", yaml);
        match RosterLoader::load(file.path()) {
            Err(PayrollError::UnknownJobTitle { title }) => assert_eq!(title, "employee"),
            other => panic!("Expected UnknownJobTitle error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_rate_rejected() {
        let yaml = r#"
employees:
  - job_title: worker
    name: Negative Rate
    employee_id: 5
    hourly_rate: -15.0
    hours_worked: 160
"#;
        match RosterLoader::parse(yaml, RosterFormat::Yaml, "inline") {
            Err(PayrollError::InvalidEmployee {
                employee_id, field, ..
            }) => {
                assert_eq!(employee_id, 5);
                assert_eq!(field, "hourly_rate");
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_preserves_order() {
        let registry = RosterLoader::parse(SAMPLE_YAML, RosterFormat::Yaml, "inline").unwrap();
        let ids: Vec<u32> = registry.employees().iter().map(|e| e.employee_id()).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
