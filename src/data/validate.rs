//! Offline data-quality report for a catalog source file. Advisory only:
//! serving never depends on this, it surfaces rows the normalizer will
//! silently default.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::data::loader::read_rows;
use crate::data::normalize::{is_falsy, sanitize_number, sanitize_url, sanitize_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Validate the catalog source on disk. Load failures surface as a plain
/// message since there is nothing row-level to report.
pub fn validate_catalog_file(path: &Path) -> Result<ValidationReport, String> {
    let rows = read_rows(path).map_err(|err| err.to_string())?;
    Ok(validate_rows(&rows))
}

pub fn validate_rows(rows: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_names = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let base_context = format!("row[{index}]");
        let Some(object) = row.as_object() else {
            report.push(
                ValidationSeverity::Error,
                base_context,
                "row is not an object",
            );
            continue;
        };

        match object.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => {
                if !seen_names.insert(name.trim().to_string()) {
                    report.push(
                        ValidationSeverity::Info,
                        format!("{base_context}.name"),
                        format!("duplicate name '{}'", name.trim()),
                    );
                }
            }
            _ => report.push(
                ValidationSeverity::Warning,
                format!("{base_context}.name"),
                "missing non-empty 'name'",
            ),
        }

        validate_link(&mut report, object, &base_context);
        validate_year(&mut report, object, &base_context);

        if let Some(volume) = object.get("data_volume_total") {
            if !is_falsy(volume) && sanitize_number(Some(volume)) == 0 {
                report.push(
                    ValidationSeverity::Info,
                    format!("{base_context}.data_volume_total"),
                    "value coerces to 0",
                );
            }
        }
    }

    report
}

fn validate_link(report: &mut ValidationReport, object: &Map<String, Value>, base_context: &str) {
    let (field, value) = match object.get("link") {
        Some(link) if !is_falsy(link) => ("link", link),
        _ => match object.get("homepage_url") {
            Some(homepage) if !is_falsy(homepage) => ("homepage_url", homepage),
            _ => return,
        },
    };
    if sanitize_url(Some(value)).is_empty() {
        report.push(
            ValidationSeverity::Warning,
            format!("{base_context}.{field}"),
            "rejected by URL sanitizer (only http/https are kept)",
        );
    }
}

fn validate_year(report: &mut ValidationReport, object: &Map<String, Value>, base_context: &str) {
    let (field, value) = match object.get("year") {
        Some(year) if !is_falsy(year) => ("year", year),
        _ => match object.get("release_date") {
            Some(date) if !is_falsy(date) => ("release_date", date),
            _ => return,
        },
    };
    if sanitize_year(Some(value)).is_none() {
        report.push(
            ValidationSeverity::Warning,
            format!("{base_context}.{field}"),
            "no 4-digit year found",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_rows_produce_no_diagnostics() {
        let rows = vec![json!({
            "name": "LiTS",
            "link": "https://example.org/lits",
            "year": "2017",
            "data_volume_total": 131
        })];
        let report = validate_rows(&rows);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn missing_name_is_a_warning() {
        let rows = vec![json!({"link": "https://example.org"})];
        let report = validate_rows(&rows);
        assert_eq!(report.count(ValidationSeverity::Warning), 1);
        assert!(!report.has_errors());
        assert_eq!(report.diagnostics[0].context, "row[0].name");
    }

    #[test]
    fn non_object_row_is_an_error() {
        let rows = vec![json!(42)];
        let report = validate_rows(&rows);
        assert!(report.has_errors());
    }

    #[test]
    fn rejected_link_and_yearless_date_are_warnings() {
        let rows = vec![json!({
            "name": "A",
            "link": "ftp://example.org/a",
            "release_date": "spring release"
        })];
        let report = validate_rows(&rows);
        assert_eq!(report.count(ValidationSeverity::Warning), 2);
        let contexts: Vec<_> = report
            .diagnostics
            .iter()
            .map(|d| d.context.as_str())
            .collect();
        assert!(contexts.contains(&"row[0].link"));
        assert!(contexts.contains(&"row[0].release_date"));
    }

    #[test]
    fn duplicate_names_and_zero_volume_are_informational() {
        let rows = vec![
            json!({"name": "A", "data_volume_total": "about none"}),
            json!({"name": "A"}),
        ];
        let report = validate_rows(&rows);
        assert!(!report.has_errors());
        assert_eq!(report.count(ValidationSeverity::Info), 2);
    }
}
