//! JSON output validation
//!
//! Re-parses the rendered output and checks it against the rows it was
//! produced from: same element count, every element an object whose keys are
//! the header names in header order and whose values match the source cells.

use crate::error::{ConversionError, ConversionResult};
use crate::parser::{Dataset, Record};
use serde_json::Value;

/// A single validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Zero-based element index, `None` for whole-document issues
    pub element: Option<usize>,
    pub message: String,
}

/// Collected validation issues
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn add(&mut self, element: Option<usize>, message: String) {
        self.issues.push(ValidationIssue { element, message });
    }

    fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .issues
            .iter()
            .take(3)
            .map(|issue| match issue.element {
                Some(i) => format!("element {}: {}", i, issue.message),
                None => issue.message.clone(),
            })
            .collect();
        if self.issues.len() > 3 {
            parts.push(format!("and {} more", self.issues.len() - 3));
        }
        parts.join("; ")
    }
}

/// Validator for rendered dataset JSON
pub struct DatasetValidator {
    /// Fail with an error instead of returning an invalid report
    strict: bool,
}

impl DatasetValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn validate(&self, json: &str, dataset: &Dataset) -> ConversionResult<ValidationReport> {
        let mut report = ValidationReport::new();

        let parsed: Vec<Value> = match serde_json::from_str::<Value>(json) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                report.add(None, "output is not a JSON array".to_string());
                return self.finish(report);
            }
            Err(e) => {
                report.add(None, format!("output is not valid JSON: {}", e));
                return self.finish(report);
            }
        };

        if parsed.len() != dataset.len() {
            report.add(
                None,
                format!(
                    "{} elements written, {} rows read",
                    parsed.len(),
                    dataset.len()
                ),
            );
        }

        let header = dataset.unique_header();
        for (i, (value, record)) in parsed.iter().zip(&dataset.records).enumerate() {
            self.check_element(i, value, record, &header, &mut report);
        }

        self.finish(report)
    }

    fn check_element(
        &self,
        index: usize,
        value: &Value,
        record: &Record,
        header: &[&str],
        report: &mut ValidationReport,
    ) {
        let Some(object) = value.as_object() else {
            report.add(Some(index), "not a JSON object".to_string());
            return;
        };

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        if keys != header {
            report.add(
                Some(index),
                format!("keys {:?} do not match header {:?}", keys, header),
            );
            return;
        }

        for (key, expected) in record.iter() {
            match object.get(key) {
                Some(Value::String(actual)) if actual == expected => {}
                Some(other) => report.add(
                    Some(index),
                    format!("field {:?} is {}, expected {:?}", key, other, expected),
                ),
                None => report.add(Some(index), format!("field {:?} missing", key)),
            }
        }
    }

    fn finish(&self, report: ValidationReport) -> ConversionResult<ValidationReport> {
        if self.strict && !report.is_valid() {
            return Err(ConversionError::validation(report.summary()));
        }
        Ok(report)
    }
}
