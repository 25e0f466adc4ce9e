//! Boundary Validation Reports
//!
//! Collects every problem found while turning a store snapshot into typed
//! values. Records that were skipped show up as warnings; records that
//! were accepted with a caveat show up as info.

use std::fmt;

/// Validation report containing all issues found
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationReport {
    /// Validation errors (snapshot unusable)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (record skipped)
    pub warnings: Vec<ValidationIssue>,

    /// Informational messages
    pub info: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check whether nothing at all was reported
    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }

    /// Add an issue to the list matching its severity
    pub fn add(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    /// Record a skipped record and log it
    pub fn skip(&mut self, record: &str, issue_type: IssueType, field: Option<&str>, message: String) {
        log::warn!("skipping record {record}: {message}");
        self.add(ValidationIssue {
            issue_type,
            record: Some(record.to_string()),
            field: field.map(str::to_string),
            message,
            severity: Severity::Warning,
        });
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Keys of records that were skipped
    pub fn skipped_records(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|issue| issue.record.as_deref())
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Store key of the offending record (if applicable)
    pub record: Option<String>,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.record, &self.field) {
            (Some(record), Some(field)) => write!(f, "{record}.{field}: {}", self.message),
            (Some(record), None) => write!(f, "{record}: {}", self.message),
            (None, Some(field)) => write!(f, "{field}: {}", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Required field is missing
    MissingField,

    /// Field has the wrong JSON type
    TypeMismatch,

    /// Field is well-typed but its value is not allowed
    InvalidValue,

    /// Record falls outside the requested window
    OutOfWindow,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Record skipped
    Warning,

    /// Snapshot unusable
    Error,
}
