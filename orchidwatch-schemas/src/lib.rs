//! Realtime-Store Records and Boundary Validation
//!
//! ## Overview
//!
//! The realtime store hands out untyped JSON snapshots. Nothing in the
//! evaluation core accepts JSON: every snapshot passes through this crate
//! first and comes out as typed core values, or is rejected with a reason.
//!
//! ```text
//! store snapshot (serde_json::Value)
//!        │
//!        ▼
//!   records  ──serde──▶  Raw* structs (every field optional)
//!        │
//!        ▼
//!   reading / schedule / history  ──▶  Reading, ScheduleEntry, ...
//!        │                              + ValidationReport
//!        ▼
//!   orchidwatch-core
//! ```
//!
//! ## Store Layout
//!
//! ```json
//! {
//!   "sensors": {
//!     "current": { "temperature": 21.4, "humidity": 78.0, "timestamp": 1717398000000 },
//!     "history": { "<push key>": { "temperature": 21.1, "humidity": 80.2, "timestamp": 1717394400000 } }
//!   },
//!   "irrigation": {
//!     "schedule": { "<push key>": { "time": "07:00", "days": [1, 3, 5], "createdAt": 1717390000000 } }
//!   },
//!   "config": { "dataFrequency": 60 }
//! }
//! ```
//!
//! ## Skip, Don't Fail
//!
//! A single bad record must not blank the whole dashboard. Collections
//! (schedule, history) skip malformed records and describe each skip in a
//! [`ValidationReport`]; only a snapshot whose *shape* is wrong (an array
//! where a map was expected, say) is an error.
//!
//! ## Usage Example
//!
//! ```rust
//! use orchidwatch_schemas::parse_schedule;
//! use serde_json::json;
//!
//! let snapshot = parse_schedule(&json!({
//!     "-Nx1": { "time": "07:00", "days": [1, 3, 5] },
//!     "-Nx2": { "time": "7am", "days": [2] }
//! }))?;
//!
//! assert_eq!(snapshot.entries.len(), 1);
//! assert_eq!(snapshot.report.warnings.len(), 1);
//! # Ok::<(), orchidwatch_schemas::SchemaError>(())
//! ```

use orchidwatch_core::CoreError;

pub mod history;
pub mod reading;
pub mod records;
pub mod schedule;
pub mod validation;

pub use history::{parse_history, HistorySnapshot};
pub use reading::{parse_current, SensorSnapshot};
pub use records::{paths, NewScheduleRecord, RawReading, RawScheduleEntry, StoreConfig};
pub use schedule::{new_entry_record, parse_schedule, ScheduleSnapshot};
pub use validation::{IssueType, Severity, ValidationIssue, ValidationReport};

/// Result type for boundary operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Snapshot JSON could not be decoded
    #[error("Failed to parse snapshot: {0}")]
    ParseError(String),

    /// Snapshot has the wrong JSON shape
    #[error("Type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        /// Store path of the snapshot
        path: &'static str,
        /// Expected JSON shape
        expected: &'static str,
    },

    /// User-supplied value rejected by the core types
    #[error("Invalid value: {0}")]
    Invalid(#[from] CoreError),
}

impl From<serde_json::Error> for SchemaError {
    fn from(error: serde_json::Error) -> Self {
        SchemaError::ParseError(error.to_string())
    }
}
