//! Reading history snapshot

use orchidwatch_core::{Reading, Timestamp};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    reading::metric, records::paths, IssueType, RawReading, SchemaError, SchemaResult,
    ValidationReport,
};

/// Parsed history plus everything that was skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    /// Complete readings, oldest first
    pub readings: Vec<Reading>,
    /// Skipped records
    pub report: ValidationReport,
}

/// Parse a `sensors/history` query result
///
/// Only complete readings taken at or after `since` are kept. The store
/// query already filters by timestamp; the check here guards against a
/// store that ignores the bound.
pub fn parse_history(value: &Value, since: Timestamp) -> SchemaResult<HistorySnapshot> {
    let map = match value {
        Value::Null => return Ok(HistorySnapshot::default()),
        Value::Object(map) => map,
        _ => {
            return Err(SchemaError::TypeMismatch {
                path: paths::HISTORY,
                expected: "object",
            })
        }
    };

    let mut snapshot = HistorySnapshot::default();
    for (key, record) in map {
        let raw = match RawReading::deserialize(record) {
            Ok(raw) => raw,
            Err(e) => {
                snapshot.report.skip(key, IssueType::TypeMismatch, None, e.to_string());
                continue;
            }
        };

        let Some(reading) = complete(key, &raw, &mut snapshot.report) else {
            continue;
        };
        if reading.timestamp < since {
            snapshot.report.skip(
                key,
                IssueType::OutOfWindow,
                Some("timestamp"),
                format!("{} is before {since}", reading.timestamp),
            );
            continue;
        }
        snapshot.readings.push(reading);
    }

    snapshot.readings.sort_by_key(|reading| reading.timestamp);
    Ok(snapshot)
}

fn complete(key: &str, raw: &RawReading, report: &mut ValidationReport) -> Option<Reading> {
    let fields = [
        ("temperature", metric(raw.temperature).is_some()),
        ("humidity", metric(raw.humidity).is_some()),
        ("timestamp", raw.timestamp.is_some_and(|ts| ts >= 0)),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, present)| !present) {
        report.skip(key, IssueType::MissingField, Some(*field), format!("{field} is missing"));
        return None;
    }

    Some(Reading::new(
        metric(raw.temperature)?,
        metric(raw.humidity)?,
        Timestamp::try_from(raw.timestamp?).ok()?,
    ))
}
