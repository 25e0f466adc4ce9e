//! Irrigation schedule snapshot
//!
//! The store keeps the schedule as a map from push key to entry. Push keys
//! sort chronologically, and `serde_json::Map` iterates in key order, so the
//! parsed entries come out oldest first.

use orchidwatch_core::{CoreError, DaySet, ScheduleEntry, TimeOfDay};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    records::paths, IssueType, NewScheduleRecord, RawScheduleEntry, SchemaError, SchemaResult,
    ValidationReport,
};

/// Parsed schedule plus everything that was skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleSnapshot {
    /// Valid entries, in store key order
    pub entries: Vec<ScheduleEntry>,
    /// Skipped records
    pub report: ValidationReport,
}

/// Parse the `irrigation/schedule` snapshot
///
/// `null` is an empty schedule. Entries with a missing or malformed time,
/// no days, an out-of-range day or an oversized key are skipped.
pub fn parse_schedule(value: &Value) -> SchemaResult<ScheduleSnapshot> {
    let map = match value {
        Value::Null => return Ok(ScheduleSnapshot::default()),
        Value::Object(map) => map,
        _ => {
            return Err(SchemaError::TypeMismatch {
                path: paths::SCHEDULE,
                expected: "object",
            })
        }
    };

    let mut snapshot = ScheduleSnapshot::default();
    for (key, record) in map {
        if let Some(entry) = parse_entry(key, record, &mut snapshot.report) {
            snapshot.entries.push(entry);
        }
    }

    log::debug!(
        "parsed schedule: {} entries, {} skipped",
        snapshot.entries.len(),
        snapshot.report.warnings.len()
    );
    Ok(snapshot)
}

fn parse_entry(key: &str, record: &Value, report: &mut ValidationReport) -> Option<ScheduleEntry> {
    let raw = match RawScheduleEntry::deserialize(record) {
        Ok(raw) => raw,
        Err(e) => {
            report.skip(key, IssueType::TypeMismatch, None, e.to_string());
            return None;
        }
    };

    let Some(time) = raw.time else {
        report.skip(key, IssueType::MissingField, Some("time"), "time is missing".to_string());
        return None;
    };
    let time = match TimeOfDay::parse(&time) {
        Ok(time) => time,
        Err(e) => {
            report.skip(key, IssueType::InvalidValue, Some("time"), format!("{time:?}: {e}"));
            return None;
        }
    };

    let days = match raw.days.as_deref() {
        None | Some([]) => {
            report.skip(key, IssueType::MissingField, Some("days"), "no days selected".to_string());
            return None;
        }
        Some(days) => days,
    };
    let days = match day_set(days) {
        Ok(days) => days,
        Err(message) => {
            report.skip(key, IssueType::InvalidValue, Some("days"), message);
            return None;
        }
    };

    match ScheduleEntry::new(key, time, days) {
        Ok(entry) => Some(entry),
        Err(e) => {
            report.skip(key, IssueType::InvalidValue, None, e.to_string());
            None
        }
    }
}

fn day_set(days: &[i64]) -> Result<DaySet, String> {
    let mut indices = Vec::with_capacity(days.len());
    for &day in days {
        let index = u8::try_from(day).map_err(|_| format!("day {day} is not 0-6"))?;
        indices.push(index);
    }
    DaySet::from_days(indices).map_err(|e| e.to_string())
}

/// Build the record pushed for a new schedule entry
///
/// Validates with the same rules the parser applies, so anything written
/// here reads back as an entry. Days are deduplicated and sorted.
pub fn new_entry_record(time: &str, days: &[u8], created_at: u64) -> SchemaResult<Value> {
    let time = TimeOfDay::parse(time)?;
    let days = DaySet::from_days(days.iter().copied())?;
    if days.is_empty() {
        return Err(CoreError::EmptyDays.into());
    }

    let record = NewScheduleRecord {
        time: time.to_string(),
        days: days.indices().collect(),
        created_at,
    };
    Ok(serde_json::to_value(record)?)
}
