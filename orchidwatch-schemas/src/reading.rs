//! Current-reading snapshot
//!
//! The sensor may publish partial data (humidity sensor unplugged, first
//! boot), so both metrics stay optional here. The controller classifies each
//! metric on its own and only evaluates alerts once both are present.

use orchidwatch_core::{traits::Evaluable, Reading, Timestamp};
use serde::Deserialize;
use serde_json::Value;

use crate::{records::paths, RawReading, SchemaError, SchemaResult};

/// Latest reading with every field optional
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSnapshot {
    /// °C, if present and finite
    pub temperature: Option<f32>,
    /// %RH, if present and finite
    pub humidity: Option<f32>,
    /// epoch ms, if present and not negative
    pub timestamp: Option<Timestamp>,
}

impl SensorSnapshot {
    /// Convert a raw record, dropping unusable fields
    pub fn from_raw(raw: &RawReading) -> Self {
        Self {
            temperature: metric(raw.temperature),
            humidity: metric(raw.humidity),
            timestamp: raw.timestamp.and_then(|ts| Timestamp::try_from(ts).ok()),
        }
    }

    /// Both metrics, when both are present
    pub fn metrics(&self) -> Option<(f32, f32)> {
        Some((self.temperature?, self.humidity?))
    }

    /// Complete reading, when every field is present
    pub fn reading(&self) -> Option<Reading> {
        let (temperature, humidity) = self.metrics()?;
        Some(Reading::new(temperature, humidity, self.timestamp?))
    }

    /// True when neither metric is usable
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.humidity.is_none()
    }
}

/// Narrow a stored metric to `f32`, rejecting values that overflow
pub(crate) fn metric(value: Option<f64>) -> Option<f32> {
    value.map(|v| v as f32).filter(|v| v.is_valid())
}

/// Parse the `sensors/current` snapshot
///
/// `null` (nothing published yet) is `Ok(None)`.
pub fn parse_current(value: &Value) -> SchemaResult<Option<SensorSnapshot>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => {
            let raw = RawReading::deserialize(value)?;
            Ok(Some(SensorSnapshot::from_raw(&raw)))
        }
        _ => Err(SchemaError::TypeMismatch {
            path: paths::CURRENT,
            expected: "object",
        }),
    }
}
