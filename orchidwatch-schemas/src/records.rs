//! Raw store records
//!
//! Serde mirrors of what the realtime store holds. Every field is optional
//! because the store enforces no schema; the typed conversion lives in the
//! sibling modules.

use serde::{Deserialize, Serialize};

/// Store paths used by the dashboard
pub mod paths {
    /// Latest sensor reading
    pub const CURRENT: &str = "sensors/current";
    /// Append-only reading log, keyed by push key
    pub const HISTORY: &str = "sensors/history";
    /// Irrigation schedule, keyed by push key
    pub const SCHEDULE: &str = "irrigation/schedule";
    /// Shared dashboard settings
    pub const CONFIG: &str = "config";
}

/// Sensor reading as stored (current or history)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawReading {
    /// °C
    pub temperature: Option<f64>,
    /// %RH
    pub humidity: Option<f64>,
    /// epoch ms
    pub timestamp: Option<i64>,
}

/// Schedule entry as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScheduleEntry {
    /// `HH:MM`
    pub time: Option<String>,
    /// Sunday-based day indices
    pub days: Option<Vec<i64>>,
    /// Creation time (epoch ms); older clients wrote it as `id`
    #[serde(rename = "createdAt", alias = "id")]
    pub created_at: Option<i64>,
}

/// Schedule entry as written by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleRecord {
    /// `HH:MM`
    pub time: String,
    /// Sunday-based day indices, ascending, no duplicates
    pub days: Vec<u8>,
    /// Creation time (epoch ms)
    pub created_at: u64,
}

/// Settings persisted under [`paths::CONFIG`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Sensor upload interval shown on the dashboard (minutes)
    pub data_frequency: u32,
}
