//! Dashboard configuration
//!
//! Loaded from JSON; every field has a default so an empty object is a
//! valid configuration.
//!
//! ```json
//! {
//!   "tick_interval_secs": 60,
//!   "data_frequency_minutes": 60,
//!   "history_hours": 24,
//!   "reminder_catch_up_minutes": 2,
//!   "channel_capacity": 64
//! }
//! ```

use std::time::Duration;

use orchidwatch_core::constants::time::{MINUTES_PER_HOUR, MS_PER_SECOND, REMINDER_TICK_INTERVAL_MS};
use serde::{Deserialize, Serialize};

use crate::{DashboardError, DashboardResult};

/// History windows offered by the chart selector (hours)
pub const ALLOWED_HISTORY_HOURS: [u32; 6] = [1, 6, 12, 24, 48, 168];

/// Upload intervals offered by the settings selector (minutes)
pub const ALLOWED_DATA_FREQUENCIES: [u32; 5] = [1, 5, 15, 30, 60];

/// Longest reminder catch-up allowed (minutes)
pub const MAX_CATCH_UP_MINUTES: u32 = MINUTES_PER_HOUR;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Period of the re-check timer
    pub tick_interval_secs: u64,
    /// Sensor upload interval shown in settings
    pub data_frequency_minutes: u32,
    /// Initial history window
    pub history_hours: u32,
    /// How many missed minutes a late tick still checks for reminders
    pub reminder_catch_up_minutes: u32,
    /// Message channel capacity
    pub channel_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: REMINDER_TICK_INTERVAL_MS / MS_PER_SECOND,
            data_frequency_minutes: 60,
            history_hours: 24,
            reminder_catch_up_minutes: 2,
            channel_capacity: 64,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DashboardError::Config(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed values
    pub fn validate(&self) -> DashboardResult<()> {
        if self.tick_interval_secs == 0 {
            return Err(DashboardError::Config("tick interval must be positive".to_string()));
        }
        if self.channel_capacity == 0 {
            return Err(DashboardError::Config("channel capacity must be positive".to_string()));
        }
        if self.reminder_catch_up_minutes > MAX_CATCH_UP_MINUTES {
            return Err(DashboardError::Config(format!(
                "reminder catch-up must be at most {MAX_CATCH_UP_MINUTES} minutes"
            )));
        }
        check_history_hours(self.history_hours)?;
        check_data_frequency(self.data_frequency_minutes)?;
        Ok(())
    }

    /// Re-check timer period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    /// Set the re-check timer period
    pub fn tick_interval_secs(mut self, secs: u64) -> Self {
        self.tick_interval_secs = secs;
        self
    }

    /// Set the initial history window
    pub fn history_hours(mut self, hours: u32) -> Self {
        self.history_hours = hours;
        self
    }

    /// Set the reminder catch-up window
    pub fn reminder_catch_up_minutes(mut self, minutes: u32) -> Self {
        self.reminder_catch_up_minutes = minutes;
        self
    }
}

/// Reject history windows the chart does not offer
pub fn check_history_hours(hours: u32) -> DashboardResult<()> {
    if ALLOWED_HISTORY_HOURS.contains(&hours) {
        Ok(())
    } else {
        Err(DashboardError::Config(format!(
            "history window {hours}h is not one of {ALLOWED_HISTORY_HOURS:?}"
        )))
    }
}

/// Reject upload intervals the sensor does not support
pub fn check_data_frequency(minutes: u32) -> DashboardResult<()> {
    if ALLOWED_DATA_FREQUENCIES.contains(&minutes) {
        Ok(())
    } else {
        Err(DashboardError::Config(format!(
            "data frequency {minutes}min is not one of {ALLOWED_DATA_FREQUENCIES:?}"
        )))
    }
}
