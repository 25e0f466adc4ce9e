//! Ports to the outside world
//!
//! The controller talks to three collaborators, each behind a trait so the
//! loop can run against the hosted store in production and against
//! in-memory fakes in tests:
//!
//! - [`RealtimeStore`]: point queries and writes (async)
//! - [`Clock`]: epoch time plus the local wall clock
//! - [`DashboardView`]: rendering and notifications (sync)
//!
//! Push subscriptions are not part of the store trait. The store adapter
//! forwards pushes into the controller's channel as
//! [`Message`](crate::Message)s.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use orchidwatch_core::{
    time::{FixedTime, SystemTime, TimeSource},
    Alert, Metric, ReminderEvent, ScheduleEntry, StatusResult, Timestamp,
};
use orchidwatch_schemas::StoreConfig;
use serde_json::Value;

use crate::{history::HistorySeries, StoreError};

/// Hosted realtime store
///
/// Queries return raw snapshots; decoding happens in `orchidwatch-schemas`.
#[async_trait]
pub trait RealtimeStore: Send + Sync {
    /// Snapshot of `sensors/current` (`Null` when nothing was published)
    async fn current(&self) -> Result<Value, StoreError>;

    /// History records with `timestamp >= since`
    async fn history_since(&self, since: Timestamp) -> Result<Value, StoreError>;

    /// Snapshot of `irrigation/schedule`
    async fn schedule(&self) -> Result<Value, StoreError>;

    /// Append a schedule record, returning the key the store assigned
    async fn push_schedule_entry(&self, record: Value) -> Result<String, StoreError>;

    /// Delete a schedule record
    async fn remove_schedule_entry(&self, key: &str) -> Result<(), StoreError>;

    /// Persist shared dashboard settings
    async fn save_config(&self, config: &StoreConfig) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: RealtimeStore + ?Sized> RealtimeStore for Arc<T> {
    async fn current(&self) -> Result<Value, StoreError> {
        (**self).current().await
    }

    async fn history_since(&self, since: Timestamp) -> Result<Value, StoreError> {
        (**self).history_since(since).await
    }

    async fn schedule(&self) -> Result<Value, StoreError> {
        (**self).schedule().await
    }

    async fn push_schedule_entry(&self, record: Value) -> Result<String, StoreError> {
        (**self).push_schedule_entry(record).await
    }

    async fn remove_schedule_entry(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_schedule_entry(key).await
    }

    async fn save_config(&self, config: &StoreConfig) -> Result<(), StoreError> {
        (**self).save_config(config).await
    }
}

/// Epoch time and local wall clock
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now(&self) -> Timestamp;

    /// Local date-time for an epoch timestamp
    fn to_local(&self, timestamp: Timestamp) -> Option<NaiveDateTime>;

    /// Local date-time right now
    fn local_now(&self) -> Option<NaiveDateTime> {
        self.to_local(self.now())
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn to_local(&self, timestamp: Timestamp) -> Option<NaiveDateTime> {
        (**self).to_local(timestamp)
    }

    fn local_now(&self) -> Option<NaiveDateTime> {
        (**self).local_now()
    }
}

/// Host clock in the host's time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime.now()
    }

    fn to_local(&self, timestamp: Timestamp) -> Option<NaiveDateTime> {
        let millis = i64::try_from(timestamp).ok()?;
        Local.timestamp_millis_opt(millis).single().map(|dt| dt.naive_local())
    }

    fn local_now(&self) -> Option<NaiveDateTime> {
        Some(Local::now().naive_local())
    }
}

/// Settable clock whose local zone is UTC
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<FixedTime>,
}

impl FixedClock {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            time: Mutex::new(FixedTime::new(timestamp)),
        }
    }

    /// Jump to an absolute timestamp
    pub fn set(&self, timestamp: Timestamp) {
        self.time.lock().unwrap_or_else(PoisonError::into_inner).set(timestamp);
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&self, ms: u64) {
        self.time.lock().unwrap_or_else(PoisonError::into_inner).advance(ms);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.time.lock().unwrap_or_else(PoisonError::into_inner).now()
    }

    fn to_local(&self, timestamp: Timestamp) -> Option<NaiveDateTime> {
        let millis = i64::try_from(timestamp).ok()?;
        DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
    }
}

/// Store connection as shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Initial load in progress
    Connecting,
    /// Last store call succeeded
    Connected,
    /// Last store call failed
    Error,
}

impl ConnectionState {
    /// Header text
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Connected => "Connected",
            ConnectionState::Error => "Connection error",
        }
    }
}

/// Whether the sensor has reported anything yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorState {
    /// No reading since start
    Waiting,
    /// At least one metric has been reported
    Online,
}

/// Rendering and notification surface
pub trait DashboardView: Send {
    /// Status card for one metric
    fn render_status(&mut self, metric: Metric, status: &StatusResult);

    /// Current alert list, temperature first; empty means all clear
    fn render_alerts(&mut self, alerts: &[Alert]);

    /// Irrigation schedule list
    fn render_schedule(&mut self, entries: &[ScheduleEntry]);

    /// History chart
    fn render_history(&mut self, series: &HistorySeries);

    /// Store connection indicator
    fn render_connection(&mut self, state: ConnectionState);

    /// Sensor indicator
    fn render_sensor(&mut self, state: SensorState);

    /// Selected upload interval in minutes
    fn render_data_frequency(&mut self, minutes: u32);

    /// Local time the shown reading was taken
    fn render_last_update(&mut self, at: NaiveDateTime);

    /// Irrigation reminder for a due entry
    fn notify_reminder(&mut self, reminder: &ReminderEvent, entry: &ScheduleEntry);
}
