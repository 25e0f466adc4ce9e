//! In-memory ports for controller tests

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use orchidwatch_core::{Alert, Metric, ReminderEvent, ScheduleEntry, StatusResult, Timestamp};
use orchidwatch_dashboard::{
    ConnectionState, Dashboard, DashboardConfig, DashboardView, FixedClock, HistorySeries,
    Message, RealtimeStore, SensorState, StoreError,
};
use orchidwatch_schemas::StoreConfig;
use serde_json::{json, Map, Value};
use tokio::sync::mpsc;

/// 2024-06-03 07:00:00 UTC, a Monday
pub const MONDAY_0700_MS: u64 = 1_717_398_000_000;

/// One minute in epoch ms
pub const MINUTE_MS: u64 = 60_000;

/// One hour in epoch ms
pub const HOUR_MS: u64 = 3_600_000;

/// Store backed by a JSON document
#[derive(Debug, Default)]
pub struct MemoryStore {
    current: Mutex<Value>,
    history: Mutex<Map<String, Value>>,
    schedule: Mutex<Map<String, Value>>,
    config: Mutex<Option<StoreConfig>>,
    raw_schedule: Mutex<Option<Value>>,
    failing: Mutex<Vec<&'static str>>,
    next_key: AtomicU64,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_current(&self, value: Value) {
        *self.current.lock().unwrap() = value;
    }

    pub fn add_history(&self, key: &str, value: Value) {
        self.history.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn put_schedule(&self, key: &str, value: Value) {
        self.schedule.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn schedule_snapshot(&self) -> Value {
        Value::Object(self.schedule.lock().unwrap().clone())
    }

    pub fn saved_config(&self) -> Option<StoreConfig> {
        *self.config.lock().unwrap()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Serve `value` as the schedule snapshot, whatever its shape
    pub fn set_raw_schedule(&self, value: Value) {
        *self.raw_schedule.lock().unwrap() = Some(value);
    }

    /// Fail every call to one store method
    pub fn fail_on(&self, call: &'static str) {
        self.failing.lock().unwrap().push(call);
    }

    fn check(&self, call: &'static str) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::NotConnected)
        } else if self.failing.lock().unwrap().contains(&call) {
            Err(StoreError::Request(format!("{call} failed")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RealtimeStore for MemoryStore {
    async fn current(&self) -> Result<Value, StoreError> {
        self.check("current")?;
        Ok(self.current.lock().unwrap().clone())
    }

    async fn history_since(&self, since: Timestamp) -> Result<Value, StoreError> {
        self.check("history_since")?;
        let history = self.history.lock().unwrap();
        let selected = history
            .iter()
            .filter(|(_, record)| record["timestamp"].as_u64().is_some_and(|ts| ts >= since))
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect();
        Ok(Value::Object(selected))
    }

    async fn schedule(&self) -> Result<Value, StoreError> {
        self.check("schedule")?;
        if let Some(raw) = self.raw_schedule.lock().unwrap().clone() {
            return Ok(raw);
        }
        Ok(self.schedule_snapshot())
    }

    async fn push_schedule_entry(&self, record: Value) -> Result<String, StoreError> {
        self.check("push_schedule_entry")?;
        let key = format!("-N{:04}", self.next_key.fetch_add(1, Ordering::SeqCst));
        self.schedule.lock().unwrap().insert(key.clone(), record);
        Ok(key)
    }

    async fn remove_schedule_entry(&self, key: &str) -> Result<(), StoreError> {
        self.check("remove_schedule_entry")?;
        self.schedule.lock().unwrap().remove(key);
        Ok(())
    }

    async fn save_config(&self, config: &StoreConfig) -> Result<(), StoreError> {
        self.check("save_config")?;
        *self.config.lock().unwrap() = Some(*config);
        Ok(())
    }
}

/// Everything the controller showed, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Status(Metric, StatusResult),
    Alerts(Vec<Alert>),
    Schedule(Vec<String>),
    History(HistorySeries),
    Connection(ConnectionState),
    Sensor(SensorState),
    DataFrequency(u32),
    LastUpdate(NaiveDateTime),
    Reminder(ReminderEvent),
}

/// View that records every call; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn reminders(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Reminder(reminder) => Some(reminder.entry_id.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn last_alerts(&self) -> Option<Vec<Alert>> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::Alerts(alerts) => Some(alerts),
            _ => None,
        })
    }

    pub fn last_status(&self, metric: Metric) -> Option<StatusResult> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::Status(m, status) if m == metric => Some(status),
            _ => None,
        })
    }

    pub fn last_schedule(&self) -> Option<Vec<String>> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::Schedule(ids) => Some(ids),
            _ => None,
        })
    }

    pub fn last_history(&self) -> Option<HistorySeries> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::History(series) => Some(series),
            _ => None,
        })
    }

    pub fn last_update(&self) -> Option<NaiveDateTime> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::LastUpdate(at) => Some(at),
            _ => None,
        })
    }

    pub fn connections(&self) -> Vec<ConnectionState> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Connection(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DashboardView for RecordingView {
    fn render_status(&mut self, metric: Metric, status: &StatusResult) {
        self.push(ViewEvent::Status(metric, status.clone()));
    }

    fn render_alerts(&mut self, alerts: &[Alert]) {
        self.push(ViewEvent::Alerts(alerts.to_vec()));
    }

    fn render_schedule(&mut self, entries: &[ScheduleEntry]) {
        self.push(ViewEvent::Schedule(entries.iter().map(|e| e.id.to_string()).collect()));
    }

    fn render_history(&mut self, series: &HistorySeries) {
        self.push(ViewEvent::History(series.clone()));
    }

    fn render_connection(&mut self, state: ConnectionState) {
        self.push(ViewEvent::Connection(state));
    }

    fn render_sensor(&mut self, state: SensorState) {
        self.push(ViewEvent::Sensor(state));
    }

    fn render_data_frequency(&mut self, minutes: u32) {
        self.push(ViewEvent::DataFrequency(minutes));
    }

    fn render_last_update(&mut self, at: NaiveDateTime) {
        self.push(ViewEvent::LastUpdate(at));
    }

    fn notify_reminder(&mut self, reminder: &ReminderEvent, _entry: &ScheduleEntry) {
        self.push(ViewEvent::Reminder(reminder.clone()));
    }
}

/// Shared handles to a controller's ports
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
    pub view: RecordingView,
}

pub type TestDashboard = Dashboard<Arc<MemoryStore>, Arc<FixedClock>, RecordingView>;

impl Harness {
    /// Monday 07:00 UTC, empty store
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            clock: Arc::new(FixedClock::new(MONDAY_0700_MS)),
            view: RecordingView::default(),
        }
    }

    pub fn dashboard(&self, config: DashboardConfig) -> (TestDashboard, mpsc::Sender<Message>) {
        Dashboard::new(
            Arc::clone(&self.store),
            Arc::clone(&self.clock),
            self.view.clone(),
            config,
        )
        .unwrap()
    }
}

pub fn reading(temperature: f64, humidity: f64, timestamp: u64) -> Value {
    json!({ "temperature": temperature, "humidity": humidity, "timestamp": timestamp })
}

pub fn schedule_record(time: &str, days: &[u8]) -> Value {
    json!({ "time": time, "days": days })
}
