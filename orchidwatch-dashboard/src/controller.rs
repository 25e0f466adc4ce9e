//! Dashboard controller loop
//!
//! ## Message Flow
//!
//! ```text
//! store push ─┐
//! user action ┼─▶ mpsc::Sender<Message> ─▶ Dashboard::run ─▶ DashboardView
//! timer ──────┘         (one task)              │
//!                                               ▼
//!                                         RealtimeStore
//! ```
//!
//! Every input is a [`Message`] handled to completion before the next one,
//! so the state needs no locking. The schedule snapshot is replaced
//! wholesale whenever the store delivers a new one.
//!
//! ## Failure Handling
//!
//! A failed store call flips the view to [`ConnectionState::Error`] and is
//! logged; the loop keeps going, and the next successful call flips it back.
//! Bad user input is logged and rejected without touching the store.

use chrono::NaiveDateTime;
use orchidwatch_core::{classify, AlertEvaluator, AlertList, Band, Metric, ScheduleEntry};
use orchidwatch_schemas::{
    new_entry_record, parse_current, parse_history, parse_schedule, SensorSnapshot, StoreConfig,
};
use serde_json::Value;
use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};

use crate::{
    config::{check_data_frequency, DashboardConfig},
    history::{HistorySeries, HistoryWindow},
    ports::{Clock, ConnectionState, DashboardView, RealtimeStore, SensorState},
    reminders::ReminderTracker,
    DashboardError, DashboardResult,
};

/// Everything the controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Store pushed a new `sensors/current` snapshot
    ReadingPushed(Value),
    /// Store pushed a new `irrigation/schedule` snapshot
    ScheduleReplaced(Value),
    /// Periodic re-check
    Tick,
    /// User added a schedule entry
    AddSchedule {
        /// `HH:MM`
        time: String,
        /// Sunday-based day indices
        days: Vec<u8>,
    },
    /// User deleted a schedule entry
    RemoveSchedule {
        /// Store key of the entry
        key: String,
    },
    /// User picked a history window
    SelectHistoryWindow {
        /// Window length in hours
        hours: u32,
    },
    /// User picked a sensor upload interval
    SetDataFrequency {
        /// Interval in minutes
        minutes: u32,
    },
    /// Stop the loop
    Shutdown,
}

/// Whether the loop keeps running after a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next message
    Continue,
    /// Leave the loop
    Stop,
}

/// State owned by the controller between messages
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Latest sensor snapshot, if any
    pub reading: Option<SensorSnapshot>,
    /// Local time the latest reading was taken
    pub last_update: Option<NaiveDateTime>,
    /// Alerts for the latest complete reading
    pub alerts: AlertList,
    /// Current schedule, in store order
    pub schedule: Vec<ScheduleEntry>,
    /// Selected history window
    pub history_window: HistoryWindow,
    /// Last history series shown
    pub history: Option<HistorySeries>,
    /// Selected upload interval (minutes)
    pub data_frequency: u32,
    /// Store connection
    pub connection: ConnectionState,
    /// Sensor presence
    pub sensor: SensorState,
}

/// Greenhouse dashboard controller
pub struct Dashboard<S, C, V> {
    store: S,
    clock: C,
    view: V,
    config: DashboardConfig,
    evaluator: AlertEvaluator,
    reminders: ReminderTracker,
    state: DashboardState,
    inbox: mpsc::Receiver<Message>,
}

impl<S, C, V> Dashboard<S, C, V>
where
    S: RealtimeStore,
    C: Clock,
    V: DashboardView,
{
    /// Build a controller and the sender that feeds it
    pub fn new(store: S, clock: C, view: V, config: DashboardConfig) -> DashboardResult<(Self, mpsc::Sender<Message>)> {
        config.validate()?;
        let (sender, inbox) = mpsc::channel(config.channel_capacity);

        let state = DashboardState {
            reading: None,
            last_update: None,
            alerts: AlertList::new(),
            schedule: Vec::new(),
            history_window: HistoryWindow::new(config.history_hours)?,
            history: None,
            data_frequency: config.data_frequency_minutes,
            connection: ConnectionState::Connecting,
            sensor: SensorState::Waiting,
        };

        let dashboard = Self {
            store,
            clock,
            view,
            reminders: ReminderTracker::new(config.reminder_catch_up_minutes),
            evaluator: AlertEvaluator::default(),
            config,
            state,
            inbox,
        };
        Ok((dashboard, sender))
    }

    /// Current controller state
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The view being rendered into
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial load: schedule, current reading, history
    ///
    /// Every part is attempted even if an earlier one fails. A store failure
    /// is returned ahead of any other error so the connection indicator
    /// reflects it; otherwise the first error is returned.
    pub async fn start(&mut self) -> DashboardResult<()> {
        self.view.render_connection(ConnectionState::Connecting);
        self.view.render_sensor(SensorState::Waiting);
        self.view.render_data_frequency(self.state.data_frequency);
        self.render_reading();

        let schedule = self.reload_schedule().await;
        let current = self.refresh_current().await;
        let history = self.load_history().await;

        let result = first_failure([schedule, current, history]);
        if !matches!(result, Err(DashboardError::Store(_))) {
            // the store answered every call
            self.set_connection(ConnectionState::Connected);
        }
        self.settle(result)
    }

    /// Handle one message to completion
    pub async fn handle(&mut self, message: Message) -> DashboardResult<Flow> {
        log::debug!("handling {message:?}");
        let result = match message {
            Message::Shutdown => return Ok(Flow::Stop),
            Message::ReadingPushed(value) => self.apply_current(&value),
            Message::ScheduleReplaced(value) => self.apply_schedule(&value),
            Message::Tick => self.tick().await,
            Message::AddSchedule { time, days } => self.add_schedule(&time, &days).await,
            Message::RemoveSchedule { key } => self.remove_schedule(&key).await,
            Message::SelectHistoryWindow { hours } => self.select_history_window(hours).await,
            Message::SetDataFrequency { minutes } => self.set_data_frequency(minutes).await,
        };
        self.settle(result).map(|()| Flow::Continue)
    }

    /// Run until [`Message::Shutdown`] or every sender is dropped
    ///
    /// Returns the controller so callers can inspect its final state.
    pub async fn run(mut self) -> Self {
        if let Err(e) = self.start().await {
            log::error!("initial load failed: {e}");
        }

        let mut ticker = interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // the first tick completes immediately; start() already did that work
        ticker.tick().await;

        log::info!("dashboard running, re-check every {}s", self.config.tick_interval_secs);
        loop {
            let message = tokio::select! {
                message = self.inbox.recv() => message.unwrap_or(Message::Shutdown),
                _ = ticker.tick() => Message::Tick,
            };

            // errors are already logged and shown by settle()
            if let Ok(Flow::Stop) = self.handle(message).await {
                break;
            }
        }

        log::info!("dashboard stopped");
        self
    }

    /// Reflect the outcome of a store-backed operation in the view
    fn settle(&mut self, result: DashboardResult<()>) -> DashboardResult<()> {
        match &result {
            Ok(()) => self.set_connection(ConnectionState::Connected),
            Err(e @ DashboardError::Store(_)) => {
                log::error!("{e}");
                self.set_connection(ConnectionState::Error);
            }
            Err(e) => log::warn!("rejected: {e}"),
        }
        result
    }

    fn set_connection(&mut self, connection: ConnectionState) {
        if self.state.connection != connection {
            self.state.connection = connection;
            self.view.render_connection(connection);
        }
    }

    async fn tick(&mut self) -> DashboardResult<()> {
        let refreshed = self.refresh_current().await;
        self.check_reminders();
        refreshed
    }

    async fn refresh_current(&mut self) -> DashboardResult<()> {
        let value = self.store.current().await?;
        self.apply_current(&value)
    }

    fn apply_current(&mut self, value: &Value) -> DashboardResult<()> {
        let snapshot = parse_current(value)?;
        self.state.reading = snapshot.filter(|s| !s.is_empty());
        self.render_reading();
        Ok(())
    }

    fn render_reading(&mut self) {
        let reading = self.state.reading.unwrap_or_default();

        let temperature = classify(reading.temperature, &Band::temperature());
        let humidity = classify(reading.humidity, &Band::humidity());
        self.view.render_status(Metric::Temperature, &temperature);
        self.view.render_status(Metric::Humidity, &humidity);

        if let Some(at) = reading.timestamp.and_then(|ts| self.clock.to_local(ts)) {
            self.state.last_update = Some(at);
            self.view.render_last_update(at);
        }

        // absent metrics are not evaluated
        let alerts = match reading.metrics() {
            Some((t, h)) => self.evaluator.evaluate(t, h, self.clock.now()),
            None => AlertList::new(),
        };
        let previous = std::mem::replace(&mut self.state.alerts, alerts);
        for alert in self.state.alerts.iter().filter(|a| !previous.iter().any(|p| p.kind == a.kind)) {
            log::warn!("{}: {}", alert.kind.title(), alert.message);
        }
        self.view.render_alerts(&self.state.alerts);

        if self.state.reading.is_some() && self.state.sensor != SensorState::Online {
            self.state.sensor = SensorState::Online;
            self.view.render_sensor(SensorState::Online);
        }
    }

    fn check_reminders(&mut self) {
        let Some(local) = self.clock.local_now() else {
            log::warn!("local time unavailable, skipping reminder check");
            return;
        };

        let due = self.reminders.poll(local, self.clock.now(), &self.state.schedule);
        for reminder in due {
            log::info!(
                "irrigation reminder: {} ({} on {})",
                reminder.entry.id,
                reminder.entry.time,
                reminder.entry.days
            );
            self.view.notify_reminder(&reminder.event, &reminder.entry);
        }
    }

    async fn reload_schedule(&mut self) -> DashboardResult<()> {
        let value = self.store.schedule().await?;
        self.apply_schedule(&value)
    }

    fn apply_schedule(&mut self, value: &Value) -> DashboardResult<()> {
        let snapshot = parse_schedule(value)?;
        self.state.schedule = snapshot.entries;
        self.view.render_schedule(&self.state.schedule);
        Ok(())
    }

    async fn add_schedule(&mut self, time: &str, days: &[u8]) -> DashboardResult<()> {
        let record = new_entry_record(time, days, self.clock.now())?;
        let key = self.store.push_schedule_entry(record).await?;
        log::info!("added schedule entry {key} at {time}");
        self.reload_schedule().await
    }

    async fn remove_schedule(&mut self, key: &str) -> DashboardResult<()> {
        self.store.remove_schedule_entry(key).await?;
        log::info!("removed schedule entry {key}");
        self.reload_schedule().await
    }

    async fn select_history_window(&mut self, hours: u32) -> DashboardResult<()> {
        self.state.history_window = HistoryWindow::new(hours)?;
        self.load_history().await
    }

    async fn load_history(&mut self) -> DashboardResult<()> {
        let window = self.state.history_window;
        let since = window.since(self.clock.now());
        let value = self.store.history_since(since).await?;
        let snapshot = parse_history(&value, since)?;

        let clock = &self.clock;
        let series = HistorySeries::build(window, &snapshot.readings, |ts| clock.to_local(ts));
        log::debug!("history: {} points over {}h", series.len(), window.hours());
        self.view.render_history(&series);
        self.state.history = Some(series);
        Ok(())
    }

    async fn set_data_frequency(&mut self, minutes: u32) -> DashboardResult<()> {
        check_data_frequency(minutes)?;
        self.store
            .save_config(&StoreConfig {
                data_frequency: minutes,
            })
            .await?;
        self.state.data_frequency = minutes;
        self.view.render_data_frequency(minutes);
        Ok(())
    }
}

/// Pick the error to settle an initial load with
fn first_failure<const N: usize>(results: [DashboardResult<()>; N]) -> DashboardResult<()> {
    let mut errors: Vec<DashboardError> = results.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        return Ok(());
    }

    let chosen = errors.iter().position(DashboardError::is_store).unwrap_or(0);
    let chosen = errors.remove(chosen);
    for other in errors {
        log::warn!("initial load: {other}");
    }
    Err(chosen)
}
