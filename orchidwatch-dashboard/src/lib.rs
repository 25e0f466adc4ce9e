//! Greenhouse Dashboard Controller
//!
//! ## Overview
//!
//! The thin layer between the realtime store, the evaluation core and a
//! rendering surface. It owns all mutable dashboard state and runs it from
//! a single task:
//!
//! - store pushes and user actions arrive as [`Message`]s on a channel
//! - a fixed-period timer re-reads the current reading, re-evaluates alerts
//!   and checks the irrigation schedule
//! - every result is pushed to a [`DashboardView`]
//!
//! Nothing here decides *what* is optimal or due; that is
//! `orchidwatch-core`. Nothing here decodes JSON by hand; that is
//! `orchidwatch-schemas`.
//!
//! ## Ports
//!
//! | Port | Kind | Production | Tests |
//! |------|------|------------|-------|
//! | [`RealtimeStore`] | async trait | hosted store adapter | in-memory map |
//! | [`Clock`] | sync trait | [`SystemClock`] | [`FixedClock`] |
//! | [`DashboardView`] | sync trait | UI bindings | recording view |
//!
//! ## Reminders
//!
//! A schedule entry fires at most once per matching wall-clock minute, even
//! when two ticks land in the same minute. A tick that arrives late still
//! checks the minutes it skipped, up to `reminder_catch_up_minutes`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use orchidwatch_dashboard::{Dashboard, DashboardConfig, Message, SystemClock};
//! # use orchidwatch_dashboard::{RealtimeStore, DashboardView};
//! # async fn wire<S: RealtimeStore + 'static, V: DashboardView + 'static>(store: S, view: V)
//! #     -> Result<(), orchidwatch_dashboard::DashboardError> {
//!
//! let config = DashboardConfig::from_json(r#"{ "history_hours": 48 }"#)?;
//! let (dashboard, sender) = Dashboard::new(store, SystemClock, view, config)?;
//! let task = tokio::spawn(dashboard.run());
//!
//! sender
//!     .send(Message::AddSchedule { time: "07:00".into(), days: vec![1, 3, 5] })
//!     .await
//!     .ok();
//! sender.send(Message::Shutdown).await.ok();
//! task.await.ok();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod ports;
pub mod reminders;

pub use config::{DashboardConfig, ALLOWED_DATA_FREQUENCIES, ALLOWED_HISTORY_HOURS};
pub use controller::{Dashboard, DashboardState, Flow, Message};
pub use error::{DashboardError, DashboardResult, StoreError};
pub use history::{HistoryPoint, HistorySeries, HistoryWindow};
pub use ports::{
    Clock, ConnectionState, DashboardView, FixedClock, RealtimeStore, SensorState, SystemClock,
};
pub use reminders::{DueReminder, ReminderTracker};
