//! Evaluation core for OrchidWatch
//!
//! Turns raw greenhouse readings into dashboard state for an orchid house:
//! status tiers per metric, threshold alerts, and irrigation reminders.
//! Everything here is a pure function of its inputs.
//!
//! Key constraints:
//! - No I/O, no clocks read implicitly, no hidden state
//! - No heap allocation (fixed capacity `heapless` containers)
//! - Runs under `no_std` when the `std` feature is off
//!
//! ```no_run
//! use orchidwatch_core::{classify, AlertEvaluator, Band, Tier};
//!
//! let status = classify(Some(21.5), &Band::temperature());
//! assert_eq!(status.tier, Tier::Optimal);
//!
//! let alerts = AlertEvaluator::default().evaluate(15.0, 50.0, 1_700_000_000_000);
//! assert_eq!(alerts.len(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod alerts;
pub mod band;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod events;
pub mod rules;
pub mod schedule;
pub mod time;
pub mod traits;

// Public API
pub use alerts::{evaluate, AlertEvaluator, AlertList};
pub use band::Band;
pub use classifier::{classify, StatusResult, Tier};
pub use errors::{CoreError, CoreResult};
pub use events::{Alert, AlertKind, Metric, Reading, ReminderEvent, Severity};
pub use rules::{HumidityRule, TemperatureRule};
pub use schedule::{
    due_entries, entry_id, is_due, weekday_from_index, weekday_index,
    DaySet, EntryId, ScheduleEntry, TimeOfDay, WallClock,
};
pub use time::Timestamp;
pub use traits::{AlertRule, Classify};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
