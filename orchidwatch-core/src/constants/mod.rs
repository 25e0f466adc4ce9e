//! Constants for OrchidWatch Core
//!
//! Every threshold the dashboard applies lives here, with the unit in the
//! name. The values describe a cool-to-intermediate orchid house
//! (Phalaenopsis, Cattleya, Oncidium): days around 18-24°C and relative
//! humidity around 80%.
//!
//! ## Organization
//!
//! - **Bands**: tier boundaries used by the status classifier
//! - **Alerts**: trip points for warning and danger alerts
//! - **Time**: unit conversions and controller cadence
//! - **Buffers**: inline capacities for labels, messages and ids

/// Tier boundaries for the status classifier.
pub mod bands;

/// Alert trip points per metric.
pub mod alerts;

/// Time unit conversions and scheduling cadence.
pub mod time;

/// Inline buffer capacities.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use bands::{
    RANGE_ACCEPTABLE_MARGIN, CENTER_OPTIMAL_TOLERANCE, CENTER_ACCEPTABLE_TOLERANCE,
    TEMP_OPTIMAL_MIN_C, TEMP_OPTIMAL_MAX_C, HUMIDITY_OPTIMAL_CENTER_PCT,
};

pub use alerts::{
    TEMP_CRITICAL_LOW_C, TEMP_WARNING_LOW_C, TEMP_WARNING_HIGH_C, TEMP_CRITICAL_HIGH_C,
    HUMIDITY_WARNING_LOW_PCT, HUMIDITY_WARNING_HIGH_PCT,
};

pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MINUTES_PER_HOUR, DAYS_PER_WEEK,
    REMINDER_TICK_INTERVAL_MS,
};

pub use buffers::{MAX_ALERTS, MAX_LABEL_LEN, MAX_MESSAGE_LEN, MAX_ENTRY_ID_LEN};
