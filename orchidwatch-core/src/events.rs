//! Values flowing out of (and into) the evaluation core
//!
//! ## Overview
//!
//! A [`Reading`] comes in from the realtime store; [`Alert`]s and
//! [`ReminderEvent`]s go out to the view. All of them are plain `Copy` or
//! inline-buffer values, produced fresh on each evaluation and never
//! retained by the core.
//!
//! ## Alert Kinds
//!
//! An alert kind is a metric plus a direction. The full table:
//!
//! ```text
//! kind                          severity   trigger
//! temperature-low-critical      Danger     t < 16
//! temperature-low               Warning    16 <= t < 18
//! temperature-high-critical     Danger     t > 26
//! temperature-high              Warning    24 < t <= 26
//! humidity-low                  Warning    h < 70
//! humidity-high                 Warning    h > 90
//! ```

use core::fmt;

use heapless::String;

use crate::{
    constants::buffers::MAX_MESSAGE_LEN,
    schedule::EntryId,
    time::Timestamp,
};

/// Inline alert message text
pub type Message = String<MAX_MESSAGE_LEN>;

/// One observation of the greenhouse
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Air temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// When the reading was taken (epoch ms)
    pub timestamp: Timestamp,
}

impl Reading {
    /// Build a reading
    pub const fn new(temperature: f32, humidity: f32, timestamp: Timestamp) -> Self {
        Self { temperature, humidity, timestamp }
    }
}

/// The two monitored signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Air temperature
    Temperature,
    /// Relative humidity
    Humidity,
}

impl Metric {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
        }
    }
}

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Outside the optimal range, act soon
    Warning,
    /// Plants at risk, act now
    Danger,
}

impl Severity {
    /// Badge class used by the view
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Metric plus direction of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertKind {
    /// Temperature far below the optimal range
    TemperatureLowCritical,
    /// Temperature just below the optimal range
    TemperatureLow,
    /// Temperature far above the optimal range
    TemperatureHighCritical,
    /// Temperature just above the optimal range
    TemperatureHigh,
    /// Humidity below the acceptable band
    HumidityLow,
    /// Humidity above the acceptable band
    HumidityHigh,
}

impl AlertKind {
    /// Metric this kind belongs to
    pub const fn metric(&self) -> Metric {
        match self {
            AlertKind::TemperatureLowCritical
            | AlertKind::TemperatureLow
            | AlertKind::TemperatureHighCritical
            | AlertKind::TemperatureHigh => Metric::Temperature,
            AlertKind::HumidityLow | AlertKind::HumidityHigh => Metric::Humidity,
        }
    }

    /// Direction part of the kind
    pub const fn direction(&self) -> &'static str {
        match self {
            AlertKind::TemperatureLowCritical => "low-critical",
            AlertKind::TemperatureLow | AlertKind::HumidityLow => "low",
            AlertKind::TemperatureHighCritical => "high-critical",
            AlertKind::TemperatureHigh | AlertKind::HumidityHigh => "high",
        }
    }

    /// Stable identifier, `metric-direction`
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertKind::TemperatureLowCritical => "temperature-low-critical",
            AlertKind::TemperatureLow => "temperature-low",
            AlertKind::TemperatureHighCritical => "temperature-high-critical",
            AlertKind::TemperatureHigh => "temperature-high",
            AlertKind::HumidityLow => "humidity-low",
            AlertKind::HumidityHigh => "humidity-high",
        }
    }

    /// Short heading shown above the message
    pub const fn title(&self) -> &'static str {
        match self {
            AlertKind::TemperatureLowCritical => "Critical low temperature",
            AlertKind::TemperatureLow => "Low temperature",
            AlertKind::TemperatureHighCritical => "Critical high temperature",
            AlertKind::TemperatureHigh => "High temperature",
            AlertKind::HumidityLow => "Low humidity",
            AlertKind::HumidityHigh => "High humidity",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A threshold alert produced by one evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    /// How urgent
    pub severity: Severity,
    /// Metric and direction
    pub kind: AlertKind,
    /// Human-readable text with the value and the optimal reference
    pub message: Message,
    /// Evaluation time (epoch ms)
    pub produced_at: Timestamp,
}

/// Signal that a schedule entry is due
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReminderEvent {
    /// The entry that matched
    pub entry_id: EntryId,
    /// When the reminder was raised (epoch ms)
    pub fired_at: Timestamp,
}
