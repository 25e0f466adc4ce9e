//! Humidity alert rule
//!
//! Humidity only warns. Orchids tolerate a wide swing for a few hours, so
//! the trip points sit on the edges of the acceptable band rather than the
//! optimal one.

use crate::{
    constants::alerts::{HUMIDITY_OPTIMAL_REFERENCE, HUMIDITY_WARNING_HIGH_PCT, HUMIDITY_WARNING_LOW_PCT},
    constants::bands::HUMIDITY_UNIT,
    events::{Alert, AlertKind, Metric, Severity},
    time::Timestamp,
    traits::{AlertRule, Evaluable},
};

use super::utils;

/// Humidity rule table for relative humidity percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityRule {
    /// Below this: warning
    low_percent: f32,

    /// Above this: warning
    high_percent: f32,
}

impl Default for HumidityRule {
    fn default() -> Self {
        Self {
            low_percent: HUMIDITY_WARNING_LOW_PCT,
            high_percent: HUMIDITY_WARNING_HIGH_PCT,
        }
    }
}

impl HumidityRule {
    /// Create a rule with custom trip points
    pub fn new_with_limits(low: f32, high: f32) -> Self {
        let (low, high) = if low > high { (high, low) } else { (low, high) };

        Self {
            low_percent: low,
            high_percent: high,
        }
    }
}

impl AlertRule for HumidityRule {
    fn metric(&self) -> Metric {
        Metric::Humidity
    }

    fn check(&self, value: f32, now: Timestamp) -> Option<Alert> {
        if !value.is_valid() {
            return None;
        }

        let (kind, relation) = if value < self.low_percent {
            (AlertKind::HumidityLow, "below the optimal level")
        } else if value > self.high_percent {
            (AlertKind::HumidityHigh, "above the optimal level")
        } else {
            return None;
        };

        let message = utils::message("Humidity", value, HUMIDITY_UNIT, relation, HUMIDITY_OPTIMAL_REFERENCE);
        Some(utils::alert(Severity::Warning, kind, message, now))
    }
}
