//! Temperature alert rule
//!
//! Four trip points, symmetric around the optimal range: a warning as soon
//! as the range is left, danger two degrees further out.

use crate::{
    constants::alerts::{
        TEMP_CRITICAL_HIGH_C, TEMP_CRITICAL_LOW_C, TEMP_OPTIMAL_REFERENCE, TEMP_WARNING_HIGH_C,
        TEMP_WARNING_LOW_C,
    },
    constants::bands::TEMP_UNIT,
    events::{Alert, AlertKind, Metric, Severity},
    time::Timestamp,
    traits::{AlertRule, Evaluable},
};

use super::utils;

/// Temperature rule table for Celsius readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRule {
    /// Below this: danger
    critical_low_c: f32,

    /// Below this: warning
    warning_low_c: f32,

    /// Above this: warning
    warning_high_c: f32,

    /// Above this: danger
    critical_high_c: f32,
}

impl Default for TemperatureRule {
    fn default() -> Self {
        Self {
            critical_low_c: TEMP_CRITICAL_LOW_C,
            warning_low_c: TEMP_WARNING_LOW_C,
            warning_high_c: TEMP_WARNING_HIGH_C,
            critical_high_c: TEMP_CRITICAL_HIGH_C,
        }
    }
}

impl TemperatureRule {
    /// Create a rule with custom trip points
    ///
    /// Inverted pairs are swapped so a critical limit never sits inside its
    /// warning limit.
    pub fn new_with_limits(critical_low: f32, warning_low: f32, warning_high: f32, critical_high: f32) -> Self {
        let (critical_low, warning_low) = if critical_low > warning_low {
            (warning_low, critical_low)
        } else {
            (critical_low, warning_low)
        };
        let (warning_high, critical_high) = if warning_high > critical_high {
            (critical_high, warning_high)
        } else {
            (warning_high, critical_high)
        };

        Self {
            critical_low_c: critical_low,
            warning_low_c: warning_low,
            warning_high_c: warning_high,
            critical_high_c: critical_high,
        }
    }

    /// Classify a value against the table, most severe first
    fn matching(&self, value: f32) -> Option<(Severity, AlertKind, &'static str)> {
        if value < self.critical_low_c {
            Some((Severity::Danger, AlertKind::TemperatureLowCritical, "well below the optimal range"))
        } else if value < self.warning_low_c {
            Some((Severity::Warning, AlertKind::TemperatureLow, "below the optimal range"))
        } else if value > self.critical_high_c {
            Some((Severity::Danger, AlertKind::TemperatureHighCritical, "well above the optimal range"))
        } else if value > self.warning_high_c {
            Some((Severity::Warning, AlertKind::TemperatureHigh, "above the optimal range"))
        } else {
            None
        }
    }
}

impl AlertRule for TemperatureRule {
    fn metric(&self) -> Metric {
        Metric::Temperature
    }

    fn check(&self, value: f32, now: Timestamp) -> Option<Alert> {
        if !value.is_valid() {
            return None;
        }

        let (severity, kind, relation) = self.matching(value)?;
        let message = utils::message("Temperature", value, TEMP_UNIT, relation, TEMP_OPTIMAL_REFERENCE);

        Some(utils::alert(severity, kind, message, now))
    }
}
