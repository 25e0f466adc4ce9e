//! Alert evaluator
//!
//! Runs the temperature and humidity rule tables over one `(t, h)` pair and
//! collects the result in evaluation order: temperature first, then
//! humidity. Each table contributes at most one alert, so the list never
//! holds more than [`MAX_ALERTS`] entries and lives on the stack.
//!
//! An empty list is the healthy case. "No data yet" is not represented
//! here at all; callers skip evaluation until both metrics are present and
//! show the classifier's `Waiting` tier instead.

use heapless::Vec;

use crate::{
    constants::buffers::MAX_ALERTS,
    events::{Alert, Reading},
    rules::{HumidityRule, TemperatureRule},
    time::Timestamp,
    traits::AlertRule,
};

/// Ordered alerts from one evaluation
pub type AlertList = Vec<Alert, MAX_ALERTS>;

/// Combines the per-metric rule tables
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlertEvaluator {
    temperature: TemperatureRule,
    humidity: HumidityRule,
}

impl AlertEvaluator {
    /// Evaluator with custom rule tables
    pub fn new(temperature: TemperatureRule, humidity: HumidityRule) -> Self {
        Self { temperature, humidity }
    }

    /// Evaluate one temperature/humidity pair
    pub fn evaluate(&self, temperature: f32, humidity: f32, now: Timestamp) -> AlertList {
        let mut alerts = AlertList::new();

        let checks = [
            self.temperature.check(temperature, now),
            self.humidity.check(humidity, now),
        ];

        for alert in checks.into_iter().flatten() {
            // Capacity is one slot per rule table
            let _ = alerts.push(alert);
        }

        log_debug!(
            "evaluated t={} h={}: {} alert(s)",
            temperature,
            humidity,
            alerts.len()
        );

        alerts
    }

    /// Evaluate a complete reading, stamping alerts with `now`
    pub fn evaluate_reading(&self, reading: &Reading, now: Timestamp) -> AlertList {
        self.evaluate(reading.temperature, reading.humidity, now)
    }
}

/// Evaluate with the default orchid-house rule tables
pub fn evaluate(temperature: f32, humidity: f32, now: Timestamp) -> AlertList {
    AlertEvaluator::default().evaluate(temperature, humidity, now)
}
