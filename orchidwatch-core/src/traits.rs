//! Core traits for evaluators
//!
//! Two seams: something that maps a value to a status tier, and something
//! that maps a value to at most one alert. Keep them small; the controller
//! only ever needs these two calls.

use crate::classifier::StatusResult;
use crate::events::{Alert, Metric};
use crate::time::Timestamp;

/// Maps an optional metric value to a status tier and label
pub trait Classify {
    /// Classify a value; `None` means no data has arrived yet
    fn classify(&self, value: Option<f32>) -> StatusResult;
}

/// Rule table for one metric - implement this for each monitored signal
pub trait AlertRule {
    /// Metric the rule applies to
    fn metric(&self) -> Metric;

    /// Check a single value, returning the most severe matching alert
    ///
    /// Returns at most one alert. Non-finite values never alert.
    fn check(&self, value: f32, now: Timestamp) -> Option<Alert>;
}

/// Trait for values that can be evaluated
pub trait Evaluable {
    /// Check if the value is a real measurement (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Evaluable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
