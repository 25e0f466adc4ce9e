//! Alert Rule Tables
//!
//! ## Overview
//!
//! Each monitored metric has a small, fixed rule table. A table is checked
//! most-severe-first and the first match wins, so a metric produces at most
//! one alert per evaluation.
//!
//! ### Temperature
//! ```text
//! t < 16          Danger   low-critical
//! 16 <= t < 18    Warning  low
//! t > 26          Danger   high-critical
//! 24 < t <= 26    Warning  high
//! 18 <= t <= 24   -
//! ```
//!
//! ### Humidity
//! ```text
//! h < 70          Warning  low
//! h > 90          Warning  high
//! 70 <= h <= 90   -
//! ```
//!
//! Note the humidity alert band (70-90) is the *acceptable* band of the
//! status classifier, not the optimal one: a humidity of 72% shows an
//! "Acceptable" badge but raises no alert. Temperature alerts start as soon
//! as the optimal range is left.
//!
//! ## Customization
//!
//! ```rust
//! use orchidwatch_core::rules::{TemperatureRule, HumidityRule};
//!
//! // Warm-growing Vanda house
//! let vanda = TemperatureRule::new_with_limits(18.0, 21.0, 29.0, 32.0);
//!
//! // Drier Dendrobium rest period
//! let rest = HumidityRule::new_with_limits(50.0, 80.0);
//! # let _ = (vanda, rest);
//! ```

mod humidity;
mod temperature;
mod utils;

pub use humidity::HumidityRule;
pub use temperature::TemperatureRule;
