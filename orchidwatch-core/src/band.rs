//! Band definitions for the status classifier
//!
//! A band is static configuration, one per metric. Two shapes exist:
//!
//! ```text
//! range band (temperature 18-24°C)
//!   out   | acceptable |     optimal      | acceptable |   out
//! --------16-----------18-----------------24-----------26--------
//!
//! centered band (humidity ~80%)
//!   out   | acceptable |     optimal      | acceptable |   out
//! --------70-----------75-------80--------85-----------90--------
//! ```
//!
//! A band is centered when `optimal_center` is set; `low`/`high` are then
//! only used for display.

use crate::constants::bands::{
    HUMIDITY_OPTIMAL_CENTER_PCT, HUMIDITY_OPTIMAL_MAX_PCT, HUMIDITY_OPTIMAL_MIN_PCT,
    HUMIDITY_UNIT, TEMP_OPTIMAL_MAX_C, TEMP_OPTIMAL_MIN_C, TEMP_UNIT,
};

/// Tier boundaries for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Band {
    /// Lower edge of the optimal range
    pub low: f32,
    /// Upper edge of the optimal range
    pub high: f32,
    /// Display unit appended to labels
    pub unit: &'static str,
    /// Optimal point for centered bands
    pub optimal_center: Option<f32>,
}

impl Band {
    /// Range-style band, optimal inside `[low, high]`
    pub fn range(low: f32, high: f32, unit: &'static str) -> Self {
        // Swap rather than reject inverted bounds
        let (low, high) = if low > high { (high, low) } else { (low, high) };

        Self {
            low,
            high,
            unit,
            optimal_center: None,
        }
    }

    /// Centered band around `center`, displayed as `[low, high]`
    pub fn centered(low: f32, high: f32, center: f32, unit: &'static str) -> Self {
        Self {
            optimal_center: Some(center),
            ..Self::range(low, high, unit)
        }
    }

    /// Orchid-house temperature band, optimal 18-24°C
    pub fn temperature() -> Self {
        Self::range(TEMP_OPTIMAL_MIN_C, TEMP_OPTIMAL_MAX_C, TEMP_UNIT)
    }

    /// Orchid-house humidity band, centered on 80%
    pub fn humidity() -> Self {
        Self::centered(
            HUMIDITY_OPTIMAL_MIN_PCT,
            HUMIDITY_OPTIMAL_MAX_PCT,
            HUMIDITY_OPTIMAL_CENTER_PCT,
            HUMIDITY_UNIT,
        )
    }

    /// Whether tiers are measured from a center point
    pub const fn is_centered(&self) -> bool {
        self.optimal_center.is_some()
    }
}
