//! Threshold classifier
//!
//! Maps one metric value and its [`Band`] to a status tier and a display
//! label. The function is pure: the same `(value, band)` always yields the
//! same result, and no history is consulted.
//!
//! ## Tier Rules
//!
//! Range band (no center):
//! - `low <= v <= high` → Optimal
//! - `low - 2 <= v <= high + 2` → Acceptable
//! - otherwise → OutOfRange
//!
//! Centered band:
//! - `|v - center| <= 5` → Optimal
//! - `|v - center| <= 10` → Acceptable
//! - otherwise → OutOfRange
//!
//! A missing value, or one that is NaN or infinite, is `Waiting`. A reading
//! of exactly `0.0` is a real measurement and is classified normally.

use core::fmt::Write;

use heapless::String;

use crate::{
    band::Band,
    constants::{
        bands::{CENTER_ACCEPTABLE_TOLERANCE, CENTER_OPTIMAL_TOLERANCE, RANGE_ACCEPTABLE_MARGIN},
        buffers::MAX_LABEL_LEN,
    },
    traits::{Classify, Evaluable},
};

/// Inline status label text
pub type Label = String<MAX_LABEL_LEN>;

/// Label shown before the first value arrives
pub const WAITING_LABEL: &str = "awaiting data";

/// Classification outcome for a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Inside the optimal range
    Optimal,
    /// Close to the optimal range
    Acceptable,
    /// Far from the optimal range
    OutOfRange,
    /// No usable value yet
    Waiting,
}

impl Tier {
    /// Label prefix for this tier
    pub const fn name(&self) -> &'static str {
        match self {
            Tier::Optimal => "Optimal",
            Tier::Acceptable => "Acceptable",
            Tier::OutOfRange => "Out of range",
            Tier::Waiting => "Waiting",
        }
    }

    /// Badge class used by the view
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Tier::Optimal => "optimal",
            Tier::Acceptable => "warning",
            Tier::OutOfRange => "danger",
            Tier::Waiting => "waiting",
        }
    }
}

/// Tier plus display label for one metric
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusResult {
    /// Classification outcome
    pub tier: Tier,
    /// Text such as `"Optimal (21.5°C)"`
    pub label: Label,
}

impl StatusResult {
    /// Result for a metric without data
    pub fn waiting() -> Self {
        let mut label = Label::new();
        // Fits: WAITING_LABEL is far below MAX_LABEL_LEN
        let _ = label.push_str(WAITING_LABEL);
        Self {
            tier: Tier::Waiting,
            label,
        }
    }

    fn measured(tier: Tier, value: f32, unit: &str) -> Self {
        let mut label = Label::new();
        // MAX_LABEL_LEN holds the widest finite f32 with one decimal
        let _ = write!(label, "{} ({:.1}{})", tier.name(), value, unit);
        Self { tier, label }
    }
}

/// Classify a metric value against its band
pub fn classify(value: Option<f32>, band: &Band) -> StatusResult {
    let value = match value {
        Some(v) if v.is_valid() => v,
        _ => return StatusResult::waiting(),
    };

    let tier = match band.optimal_center {
        Some(center) => centered_tier(value, center),
        None => range_tier(value, band.low, band.high),
    };

    StatusResult::measured(tier, value, band.unit)
}

fn range_tier(value: f32, low: f32, high: f32) -> Tier {
    if value >= low && value <= high {
        Tier::Optimal
    } else if value >= low - RANGE_ACCEPTABLE_MARGIN && value <= high + RANGE_ACCEPTABLE_MARGIN {
        Tier::Acceptable
    } else {
        Tier::OutOfRange
    }
}

fn centered_tier(value: f32, center: f32) -> Tier {
    let distance = if value >= center { value - center } else { center - value };

    if distance <= CENTER_OPTIMAL_TOLERANCE {
        Tier::Optimal
    } else if distance <= CENTER_ACCEPTABLE_TOLERANCE {
        Tier::Acceptable
    } else {
        Tier::OutOfRange
    }
}

impl Classify for Band {
    fn classify(&self, value: Option<f32>) -> StatusResult {
        classify(value, self)
    }
}
