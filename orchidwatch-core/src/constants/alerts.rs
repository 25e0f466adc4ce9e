//! Alert Trip Points
//!
//! Alerts are coarser than status tiers. Temperature has a warning and a
//! danger level on each side; humidity only warns. A value exactly on a
//! boundary belongs to the less severe side (e.g. 16.0°C is a warning,
//! 26.0°C is a warning, 70.0% is fine).

// ===== TEMPERATURE =====

/// Below this: danger, plants at risk of chilling injury (°C).
pub const TEMP_CRITICAL_LOW_C: f32 = 16.0;

/// Below this: warning, under the optimal range (°C).
pub const TEMP_WARNING_LOW_C: f32 = 18.0;

/// Above this: warning, over the optimal range (°C).
pub const TEMP_WARNING_HIGH_C: f32 = 24.0;

/// Above this: danger, heat stress and leaf scorch (°C).
pub const TEMP_CRITICAL_HIGH_C: f32 = 26.0;

// ===== HUMIDITY =====

/// Below this: warning, roots and leaves dry out (%RH).
pub const HUMIDITY_WARNING_LOW_PCT: f32 = 70.0;

/// Above this: warning, fungal and bacterial rot risk (%RH).
pub const HUMIDITY_WARNING_HIGH_PCT: f32 = 90.0;

// ===== MESSAGE REFERENCES =====

/// Optimal reference quoted in temperature alert messages.
pub const TEMP_OPTIMAL_REFERENCE: &str = "18-24°C";

/// Optimal reference quoted in humidity alert messages.
pub const HUMIDITY_OPTIMAL_REFERENCE: &str = "~80%";
