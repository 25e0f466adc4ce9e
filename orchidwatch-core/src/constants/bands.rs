//! Status Band Boundaries
//!
//! Two band shapes are used. A *range* band is optimal inside `[low, high]`
//! and acceptable within a fixed margin outside it; temperature uses one. A
//! *centered* band grades the distance from a single optimal point; humidity
//! uses one. The tier widths apply to every band of a shape, in the band's
//! own unit.

// ===== TIER WIDTHS (ANY BAND) =====

/// Margin outside a range band still considered acceptable.
///
/// Gives the acceptable band `[16, 26]` for the default temperature range.
pub const RANGE_ACCEPTABLE_MARGIN: f32 = 2.0;

/// Distance from a band center still classified optimal.
///
/// Gives the optimal humidity band `[75, 85]`.
pub const CENTER_OPTIMAL_TOLERANCE: f32 = 5.0;

/// Distance from a band center still classified acceptable.
///
/// Gives the acceptable humidity band `[70, 90]`.
pub const CENTER_ACCEPTABLE_TOLERANCE: f32 = 10.0;

// ===== TEMPERATURE (RANGE BAND) =====

/// Lower edge of the optimal temperature range (°C).
///
/// Below this orchids slow down; most intermediate growers keep night
/// temperatures at or above 18°C.
pub const TEMP_OPTIMAL_MIN_C: f32 = 18.0;

/// Upper edge of the optimal temperature range (°C).
pub const TEMP_OPTIMAL_MAX_C: f32 = 24.0;

// ===== HUMIDITY (CENTERED BAND) =====

/// Optimal relative humidity (%).
pub const HUMIDITY_OPTIMAL_CENTER_PCT: f32 = 80.0;

/// Lower edge of the optimal humidity band (%), as displayed.
pub const HUMIDITY_OPTIMAL_MIN_PCT: f32 = HUMIDITY_OPTIMAL_CENTER_PCT - CENTER_OPTIMAL_TOLERANCE;

/// Upper edge of the optimal humidity band (%), as displayed.
pub const HUMIDITY_OPTIMAL_MAX_PCT: f32 = HUMIDITY_OPTIMAL_CENTER_PCT + CENTER_OPTIMAL_TOLERANCE;

// ===== UNITS =====

/// Display unit for temperature.
pub const TEMP_UNIT: &str = "°C";

/// Display unit for relative humidity.
pub const HUMIDITY_UNIT: &str = "%";
