//! Time-Related Constants
//!
//! Conversion factors and the cadence of the dashboard's periodic re-check.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes per day.
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// Days per week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE as u64;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR as u64;

// ===== CONTROLLER CADENCE =====

/// Period of the alert/reminder re-check (milliseconds).
///
/// Schedule entries have minute resolution, so one check per minute is the
/// slowest cadence that can still see every entry.
pub const REMINDER_TICK_INTERVAL_MS: u64 = MS_PER_MINUTE;
