//! Time sources and timestamp arithmetic
//!
//! The core never reads a clock on its own. Callers pass timestamps in,
//! usually from a [`TimeSource`]:
//! - System clock (when `std` is available)
//! - Fixed clock (tests, replays)

use crate::constants::time::MS_PER_HOUR;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of epoch time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Start of a look-back window of `hours` ending at `now`
///
/// Saturates at the epoch instead of wrapping.
pub fn window_start(now: Timestamp, hours: u32) -> Timestamp {
    now.saturating_sub(u64::from(hours) * MS_PER_HOUR)
}
