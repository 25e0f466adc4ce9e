//! Error Types for Schedule and Reading Construction
//!
//! ## Where Errors Can Happen
//!
//! The evaluation functions themselves are total: absent metric values map to
//! [`Tier::Waiting`](crate::Tier::Waiting) and malformed schedule entries simply
//! never match. Errors only surface when typed values are *built* from
//! untrusted input, which happens at the store boundary or when a user submits
//! a new irrigation entry:
//!
//! - `InvalidTime`: not a zero-padded 24-hour `HH:MM`
//! - `InvalidDay`: day index outside 0..=6
//! - `EmptyDays`: an entry must run on at least one weekday
//! - `IdTooLong`: store keys are kept inline, so their length is bounded
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use orchidwatch_core::{CoreError, TimeOfDay};
//!
//! match TimeOfDay::parse("7:00") {
//!     Ok(time) => { let _ = time; }
//!     Err(CoreError::InvalidTime { reason }) => {
//!         // Reject the form submission and show the reason
//!         let _ = reason;
//!     }
//!     Err(_) => {}
//! }
//! ```
//!
//! Like the rest of the core, every variant is `Copy` and carries only
//! `&'static str` or integer context, so errors never allocate.

use thiserror_no_std::Error;

/// Result type for core constructors
pub type CoreResult<T> = Result<T, CoreError>;

/// Construction errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Time of day is not a valid `HH:MM`
    #[error("Invalid time of day: {reason}")]
    InvalidTime {
        /// Which part of the `HH:MM` string was wrong
        reason: &'static str,
    },

    /// Weekday index outside 0 (Sunday) ..= 6 (Saturday)
    #[error("Invalid day index {day}, expected 0-6")]
    InvalidDay {
        /// The rejected index
        day: u8,
    },

    /// Schedule entry without any weekday
    #[error("Schedule entry needs at least one day")]
    EmptyDays,

    /// Entry identifier does not fit the inline buffer
    #[error("Entry id is {len} bytes, limit is {max}")]
    IdTooLong {
        /// Length of the rejected id
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}
