//! Inline Buffer Capacities
//!
//! The core never allocates; strings it produces live in `heapless`
//! buffers sized here.

/// Maximum alerts per evaluation: one per metric.
pub const MAX_ALERTS: usize = 2;

/// Capacity of a status label such as `"Out of range (-12.5°C)"`.
///
/// Sized so the widest finite `f32` (39 integer digits) still fits.
pub const MAX_LABEL_LEN: usize = 64;

/// Capacity of an alert message.
pub const MAX_MESSAGE_LEN: usize = 160;

/// Capacity of a schedule entry id.
///
/// Realtime-store push keys are 20 characters; this leaves headroom for
/// other key schemes.
pub const MAX_ENTRY_ID_LEN: usize = 32;
