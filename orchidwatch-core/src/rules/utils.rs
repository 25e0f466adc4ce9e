//! Shared helpers for alert rules
//!
//! All helpers are pure and allocation-free; messages are written into
//! inline buffers.

use core::fmt::Write;

use crate::{
    events::{Alert, AlertKind, Message, Severity},
    time::Timestamp,
};

/// Compose an alert message
///
/// `"<Metric> is <value><unit>, <relation> (<reference>)"`, value to one
/// decimal place.
pub fn message(metric: &str, value: f32, unit: &str, relation: &str, reference: &str) -> Message {
    let mut text = Message::new();
    // MAX_MESSAGE_LEN covers the widest finite f32 plus the longest relation
    let _ = write!(text, "{} is {:.1}{}, {} ({})", metric, value, unit, relation, reference);
    text
}

/// Build an alert from its parts
pub fn alert(severity: Severity, kind: AlertKind, message: Message, now: Timestamp) -> Alert {
    Alert {
        severity,
        kind,
        message,
        produced_at: now,
    }
}
