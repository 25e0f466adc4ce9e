//! Controller errors

use orchidwatch_core::CoreError;
use orchidwatch_schemas::SchemaError;
use thiserror::Error;

/// Result type for controller operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Failures reported by a [`RealtimeStore`](crate::RealtimeStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection to the store
    #[error("Not connected")]
    NotConnected,

    /// Store rules rejected the request
    #[error("Permission denied at {path}")]
    PermissionDenied {
        /// Store path that was refused
        path: String,
    },

    /// Store request failed
    #[error("Store request failed: {0}")]
    Request(String),
}

/// Everything that can go wrong while handling a message
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Store call failed; the view shows the connection as broken
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Snapshot could not be decoded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// User input rejected by the core types
    #[error("Invalid input: {0}")]
    Invalid(#[from] CoreError),

    /// Configuration value not allowed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// True when the store itself failed (as opposed to bad input)
    pub fn is_store(&self) -> bool {
        matches!(self, DashboardError::Store(_))
    }
}
