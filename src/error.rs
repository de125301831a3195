//! Error types for probetable
//!
//! Provides a unified error type for all table operations.

use thiserror::Error;

/// Result type alias using TableError
pub type Result<T> = std::result::Result<T, TableError>;

/// Unified error type for probetable operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    /// The table already holds `max_size` entries and the key is new.
    #[error("Max capacity of {max_size} entries reached, cannot insert more elements")]
    CapacityExceeded { max_size: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
