//! Error types for the edges of the game (config loading, persistence)
//!
//! The simulation itself has no error paths.

use thiserror::Error;

/// Failure to load or validate a [`crate::Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid range: {field} min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Value out of range: {field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Value out of range: {field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Value out of range: {field} must be in [0, 1), got {value}")]
    NotUnitFraction { field: &'static str, value: f64 },
}

/// Failure to read or write the best-score slot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
