//! Error types for spheroid-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spheroid_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Malformed or unsupported region serialization
    #[error("serialization error: {0}")]
    Serial(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
