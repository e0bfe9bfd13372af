//! Error types for spheroid-io

use thiserror::Error;

/// I/O error type
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying file-system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spheroid_core::Error),

    /// Region payload error
    #[error("region error: {0}")]
    Region(#[from] spheroid_region::RegionError),

    /// Image decode error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Unsupported image format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed container or table data
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for I/O operations
pub type IoResult<T> = Result<T, IoError>;
