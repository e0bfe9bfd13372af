//! Error types for spheroid-pipeline

use thiserror::Error;

/// Errors that can abort an image cycle or the whole batch
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spheroid_core::Error),

    /// Filtering error
    #[error("filter error: {0}")]
    Filter(#[from] spheroid_filter::FilterError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] spheroid_region::RegionError),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] spheroid_io::IoError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
