//! spheroid-filter - Image filtering operations
//!
//! This crate provides the filter primitives the segmentation chains are
//! built from:
//!
//! - Working-copy normalization (16-bit to 8-bit rescale)
//! - Unsharp masking
//! - Windowed mean and variance filters
//! - Rank filtering (median)
//! - Isodata auto-thresholding and binarization

mod error;
pub mod enhance;
pub mod normalize;
pub mod rank;
pub mod threshold;
pub mod windowed;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use enhance::unsharp_mask;
pub use normalize::normalize_to_8bit;
pub use rank::median_filter;
pub use threshold::{binarize, isodata_threshold, threshold_above};
pub use windowed::{windowed_mean, windowed_variance};
