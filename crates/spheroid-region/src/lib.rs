//! spheroid-region - Region extraction and morphometry
//!
//! This crate provides everything between a binary mask and a measured
//! region set:
//!
//! - Connected-component labeling (4- and 8-way)
//! - Moore boundary tracing for perimeter estimation
//! - Particle-style extraction with size/circularity/edge filters
//! - Region enlargement by Euclidean disk dilation
//! - Hole filling for mask post-processing
//! - Morphometric measurement records
//! - Binary region serialization for archive storage

pub mod border;
pub mod conncomp;
pub mod enlarge;
mod error;
pub mod extract;
pub mod fill;
pub mod measure;
pub mod roi;
pub mod serial;

pub use error::{RegionError, RegionResult};

// Re-export commonly used items
pub use border::{contour_perimeter, perimeter, trace_outer_boundary};
pub use conncomp::{Component, Connectivity, LabelMap, label_components};
pub use enlarge::enlarge_roi;
pub use extract::{ExtractParams, extract_rois};
pub use fill::fill_holes;
pub use measure::{Measurement, measure_roi};
pub use roi::{Derivation, Roi};
