//! spheroid-io - File I/O for the spheroid segmentation tool
//!
//! This crate covers everything that touches the file system:
//!
//! - TIFF decoding into [`spheroid_core::DynRaster`]
//! - Input-folder listing (`.tif` files, sorted)
//! - ZIP region archives (deflate via `miniz_oxide`)
//! - Results-table read/write

pub mod archive;
mod error;
pub mod listing;
pub mod results;
pub mod roiset;
pub mod tiff;

pub use archive::{ArchiveEntry, read_zip, write_zip};
pub use error::{IoError, IoResult};
pub use listing::list_tiff_files;
pub use results::{read_lines, write_results};
pub use roiset::{load_roi_archive, save_roi_archive};
pub use tiff::{open_image, read_tiff};
