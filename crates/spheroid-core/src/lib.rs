//! Spheroid Core - Basic data structures for spheroid segmentation
//!
//! This crate provides the fundamental containers used throughout the
//! spheroid measurement workspace:
//!
//! - [`GrayImage`] / [`Gray16Image`] - grayscale rasters (8- and 16-bit)
//! - [`DynRaster`] - a decoded source image of either depth
//! - [`Bitmap`] - packed 1-bit binary mask
//! - [`Box`] - rectangle regions
//!
//! All image processing, region extraction, and I/O crates in the
//! workspace build on these types.

pub mod bitmap;
pub mod box_;
pub mod error;
pub mod gray;

pub use bitmap::Bitmap;
pub use box_::Box;
pub use error::{Error, Result};
pub use gray::{DynRaster, Gray16Image, GrayImage};
