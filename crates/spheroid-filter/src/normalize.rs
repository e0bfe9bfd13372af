//! Working-copy normalization
//!
//! Every decoded source image is converted to an 8-bit working copy
//! before entering a filter chain. 16-bit data is linearly rescaled to
//! the full 8-bit range; 8-bit data passes through unchanged.

use crate::error::FilterResult;
use spheroid_core::{DynRaster, Gray16Image, GrayImage};

/// Produce the 8-bit working copy of a decoded source image.
pub fn normalize_to_8bit(src: &DynRaster) -> FilterResult<GrayImage> {
    match src {
        DynRaster::Gray8(img) => Ok(img.clone()),
        DynRaster::Gray16(img) => rescale_16(img),
    }
}

/// Min-max rescale of 16-bit data into `[0, 255]`.
///
/// A constant image maps to all zeros.
fn rescale_16(src: &Gray16Image) -> FilterResult<GrayImage> {
    let (lo, hi) = src.min_max();
    let range = hi as u32 - lo as u32;
    let data: Vec<u8> = src
        .as_slice()
        .iter()
        .map(|&v| {
            if range == 0 {
                0
            } else {
                (((v as u32 - lo as u32) * 255 + range / 2) / range) as u8
            }
        })
        .collect();
    Ok(GrayImage::from_raw(src.width(), src.height(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray8_passthrough() {
        let img = GrayImage::from_raw(2, 2, vec![0, 10, 200, 255]).unwrap();
        let out = normalize_to_8bit(&DynRaster::Gray8(img.clone())).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_gray16_full_range_stretch() {
        let img = Gray16Image::from_raw(2, 2, vec![1000, 2000, 3000, 5000]).unwrap();
        let out = normalize_to_8bit(&DynRaster::Gray16(img)).unwrap();
        assert_eq!(out.get_pixel_unchecked(0, 0), 0);
        assert_eq!(out.get_pixel_unchecked(1, 1), 255);
        let mid = out.get_pixel_unchecked(1, 0);
        assert!(mid > 0 && mid < 255);
    }

    #[test]
    fn test_gray16_constant_maps_to_zero() {
        let img = Gray16Image::from_raw(3, 1, vec![777; 3]).unwrap();
        let out = normalize_to_8bit(&DynRaster::Gray16(img)).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }
}
