//! Image enhancement operations
//!
//! Unsharp masking over 8-bit grayscale images, built on the windowed
//! mean filter.

use crate::error::{FilterError, FilterResult};
use crate::windowed::windowed_mean;
use spheroid_core::GrayImage;

/// Apply unsharp masking to a grayscale image.
///
/// The image is blurred with a box mean of half-width `radius` and the
/// high-pass residue is added back scaled by `amount / (1 - amount)`:
///
/// `out = src + amount/(1-amount) * (src - blur)`
///
/// `amount` must be in `(0, 1)`; larger values sharpen more aggressively.
/// A `radius` of 0 returns the input unchanged.
pub fn unsharp_mask(pix: &GrayImage, radius: u32, amount: f32) -> FilterResult<GrayImage> {
    if !(0.0..1.0).contains(&amount) {
        return Err(FilterError::InvalidParameters(format!(
            "unsharp amount must be in [0, 1): {amount}"
        )));
    }
    if radius == 0 || amount == 0.0 {
        return Ok(pix.clone());
    }

    let gain = amount / (1.0 - amount);
    let blurred = windowed_mean(pix, radius)?;
    let w = pix.width();
    let h = pix.height();
    let mut out = GrayImage::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let src = pix.get_pixel_unchecked(x, y) as f32;
            let blur = blurred.get_pixel_unchecked(x, y) as f32;
            let result = (src + gain * (src - blur) + 0.5) as i32;
            out.set_pixel_unchecked(x, y, result.clamp(0, 255) as u8);
        }
    }
    Ok(out)
}
