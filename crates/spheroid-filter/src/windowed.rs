//! Windowed statistics filters
//!
//! Mean and variance over square neighborhoods, computed with summed-area
//! tables so the cost per pixel is independent of the window radius.
//! Windows are clipped at the image border and statistics are taken over
//! the pixels actually inside the image.

use crate::error::{FilterError, FilterResult};
use spheroid_core::GrayImage;

/// Summed-area tables over an image: plain sums and sums of squares.
///
/// Tables have `(width + 1) x (height + 1)` entries so that rectangle
/// queries need no edge special-casing.
pub struct WindowAccumulator {
    width: usize,
    sum: Vec<u64>,
    sum_sq: Vec<u64>,
}

impl WindowAccumulator {
    pub fn new(pix: &GrayImage) -> Self {
        let w = pix.width() as usize;
        let h = pix.height() as usize;
        let stride = w + 1;
        let mut sum = vec![0u64; stride * (h + 1)];
        let mut sum_sq = vec![0u64; stride * (h + 1)];
        for y in 0..h {
            let mut row_sum = 0u64;
            let mut row_sq = 0u64;
            for x in 0..w {
                let v = pix.get_pixel_unchecked(x as u32, y as u32) as u64;
                row_sum += v;
                row_sq += v * v;
                sum[(y + 1) * stride + x + 1] = sum[y * stride + x + 1] + row_sum;
                sum_sq[(y + 1) * stride + x + 1] = sum_sq[y * stride + x + 1] + row_sq;
            }
        }
        Self {
            width: w,
            sum,
            sum_sq,
        }
    }

    /// Sum over the half-open rectangle `[x0, x1) x [y0, y1)`.
    #[inline]
    fn rect(&self, table: &[u64], x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        let stride = self.width + 1;
        table[y1 * stride + x1] + table[y0 * stride + x0]
            - table[y0 * stride + x1]
            - table[y1 * stride + x0]
    }

    #[inline]
    pub fn rect_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        self.rect(&self.sum, x0, y0, x1, y1)
    }

    #[inline]
    pub fn rect_sum_sq(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        self.rect(&self.sum_sq, x0, y0, x1, y1)
    }
}

#[inline]
fn window_bounds(center: usize, radius: usize, limit: usize) -> (usize, usize) {
    let lo = center.saturating_sub(radius);
    let hi = (center + radius + 1).min(limit);
    (lo, hi)
}

/// Mean filter over a `(2r+1) x (2r+1)` window, rounded to nearest.
pub fn windowed_mean(pix: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    if radius == 0 {
        return Ok(pix.clone());
    }
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let acc = WindowAccumulator::new(pix);
    let mut out = GrayImage::new(pix.width(), pix.height())?;
    let r = radius as usize;
    for y in 0..h {
        let (y0, y1) = window_bounds(y, r, h);
        for x in 0..w {
            let (x0, x1) = window_bounds(x, r, w);
            let count = ((x1 - x0) * (y1 - y0)) as u64;
            let total = acc.rect_sum(x0, y0, x1, y1);
            out.set_pixel_unchecked(x as u32, y as u32, ((total + count / 2) / count) as u8);
        }
    }
    Ok(out)
}

/// Variance filter over a `(2r+1) x (2r+1)` window, clamped to `[0, 255]`.
///
/// Each output pixel is the population variance of its neighborhood;
/// uniform areas map to 0 and strong edges saturate at 255.
pub fn windowed_variance(pix: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    if radius == 0 {
        return Err(FilterError::InvalidParameters(
            "variance radius must be >= 1".into(),
        ));
    }
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let acc = WindowAccumulator::new(pix);
    let mut out = GrayImage::new(pix.width(), pix.height())?;
    let r = radius as usize;
    for y in 0..h {
        let (y0, y1) = window_bounds(y, r, h);
        for x in 0..w {
            let (x0, x1) = window_bounds(x, r, w);
            let count = ((x1 - x0) * (y1 - y0)) as f64;
            let total = acc.rect_sum(x0, y0, x1, y1) as f64;
            let total_sq = acc.rect_sum_sq(x0, y0, x1, y1) as f64;
            let mean = total / count;
            let var = (total_sq / count - mean * mean).max(0.0);
            out.set_pixel_unchecked(x as u32, y as u32, (var + 0.5).min(255.0) as u8);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_raw(width, height, vec![value; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_windowed_mean_uniform_is_identity() {
        let img = uniform(16, 16, 77);
        let out = windowed_mean(&img, 3).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_windowed_mean_radius_zero_clones() {
        let img = uniform(4, 4, 9);
        assert_eq!(windowed_mean(&img, 0).unwrap(), img);
    }

    #[test]
    fn test_windowed_mean_smooths_step() {
        // Left half 0, right half 200: at the step the mean is in between
        let mut img = uniform(16, 8, 0);
        for y in 0..8 {
            for x in 8..16 {
                img.set_pixel_unchecked(x, y, 200);
            }
        }
        let out = windowed_mean(&img, 2).unwrap();
        let v = out.get_pixel_unchecked(8, 4);
        assert!(v > 0 && v < 200, "expected intermediate value, got {v}");
    }

    #[test]
    fn test_windowed_variance_uniform_is_zero() {
        let img = uniform(12, 12, 130);
        let out = windowed_variance(&img, 4).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_windowed_variance_edge_saturates() {
        let mut img = uniform(16, 8, 0);
        for y in 0..8 {
            for x in 8..16 {
                img.set_pixel_unchecked(x, y, 255);
            }
        }
        let out = windowed_variance(&img, 2).unwrap();
        assert_eq!(out.get_pixel_unchecked(8, 4), 255);
        assert_eq!(out.get_pixel_unchecked(0, 0), 0);
    }

    #[test]
    fn test_windowed_variance_rejects_zero_radius() {
        let img = uniform(4, 4, 1);
        assert!(windowed_variance(&img, 0).is_err());
    }
}
