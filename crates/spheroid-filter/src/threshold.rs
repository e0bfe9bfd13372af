//! Automatic global thresholding
//!
//! Isodata (iterative intermeans) threshold selection over the 256-bin
//! histogram, the "default" automatic method, plus mask conversion.

use crate::error::FilterResult;
use spheroid_core::{Bitmap, GrayImage};

/// Compute the isodata threshold for a 256-bin histogram.
///
/// Starting from the global mean, the threshold is moved to the midpoint
/// of the means of the two classes it separates until it stabilizes.
/// An empty histogram yields 0.
pub fn isodata_threshold(hist: &[u32; 256]) -> u8 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0;
    }
    let weighted: u64 = hist
        .iter()
        .enumerate()
        .map(|(v, &c)| v as u64 * c as u64)
        .sum();
    let mut t = (weighted / total) as u8;

    // Iterative selection always converges for a fixed histogram; the cap
    // guards against cycling on adversarial inputs.
    for _ in 0..256 {
        let mut lo_n = 0u64;
        let mut lo_sum = 0u64;
        for v in 0..=t as usize {
            lo_n += hist[v] as u64;
            lo_sum += v as u64 * hist[v] as u64;
        }
        let hi_n = total - lo_n;
        let hi_sum = weighted - lo_sum;
        if lo_n == 0 || hi_n == 0 {
            return t;
        }
        let lo_mean = lo_sum as f64 / lo_n as f64;
        let hi_mean = hi_sum as f64 / hi_n as f64;
        let next = ((lo_mean + hi_mean) / 2.0) as u8;
        if next == t {
            return t;
        }
        t = next;
    }
    t
}

/// Pixels strictly above `threshold` become foreground.
pub fn threshold_above(pix: &GrayImage, threshold: u8) -> FilterResult<Bitmap> {
    let w = pix.width();
    let h = pix.height();
    let mut mask = Bitmap::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel_unchecked(x, y) > threshold {
                mask.put_unchecked(x, y, true);
            }
        }
    }
    Ok(mask)
}

/// Binarize with the isodata threshold of the image's own histogram.
pub fn binarize(pix: &GrayImage) -> FilterResult<Bitmap> {
    let t = isodata_threshold(&pix.histogram());
    threshold_above(pix, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isodata_empty_histogram() {
        let hist = [0u32; 256];
        assert_eq!(isodata_threshold(&hist), 0);
    }

    #[test]
    fn test_isodata_single_level() {
        let mut hist = [0u32; 256];
        hist[90] = 500;
        assert_eq!(isodata_threshold(&hist), 90);
    }

    #[test]
    fn test_isodata_bimodal_separates_modes() {
        let mut hist = [0u32; 256];
        hist[40] = 1000;
        hist[200] = 1000;
        let t = isodata_threshold(&hist);
        assert!(
            (40..200).contains(&t),
            "threshold {t} does not separate modes"
        );
    }

    #[test]
    fn test_binarize_bimodal_image() {
        let mut data = vec![30u8; 64];
        for v in data.iter_mut().take(16) {
            *v = 220;
        }
        let img = GrayImage::from_raw(8, 8, data).unwrap();
        let mask = binarize(&img).unwrap();
        assert_eq!(mask.count_foreground(), 16);
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(7, 7), Some(false));
    }

    #[test]
    fn test_binarize_constant_image_is_empty() {
        let img = GrayImage::from_raw(8, 8, vec![128; 64]).unwrap();
        let mask = binarize(&img).unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_threshold_above_boundary() {
        let img = GrayImage::from_raw(3, 1, vec![99, 100, 101]).unwrap();
        let mask = threshold_above(&img, 100).unwrap();
        assert_eq!(mask.get(0, 0), Some(false));
        assert_eq!(mask.get(1, 0), Some(false));
        assert_eq!(mask.get(2, 0), Some(true));
    }
}
