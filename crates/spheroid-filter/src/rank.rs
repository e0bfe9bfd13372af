//! Rank filtering
//!
//! Median filter over square neighborhoods using a moving 256-bin
//! histogram: for each row the histogram is updated column-by-column
//! instead of being rebuilt per pixel.

use crate::error::FilterResult;
use spheroid_core::GrayImage;

/// Median filter over a `(2r+1) x (2r+1)` window, clipped at borders.
///
/// A `radius` of 0 returns the input unchanged.
pub fn median_filter(pix: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    if radius == 0 {
        return Ok(pix.clone());
    }
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let r = radius as usize;
    let mut out = GrayImage::new(pix.width(), pix.height())?;

    let mut hist = [0u32; 256];
    for y in 0..h {
        let y0 = y.saturating_sub(r);
        let y1 = (y + r + 1).min(h);

        // Seed the histogram with the window columns of x = 0
        hist.fill(0);
        let seed_x1 = (r + 1).min(w);
        for wy in y0..y1 {
            for wx in 0..seed_x1 {
                hist[pix.get_pixel_unchecked(wx as u32, wy as u32) as usize] += 1;
            }
        }
        let mut count = ((y1 - y0) * seed_x1) as u32;

        for x in 0..w {
            if x > 0 {
                // Slide: add the entering column, drop the leaving one
                let enter = x + r;
                if enter < w {
                    for wy in y0..y1 {
                        hist[pix.get_pixel_unchecked(enter as u32, wy as u32) as usize] += 1;
                    }
                    count += (y1 - y0) as u32;
                }
                if x > r {
                    let leave = x - r - 1;
                    for wy in y0..y1 {
                        hist[pix.get_pixel_unchecked(leave as u32, wy as u32) as usize] -= 1;
                    }
                    count -= (y1 - y0) as u32;
                }
            }

            let target = count / 2;
            let mut cumulative = 0u32;
            let mut median = 0u8;
            for (value, &bin) in hist.iter().enumerate() {
                cumulative += bin;
                if cumulative > target {
                    median = value as u8;
                    break;
                }
            }
            out.set_pixel_unchecked(x as u32, y as u32, median);
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
    fn test_median_uniform_is_identity() {
        let img = uniform(15, 9, 42);
        assert_eq!(median_filter(&img, 3).unwrap(), img);
    }

    #[test]
    fn test_median_zero_radius_clones() {
        let img = uniform(5, 5, 7);
        assert_eq!(median_filter(&img, 0).unwrap(), img);
    }

    #[test]
    fn test_median_removes_salt_noise() {
        let mut img = uniform(11, 11, 10);
        img.set_pixel_unchecked(5, 5, 255);
        let out = median_filter(&img, 2).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 10));
    }

    #[test]
    fn test_median_preserves_large_block() {
        // A 7x7 bright block survives a radius-1 median
        let mut img = uniform(15, 15, 0);
        for y in 4..11 {
            for x in 4..11 {
                img.set_pixel_unchecked(x, y, 200);
            }
        }
        let out = median_filter(&img, 1).unwrap();
        assert_eq!(out.get_pixel_unchecked(7, 7), 200);
        assert_eq!(out.get_pixel_unchecked(0, 0), 0);
    }

    #[test]
    fn test_median_matches_naive_on_small_image() {
        let img = GrayImage::from_raw(
            5,
            4,
            vec![3, 9, 1, 7, 5, 2, 8, 6, 4, 0, 9, 9, 1, 1, 5, 0, 2, 4, 6, 8],
        )
        .unwrap();
        let r = 1u32;
        let fast = median_filter(&img, r).unwrap();
        for y in 0..4u32 {
            for x in 0..5u32 {
                let mut window = Vec::new();
                for wy in y.saturating_sub(r)..(y + r + 1).min(4) {
                    for wx in x.saturating_sub(r)..(x + r + 1).min(5) {
                        window.push(img.get_pixel_unchecked(wx, wy));
                    }
                }
                window.sort_unstable();
                let expected = window[window.len() / 2];
                assert_eq!(
                    fast.get_pixel_unchecked(x, y),
                    expected,
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }
}
