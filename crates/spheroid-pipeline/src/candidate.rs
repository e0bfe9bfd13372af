//! Candidate generation
//!
//! Each image is segmented three times with fixed filter-chain
//! configurations; the operator later picks the best attempt. All three
//! chains run on the already-normalized 8-bit working copy and share
//! one region filter; they differ in denoising and in whether regions
//! touching the image border are excluded during the preview.

use crate::error::PipelineResult;
use spheroid_core::{Bitmap, GrayImage};
use spheroid_filter::{binarize, median_filter, unsharp_mask, windowed_variance};
use spheroid_region::{Connectivity, ExtractParams, Roi, extract_rois, fill_holes};

/// Minimum region area in pixels.
pub const SIZE_MIN: u32 = 3000;
/// Circularity band shared by all configurations.
pub const CIRC_MIN: f64 = 0.20;
pub const CIRC_MAX: f64 = 0.90;

/// One of the three fixed segmentation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterConfig {
    /// Unsharp + variance + median, bright regions kept
    First,
    /// Same denoise chain, then invert and fill holes
    Second,
    /// Stronger unsharp, plain auto-threshold
    Third,
}

impl FilterConfig {
    pub const ALL: [FilterConfig; 3] = [FilterConfig::First, FilterConfig::Second, FilterConfig::Third];

    /// Display title used when presenting this candidate.
    pub fn title(&self) -> &'static str {
        match self {
            FilterConfig::First => "FIRST ALTERNATIVE",
            FilterConfig::Second => "SECOND ALTERNATIVE",
            FilterConfig::Third => "THIRD ALTERNATIVE",
        }
    }

    /// Whether the preview extraction drops border-touching regions.
    /// The final extraction after selection always does.
    pub fn excludes_edges(&self) -> bool {
        !matches!(self, FilterConfig::Third)
    }

    /// Run this configuration's pre-extraction filter chain on a fresh
    /// working copy, producing the segmentation mask.
    pub fn apply(&self, image: &GrayImage) -> PipelineResult<Bitmap> {
        match self {
            FilterConfig::First => {
                let sharp = unsharp_mask(image, 20, 0.70)?;
                let variance = windowed_variance(&sharp, 4)?;
                let smooth = median_filter(&variance, 6)?;
                Ok(binarize(&smooth)?)
            }
            FilterConfig::Second => {
                let sharp = unsharp_mask(image, 20, 0.70)?;
                let variance = windowed_variance(&sharp, 4)?;
                let smooth = median_filter(&variance, 6)?;
                let mut mask = binarize(&smooth)?;
                mask.invert();
                Ok(fill_holes(&mask, Connectivity::FourWay)?)
            }
            FilterConfig::Third => {
                let sharp = unsharp_mask(image, 30, 0.90)?;
                Ok(binarize(&sharp)?)
            }
        }
    }
}

/// One segmentation attempt: the mask and its preview regions.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub config: FilterConfig,
    pub mask: Bitmap,
    pub rois: Vec<Roi>,
}

/// The region filter shared by every extraction call.
pub fn shared_filter(exclude_edges: bool) -> ExtractParams {
    ExtractParams {
        size_min: SIZE_MIN,
        size_max: u32::MAX,
        circ_min: CIRC_MIN,
        circ_max: CIRC_MAX,
        exclude_edges,
    }
}

/// Generate one candidate. A degenerate image produces a candidate with
/// zero regions, not an error.
pub fn generate(image: &GrayImage, config: FilterConfig) -> PipelineResult<Candidate> {
    let mask = config.apply(image)?;
    let rois = extract_rois(&mask, &shared_filter(config.excludes_edges()))?;
    Ok(Candidate { config, mask, rois })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dark background with one bright centered rectangle.
    fn blob_image() -> GrayImage {
        let mut img = GrayImage::from_raw(200, 200, vec![20; 200 * 200]).unwrap();
        for y in 80..120 {
            for x in 50..150 {
                img.set_pixel_unchecked(x, y, 220);
            }
        }
        img
    }

    #[test]
    fn test_edge_exclusion_per_config() {
        assert!(FilterConfig::First.excludes_edges());
        assert!(FilterConfig::Second.excludes_edges());
        assert!(!FilterConfig::Third.excludes_edges());
    }

    #[test]
    fn test_third_config_segments_bright_blob() {
        let candidate = generate(&blob_image(), FilterConfig::Third).unwrap();
        assert_eq!(candidate.rois.len(), 1);
        let roi = &candidate.rois[0];
        assert_eq!(roi.area(), 100 * 40);
        assert_eq!(roi.bounds().x, 50);
        assert_eq!(roi.bounds().y, 80);
    }

    #[test]
    fn test_all_candidates_respect_shared_filter() {
        let img = blob_image();
        for config in FilterConfig::ALL {
            let candidate = generate(&img, config).unwrap();
            for roi in &candidate.rois {
                assert!(roi.area() >= SIZE_MIN as u64, "{config:?}: {}", roi.area());
                let c = roi.circularity();
                assert!(
                    (CIRC_MIN..=CIRC_MAX).contains(&c),
                    "{config:?}: circularity {c}"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_image_yields_zero_regions() {
        let flat = GrayImage::from_raw(64, 64, vec![50; 64 * 64]).unwrap();
        for config in FilterConfig::ALL {
            let candidate = generate(&flat, config).unwrap();
            assert!(candidate.rois.is_empty(), "{config:?}");
        }
    }

    #[test]
    fn test_generation_does_not_mutate_source() {
        let img = blob_image();
        let copy = img.clone();
        let _ = generate(&img, FilterConfig::First).unwrap();
        let _ = generate(&img, FilterConfig::Second).unwrap();
        let _ = generate(&img, FilterConfig::Third).unwrap();
        assert_eq!(img, copy);
    }
}
