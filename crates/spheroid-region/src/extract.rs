//! Region extraction
//!
//! Particle-style extraction: label the mask, then keep components that
//! satisfy area and circularity bounds, optionally dropping those that
//! touch the image border. Kept regions are renumbered and named in
//! label order, so extraction is deterministic for a given mask.

use crate::conncomp::{Connectivity, label_components};
use crate::error::RegionResult;
use crate::roi::Roi;
use spheroid_core::Bitmap;

/// Filter parameters for one extraction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractParams {
    /// Minimum component area in pixels (inclusive)
    pub size_min: u32,
    /// Maximum component area in pixels (inclusive)
    pub size_max: u32,
    /// Minimum circularity (inclusive)
    pub circ_min: f64,
    /// Maximum circularity (inclusive)
    pub circ_max: f64,
    /// Drop components whose bounding box touches the image border
    pub exclude_edges: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            size_min: 0,
            size_max: u32::MAX,
            circ_min: 0.0,
            circ_max: 1.0,
            exclude_edges: false,
        }
    }
}

/// Extract all regions of a binary mask that pass the filter.
///
/// Components are labeled with 8-way connectivity and returned in label
/// (raster-scan) order, named `roi-001`, `roi-002`, ...
pub fn extract_rois(mask: &Bitmap, params: &ExtractParams) -> RegionResult<Vec<Roi>> {
    let map = label_components(mask, Connectivity::EightWay);
    let mut rois = Vec::new();
    for component in map.components() {
        if component.pixel_count < params.size_min || component.pixel_count > params.size_max {
            continue;
        }
        if params.exclude_edges && component.bounds.touches_border(mask.width(), mask.height()) {
            continue;
        }
        let roi = Roi::from_component(&map, component, format!("roi-{:03}", rois.len() + 1))?;
        let circ = roi.circularity();
        if circ < params.circ_min || circ > params.circ_max {
            continue;
        }
        rois.push(roi);
    }
    Ok(rois)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp_rect(bm: &mut Bitmap, x0: u32, y0: u32, w: u32, h: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                bm.put(x, y, true).unwrap();
            }
        }
    }

    #[test]
    fn test_size_filter() {
        let mut bm = Bitmap::new(64, 64).unwrap();
        stamp_rect(&mut bm, 4, 4, 20, 10); // area 200
        stamp_rect(&mut bm, 40, 40, 5, 5); // area 25
        let params = ExtractParams {
            size_min: 100,
            ..Default::default()
        };
        let rois = extract_rois(&bm, &params).unwrap();
        assert_eq!(rois.len(), 1);
        assert_eq!(rois[0].area(), 200);
        assert_eq!(rois[0].name(), "roi-001");
    }

    #[test]
    fn test_exclude_edges() {
        let mut bm = Bitmap::new(32, 32).unwrap();
        stamp_rect(&mut bm, 0, 0, 8, 6); // touches border
        stamp_rect(&mut bm, 12, 12, 8, 6); // interior
        let kept = extract_rois(
            &bm,
            &ExtractParams {
                exclude_edges: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].bounds().x, 12);

        let all = extract_rois(&bm, &ExtractParams::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_circularity_filter_drops_thin_shapes() {
        let mut bm = Bitmap::new(128, 32).unwrap();
        stamp_rect(&mut bm, 2, 2, 100, 1); // thin line, circ < 0.2
        stamp_rect(&mut bm, 2, 10, 40, 16); // compact block
        let rois = extract_rois(
            &bm,
            &ExtractParams {
                circ_min: 0.2,
                circ_max: 0.9,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(rois.len(), 1);
        assert_eq!(rois[0].bounds().y, 10);
    }

    #[test]
    fn test_kept_regions_are_renumbered() {
        let mut bm = Bitmap::new(64, 64).unwrap();
        stamp_rect(&mut bm, 2, 2, 3, 3); // too small, filtered
        stamp_rect(&mut bm, 20, 2, 10, 10);
        stamp_rect(&mut bm, 2, 30, 12, 12);
        let rois = extract_rois(
            &bm,
            &ExtractParams {
                size_min: 50,
                ..Default::default()
            },
        )
        .unwrap();
        let names: Vec<_> = rois.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["roi-001", "roi-002"]);
    }

    #[test]
    fn test_empty_mask_yields_no_rois() {
        let bm = Bitmap::new(16, 16).unwrap();
        assert!(
            extract_rois(&bm, &ExtractParams::default())
                .unwrap()
                .is_empty()
        );
    }
}
