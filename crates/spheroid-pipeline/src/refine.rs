//! Manual refinement
//!
//! After the final extraction the operator may delete regions by hand.
//! Deletion is a single multi-select pass: the regions the operator
//! picks are removed, everything else survives in order. Cancelling the
//! prompt keeps the whole set.

use crate::operator::Operator;
use spheroid_core::GrayImage;
use spheroid_region::Roi;
use std::collections::BTreeSet;

/// One deletion pass over the region set.
///
/// The caller decides what an empty result means (the post-review pass
/// routes it to the skip log; the post-enlarge pass lets it fall
/// through to measurement).
pub fn deletion_pass(
    op: &mut dyn Operator,
    title: &str,
    prompt: &str,
    image: &GrayImage,
    rois: Vec<Roi>,
) -> Vec<Roi> {
    op.show_regions(title, image, &rois);
    let names: Vec<String> = rois.iter().map(|r| r.name().to_string()).collect();
    let doomed: BTreeSet<usize> = op
        .select_regions(title, prompt, &names)
        .unwrap_or_default()
        .into_iter()
        .collect();
    rois.into_iter()
        .enumerate()
        .filter(|(i, _)| !doomed.contains(i))
        .map(|(_, roi)| roi)
        .collect()
}
