//! Enlarge sub-loop
//!
//! Optional region growth after manual refinement. Each iteration the
//! operator picks a subset of the current regions and a pixel margin;
//! every picked region gains an `_enlarged` derivative alongside it.
//! The loop repeats until the operator proceeds, then one last deletion
//! pass runs (without the empty-set skip check, which already fired
//! upstream).

use crate::error::PipelineResult;
use crate::operator::Operator;
use crate::refine::deletion_pass;
use spheroid_core::GrayImage;
use spheroid_region::{Roi, enlarge_roi};

/// Margin bounds of the enlarge prompt, in pixels.
const MARGIN_MIN: i32 = 0;
const MARGIN_MAX: i32 = 50;
const MARGIN_DEFAULT: i32 = 10;

/// Offer the enlarge sub-loop; mutates `rois` in place.
///
/// Declining the opt-in prompt (or cancelling it) leaves the set
/// untouched.
pub fn maybe_enlarge(
    op: &mut dyn Operator,
    image: &GrayImage,
    rois: &mut Vec<Roi>,
) -> PipelineResult<()> {
    let opted_in = op
        .choose(
            "Enlarge ROIs?",
            "Do you want to enlarge the ROIs?",
            &["No", "Yes"],
            0,
        )
        .is_some_and(|idx| idx == 1);
    if !opted_in {
        return Ok(());
    }

    loop {
        let names: Vec<String> = rois.iter().map(|r| r.name().to_string()).collect();
        let selected = op
            .select_regions(
                "ROI Selection",
                "Select the ROIs you want to enlarge.",
                &names,
            )
            .unwrap_or_default();
        if selected.is_empty() {
            op.message("No ROIs selected", "Please select at least one ROI.");
            continue;
        }

        // Cancelling the margin prompt means no enlargement happened
        // this iteration; re-prompt from the top.
        let Some(margin) = op.slider(
            "ROI Enlarge Value",
            "Enlarge value (pixels):",
            MARGIN_MIN,
            MARGIN_MAX,
            MARGIN_DEFAULT,
        ) else {
            continue;
        };
        let margin = margin.clamp(MARGIN_MIN, MARGIN_MAX) as u32;

        for idx in selected {
            if let Some(roi) = rois.get(idx) {
                let grown = enlarge_roi(roi, margin, image.width(), image.height())?;
                rois.push(grown);
            }
        }

        op.show_regions("Preview Applied", image, rois);
        let next = op.choose(
            "Preview Applied",
            "Click 'OK - Proceed' to continue, or 'Continue modifying' to try again.",
            &["Continue modifying", "OK - Proceed"],
            1,
        );
        // Cancelling the confirm falls back to its default: proceed
        if next.unwrap_or(1) == 1 {
            break;
        }
    }

    *rois = deletion_pass(
        op,
        "Final ROI Review",
        "Delete any unwanted ROIs, then confirm.",
        image,
        std::mem::take(rois),
    );
    Ok(())
}
