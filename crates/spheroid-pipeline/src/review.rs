//! Review controller
//!
//! Drives the per-image decision sequence: the three candidates are
//! generated and shown in fixed order, then the operator commits to one
//! of them (or skips the image). The states are
//! `GenCandidate1 -> GenCandidate2 -> GenCandidate3 -> AwaitChoice ->
//! {Selected | Skipped}`; cancelling the choice dialog aborts the whole
//! batch.
//!
//! On selection, the winning chain is re-applied to a fresh working
//! copy (the preview masks are long gone by then) and a second, final
//! extraction runs with border exclusion always on.

use crate::candidate::{FilterConfig, generate, shared_filter};
use crate::error::PipelineResult;
use crate::operator::Operator;
use spheroid_core::GrayImage;
use spheroid_region::{Roi, extract_rois};

/// The operator's verdict for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    UseCandidate(FilterConfig),
    Skip,
}

/// Result of the review stage for one image.
#[derive(Debug)]
pub enum ReviewOutcome {
    /// Final working region set of the chosen candidate
    Selected(Vec<Roi>),
    /// Operator rejected all three candidates
    Skipped,
    /// Operator cancelled the choice dialog; stop the batch
    Aborted,
}

const CHOICE_OPTIONS: [&str; 4] = ["First", "Second", "Third", "None - Skip"];

/// Ask the operator which candidate to keep.
fn await_choice(op: &mut dyn Operator) -> Option<ReviewDecision> {
    let idx = op.choose(
        "Choose the best segmentation",
        "Which alternative do you want to use?",
        &CHOICE_OPTIONS,
        0,
    )?;
    Some(match idx {
        3 => ReviewDecision::Skip,
        i => ReviewDecision::UseCandidate(FilterConfig::ALL[i.min(2)]),
    })
}

/// Run the review state machine for one image.
pub fn review_image(op: &mut dyn Operator, image: &GrayImage) -> PipelineResult<ReviewOutcome> {
    let next_hint = [
        "Click OK to see the second.",
        "Click OK to see the third.",
        "Click OK to choose.",
    ];
    for (config, hint) in FilterConfig::ALL.into_iter().zip(next_hint) {
        let candidate = generate(image, config)?;
        op.show_regions(config.title(), image, &candidate.rois);
        op.message(config.title(), hint);
        // The candidate is dropped here; only the operator's choice
        // survives to the re-derivation below.
    }

    let Some(decision) = await_choice(op) else {
        return Ok(ReviewOutcome::Aborted);
    };
    let config = match decision {
        ReviewDecision::Skip => return Ok(ReviewOutcome::Skipped),
        ReviewDecision::UseCandidate(config) => config,
    };

    // Final extraction: same size/circularity bounds for every
    // configuration, border exclusion always enabled.
    let mask = config.apply(image)?;
    let rois = extract_rois(&mask, &shared_filter(true))?;
    Ok(ReviewOutcome::Selected(rois))
}
