//! Batch driver
//!
//! Sequences the whole run: list the input folder, then for each image
//! run review -> manual refinement -> optional enlarge -> measurement,
//! folding results into the aggregation context as it goes. Images are
//! processed strictly one at a time; every prompt blocks until the
//! operator answers.

use crate::aggregate::Aggregator;
use crate::enlarge::maybe_enlarge;
use crate::error::PipelineResult;
use crate::operator::Operator;
use crate::refine::deletion_pass;
use crate::review::{ReviewOutcome, review_image};
use crate::skiplog::SkipLog;
use spheroid_filter::normalize_to_8bit;
use spheroid_io::{list_tiff_files, open_image, save_roi_archive, write_results};
use spheroid_region::{Measurement, measure_roi};
use std::path::Path;

/// What happened over the whole batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Images that produced a measured region set
    pub measured: usize,
    /// Images routed to the skip log
    pub skipped: usize,
    /// True if the operator aborted mid-batch
    pub aborted: bool,
}

/// Process every `.tif` image of `input_dir`, writing per-image
/// artifacts and the batch summary into `output_dir`.
///
/// Files are processed in lexicographic file-name order. Unreadable
/// images are skipped with a diagnostic; a missing input folder is
/// fatal. Cancelling the candidate-choice dialog stops the batch, but
/// the summary for already-completed images is still written.
pub fn run_batch(
    op: &mut dyn Operator,
    input_dir: &Path,
    output_dir: &Path,
) -> PipelineResult<BatchReport> {
    let skip_log = SkipLog::create(output_dir);
    let files = list_tiff_files(input_dir)?;
    let mut aggregator = Aggregator::new();
    let mut report = BatchReport::default();

    for path in files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());
        log::info!("processing {file_name}");

        let source = match open_image(&path) {
            Ok(raster) => raster,
            Err(err) => {
                // Never an image to segment, so not a skip-log event
                log::warn!("skipping unreadable file {file_name}: {err}");
                continue;
            }
        };
        let working = normalize_to_8bit(&source)?;

        let mut rois = match review_image(op, &working)? {
            ReviewOutcome::Aborted => {
                log::info!("batch aborted by operator at {file_name}");
                report.aborted = true;
                break;
            }
            ReviewOutcome::Skipped => {
                skip_log.record(&file_name);
                report.skipped += 1;
                continue;
            }
            ReviewOutcome::Selected(rois) => rois,
        };

        rois = deletion_pass(
            op,
            "Manual ROI Editing",
            "Select ROIs to delete; leave empty to keep all.",
            &working,
            rois,
        );
        if rois.is_empty() {
            skip_log.record(&file_name);
            report.skipped += 1;
            continue;
        }

        maybe_enlarge(op, &working, &mut rois)?;

        let measurements: Vec<Measurement> = rois
            .iter()
            .map(|roi| measure_roi(roi, &working))
            .collect::<Result<_, _>>()?;

        let archive_path = output_dir.join(format!("{base}_ROIs.zip"));
        if let Err(err) = save_roi_archive(&archive_path, &rois) {
            log::error!("cannot save region archive for {file_name}: {err}");
            continue;
        }
        let results_path = output_dir.join(format!("{base}_Results.csv"));
        let rows: Vec<String> = measurements.iter().map(Measurement::csv_row).collect();
        if let Err(err) = write_results(&results_path, Measurement::CSV_HEADER, &rows) {
            log::error!("cannot save results for {file_name}: {err}");
            continue;
        }

        aggregator.absorb(&base, &results_path);
        report.measured += 1;
    }

    let summary_path = output_dir.join("All_Results.csv");
    if let Err(err) = aggregator.finalize(&summary_path) {
        log::error!("cannot write summary: {err}");
    }
    if !report.aborted {
        op.message("Done", "All images processed.");
    }
    Ok(report)
}
