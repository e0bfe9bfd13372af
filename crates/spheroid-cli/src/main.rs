//! spheroid2d - batch 2D spheroid segmentation and measurement
//!
//! Interactive console tool: for every `.tif` image in a chosen folder
//! it generates three candidate segmentations, lets the operator pick
//! and refine one, and writes per-image region archives and measurement
//! tables plus a cross-image summary.

mod console;

use console::ConsoleOperator;
use spheroid_pipeline::{Operator, run_batch};
use std::path::PathBuf;

fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    match flexi_logger::Logger::try_with_env_or_str("info") {
        Ok(logger) => match logger.log_to_stderr().start() {
            Ok(handle) => Some(handle),
            Err(err) => {
                eprintln!("logger initialization failed: {err}");
                None
            }
        },
        Err(err) => {
            eprintln!("logger initialization failed: {err}");
            None
        }
    }
}

/// Prompt until the operator names an existing directory, or cancels.
fn pick_existing_dir(op: &mut dyn Operator, title: &str, prompt: &str) -> Option<PathBuf> {
    loop {
        let dir = op.pick_directory(title, prompt)?;
        if dir.is_dir() {
            return Some(dir);
        }
        op.message("Error", &format!("{} is not a directory.", dir.display()));
    }
}

fn main() {
    let _logger = init_logging();
    let mut op = ConsoleOperator::stdio();

    op.message(
        "Select Data Folder",
        "Please select the folder that contains your .tif images to process.\n\
         Each image will be analyzed and ROIs will be saved automatically.",
    );
    let Some(input_dir) = pick_existing_dir(
        &mut op,
        "Input Folder",
        "Path of the folder with .tif images",
    ) else {
        return;
    };

    op.message(
        "Select Output Folder",
        "Now select the folder where the tool will save all result files:\n\
         - individual ROI ZIP archives\n\
         - measurement CSV tables\n\
         - summary and log files",
    );
    let Some(output_dir) = pick_existing_dir(
        &mut op,
        "Output Folder",
        "Path of the folder to save results",
    ) else {
        return;
    };

    match run_batch(&mut op, &input_dir, &output_dir) {
        Ok(report) => {
            log::info!(
                "batch finished: {} measured, {} skipped{}",
                report.measured,
                report.skipped,
                if report.aborted { ", aborted" } else { "" }
            );
        }
        Err(err) => {
            log::error!("batch failed: {err}");
            std::process::exit(1);
        }
    }
}
