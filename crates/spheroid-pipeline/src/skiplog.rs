//! Skip log
//!
//! Append-only record of images that ended with zero usable regions.
//! The file is truncated and given its fixed first line at batch start,
//! before any image is processed; every skip event then appends one
//! line with the image's file name. Write failures are reported and
//! never abort the batch.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "no_roi.txt";
const HEADER: &str = "Images without ROI:";

/// Handle to the batch's skip log.
#[derive(Debug)]
pub struct SkipLog {
    path: PathBuf,
}

impl SkipLog {
    /// Create the log in the output directory, truncating any prior
    /// content.
    pub fn create(output_dir: &Path) -> Self {
        let path = output_dir.join(FILE_NAME);
        if let Err(err) = std::fs::write(&path, format!("{HEADER}\n")) {
            log::error!("cannot create skip log {}: {err}", path.display());
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one image's file name.
    pub fn record(&self, image_file_name: &str) {
        let appended = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{image_file_name}"));
        if let Err(err) = appended {
            log::error!("cannot write skip log for {image_file_name}: {err}");
        }
    }
}
