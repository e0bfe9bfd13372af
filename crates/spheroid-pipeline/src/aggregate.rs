//! Cross-image aggregation
//!
//! Folds per-image results tables into the batch summary. The summary
//! header is frozen from the first image that yields a table with a
//! non-empty header line; rows of every later image are appended as
//! `<image>,<row>` with no column realignment, even when that image's
//! own header differs. Column drift therefore shifts fields instead of
//! failing; the behavior is kept for compatibility with the summaries
//! downstream analysis already consumes.

use spheroid_io::{IoResult, read_lines, write_results};
use std::path::Path;

/// Accumulates the batch summary table across images.
#[derive(Debug, Default)]
pub struct Aggregator {
    header: Option<String>,
    rows: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any image has contributed a header.
    pub fn has_results(&self) -> bool {
        self.header.is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fold one image's results file into the summary.
    ///
    /// The file is read back from disk rather than taken from memory so
    /// the summary reflects exactly what was persisted. A file that
    /// cannot be read contributes zero rows; that is a diagnostic, not
    /// an error.
    pub fn absorb(&mut self, image_id: &str, results_path: &Path) {
        let lines = match read_lines(results_path) {
            Ok(lines) => lines,
            Err(err) => {
                log::warn!("cannot read back results for {image_id}: {err}");
                return;
            }
        };
        let mut lines = lines.into_iter();
        let Some(header) = lines.next() else {
            return;
        };
        if header.trim().is_empty() {
            return;
        }
        if self.header.is_none() {
            self.header = Some(format!("Name,{header}"));
        }
        for line in lines {
            if !line.trim().is_empty() {
                self.rows.push(format!("{image_id},{line}"));
            }
        }
    }

    /// Write the summary file, or nothing if no image ever contributed.
    pub fn finalize(&self, path: &Path) -> IoResult<()> {
        let Some(header) = &self.header else {
            log::info!("no results to save");
            return Ok(());
        };
        write_results(path, header, &self.rows)?;
        log::info!("summary saved: {}", path.display());
        Ok(())
    }
}
