//! Region-set archives
//!
//! Persists an accepted region set as a ZIP archive with one entry per
//! region (`<region-name>.roi`, binary region serialization). Exported
//! sets re-import to geometrically identical regions.

use crate::archive::{ArchiveEntry, read_zip, write_zip};
use crate::error::{IoError, IoResult};
use spheroid_region::Roi;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a region set to `path` as a ZIP archive.
pub fn save_roi_archive(path: &Path, rois: &[Roi]) -> IoResult<()> {
    let entries: Vec<ArchiveEntry> = rois
        .iter()
        .map(|roi| {
            Ok(ArchiveEntry {
                name: format!("{}.roi", roi.name()),
                data: roi.to_bytes()?,
            })
        })
        .collect::<IoResult<_>>()?;
    let file = File::create(path)?;
    write_zip(BufWriter::new(file), &entries)
}

/// Read a region set back from a ZIP archive, in archive order.
pub fn load_roi_archive(path: &Path) -> IoResult<Vec<Roi>> {
    let data = std::fs::read(path)?;
    read_zip(&data)?
        .iter()
        .map(|entry| Roi::from_bytes(&entry.data).map_err(IoError::from))
        .collect()
}
