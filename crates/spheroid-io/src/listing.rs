//! Input-folder listing
//!
//! Produces the batch work list: regular files whose name ends in
//! `.tif` (case-insensitive), sorted by file name so runs are
//! reproducible across platforms.

use crate::error::IoResult;
use std::path::{Path, PathBuf};

/// List the `.tif` files of a directory, sorted by file name.
///
/// Fails if the directory cannot be read at all; unreadable entries are
/// simply omitted.
pub fn list_tiff_files(dir: &Path) -> IoResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("tif"))
        })
        .collect();
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(files)
}
