//! Shared fixtures for the pipeline integration tests: synthetic TIFF
//! images and per-test scratch directories.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tiff::encoder::{TiffEncoder, colortype};

/// Fresh input/output directory pair for one test.
pub fn scratch_dirs(test: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!(
        "spheroid-pipeline-{}-{}",
        test,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    let input = root.join("input");
    let output = root.join("output");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();
    (input, output)
}

pub fn cleanup(input: &Path) {
    let root = input.parent().unwrap();
    let _ = fs::remove_dir_all(root);
}

fn write_gray8_tiff(path: &Path, width: u32, height: u32, data: &[u8]) {
    let mut buf = Cursor::new(Vec::new());
    let mut encoder = TiffEncoder::new(&mut buf).unwrap();
    encoder
        .write_image::<colortype::Gray8>(width, height, data)
        .unwrap();
    fs::write(path, buf.into_inner()).unwrap();
}

/// 200x200 dark image with one bright 100x40 rectangle at (50, 80).
///
/// The third configuration segments it into exactly one region of
/// 4000 px that passes the shared size/circularity filter.
pub fn write_blob_image(path: &Path) {
    let mut data = vec![20u8; 200 * 200];
    for y in 80..120 {
        for x in 50..150 {
            data[y * 200 + x] = 220;
        }
    }
    write_gray8_tiff(path, 200, 200, &data);
}

/// Uniform image: every configuration yields zero regions.
pub fn write_flat_image(path: &Path) {
    write_gray8_tiff(path, 200, 200, &vec![20u8; 200 * 200]);
}

/// Read a text file as trimmed lines.
pub fn lines_of(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
