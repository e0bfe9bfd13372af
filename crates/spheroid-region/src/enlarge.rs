//! Region enlargement
//!
//! Grows a region outward by a pixel margin using Euclidean disk
//! dilation, clamped to the image bounds. The disk is stamped only from
//! boundary pixels; interior pixels are already covered by the copied
//! original mask.

use crate::error::RegionResult;
use crate::roi::{Derivation, Roi};
use spheroid_core::Bitmap;

/// Offsets of a filled disk of the given radius, center included.
fn disk_offsets(radius: u32) -> Vec<(i32, i32)> {
    let r = radius as i32;
    let r2 = r * r;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// True for foreground pixels with at least one 4-neighbor that is
/// background or outside the mask.
fn is_boundary(mask: &Bitmap, x: u32, y: u32) -> bool {
    let neighbors = [
        (x as i32 - 1, y as i32),
        (x as i32 + 1, y as i32),
        (x as i32, y as i32 - 1),
        (x as i32, y as i32 + 1),
    ];
    neighbors.iter().any(|&(nx, ny)| {
        nx < 0
            || ny < 0
            || nx >= mask.width() as i32
            || ny >= mask.height() as i32
            || !mask.get_unchecked(nx as u32, ny as u32)
    })
}

/// Produce the enlarged derivative of a region.
///
/// The new region keeps the original's pixels, adds every pixel within
/// `margin` of its boundary (clamped to the image), and is named
/// `<original-name>_enlarged`. The original region is not modified.
pub fn enlarge_roi(
    roi: &Roi,
    margin: u32,
    image_width: u32,
    image_height: u32,
) -> RegionResult<Roi> {
    let bounds = roi
        .bounds()
        .expand(margin as i32)
        .clip_to(image_width, image_height);
    let mut mask = Bitmap::new(bounds.w as u32, bounds.h as u32)?;

    let src = roi.mask();
    let src_bounds = roi.bounds();
    let offsets = disk_offsets(margin);
    for y in 0..src.height() {
        for x in 0..src.width() {
            if !src.get_unchecked(x, y) {
                continue;
            }
            let gx = src_bounds.x + x as i32;
            let gy = src_bounds.y + y as i32;
            // Copy the original pixel
            mask.put_unchecked((gx - bounds.x) as u32, (gy - bounds.y) as u32, true);
            if margin == 0 || !is_boundary(src, x, y) {
                continue;
            }
            for &(dx, dy) in &offsets {
                let px = gx + dx;
                let py = gy + dy;
                if bounds.contains(px, py) {
                    mask.put_unchecked((px - bounds.x) as u32, (py - bounds.y) as u32, true);
                }
            }
        }
    }

    Roi::new(
        format!("{}_enlarged", roi.name()),
        bounds,
        mask,
        Derivation::Enlarged {
            source: roi.name().to_string(),
        },
    )
}
