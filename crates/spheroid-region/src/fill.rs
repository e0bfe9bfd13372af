//! Hole filling
//!
//! Fills enclosed background inside foreground regions by flooding the
//! background from the image border; any background pixel the flood
//! cannot reach is an interior hole and is folded into foreground.

use crate::conncomp::Connectivity;
use crate::error::RegionResult;
use spheroid_core::Bitmap;
use std::collections::VecDeque;

/// Fill enclosed holes of a binary mask.
///
/// `connectivity` applies to the background flood; 4-way matches the
/// usual convention of 8-connected foreground with 4-connected
/// background.
pub fn fill_holes(mask: &Bitmap, connectivity: Connectivity) -> RegionResult<Bitmap> {
    let w = mask.width();
    let h = mask.height();

    // Marker for background connected to the border
    let mut outside = Bitmap::new(w, h)?;
    let mut queue = VecDeque::new();

    let mut seed = |outside: &mut Bitmap, queue: &mut VecDeque<(u32, u32)>, x: u32, y: u32| {
        if !mask.get_unchecked(x, y) && !outside.get_unchecked(x, y) {
            outside.put_unchecked(x, y, true);
            queue.push_back((x, y));
        }
    };
    for x in 0..w {
        seed(&mut outside, &mut queue, x, 0);
        seed(&mut outside, &mut queue, x, h - 1);
    }
    for y in 0..h {
        seed(&mut outside, &mut queue, 0, y);
        seed(&mut outside, &mut queue, w - 1, y);
    }

    while let Some((x, y)) = queue.pop_front() {
        for &(dx, dy) in connectivity.offsets() {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if !mask.get_unchecked(nx, ny) && !outside.get_unchecked(nx, ny) {
                outside.put_unchecked(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    // Foreground plus unreached background
    let mut result = mask.clone();
    for y in 0..h {
        for x in 0..w {
            if !outside.get_unchecked(x, y) {
                result.put_unchecked(x, y, true);
            }
        }
    }
    Ok(result)
}
