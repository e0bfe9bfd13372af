//! Boundary tracing
//!
//! Moore-neighbor tracing of the outer contour of a mask, used for
//! perimeter estimation. Orthogonal steps contribute 1 to the perimeter,
//! diagonal steps sqrt(2).

use spheroid_core::Bitmap;

/// Clockwise 8-neighborhood, starting east (y grows downward).
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[inline]
fn fg(mask: &Bitmap, x: i32, y: i32) -> bool {
    x >= 0
        && y >= 0
        && (x as u32) < mask.width()
        && (y as u32) < mask.height()
        && mask.get_unchecked(x as u32, y as u32)
}

/// Trace the outer boundary of the first (topmost-leftmost) component.
///
/// Returns the closed contour as a pixel sequence; an empty mask yields
/// an empty path and an isolated pixel a single-element path.
pub fn trace_outer_boundary(mask: &Bitmap) -> Vec<(u32, u32)> {
    let w = mask.width();
    let h = mask.height();

    // Topmost-leftmost foreground pixel
    let mut start = None;
    'scan: for y in 0..h {
        for x in 0..w {
            if mask.get_unchecked(x, y) {
                start = Some((x as i32, y as i32));
                break 'scan;
            }
        }
    }
    let Some(start) = start else {
        return Vec::new();
    };

    let mut path = vec![(start.0 as u32, start.1 as u32)];
    // Entered the start pixel scanning from the west
    let mut current = start;
    let mut backtrack_dir = 4usize; // index of W in DIRS

    // A contour revisits each boundary pixel at most a handful of times;
    // the cap covers pathological masks.
    let max_steps = 8 * (w as usize * h as usize) + 8;
    for _ in 0..max_steps {
        let mut found = None;
        for i in 1..=8 {
            let d = (backtrack_dir + i) % 8;
            let nx = current.0 + DIRS[d].0;
            let ny = current.1 + DIRS[d].1;
            if fg(mask, nx, ny) {
                found = Some((d, (nx, ny)));
                break;
            }
        }
        let Some((d, next)) = found else {
            // Isolated pixel
            return path;
        };
        // Direction from the new pixel back to the last background
        // position checked before it: (d+6)%8 after an orthogonal step,
        // (d+5)%8 after a diagonal one.
        backtrack_dir = (d + 6 - (d % 2)) % 8;
        if next == start && path.len() > 1 {
            break;
        }
        path.push((next.0 as u32, next.1 as u32));
        current = next;
    }
    path
}

/// Perimeter of a closed contour: steps of 1 orthogonally, sqrt(2)
/// diagonally, including the closing segment.
pub fn contour_perimeter(path: &[(u32, u32)]) -> f64 {
    match path.len() {
        0 => 0.0,
        // A lone pixel is taken as a unit square
        1 => 4.0,
        _ => {
            let mut total = 0.0;
            for i in 0..path.len() {
                let (x0, y0) = path[i];
                let (x1, y1) = path[(i + 1) % path.len()];
                let diag = x0 != x1 && y0 != y1;
                total += if diag { std::f64::consts::SQRT_2 } else { 1.0 };
            }
            total
        }
    }
}

/// Perimeter of the outer boundary of a mask.
pub fn perimeter(mask: &Bitmap) -> f64 {
    contour_perimeter(&trace_outer_boundary(mask))
}
