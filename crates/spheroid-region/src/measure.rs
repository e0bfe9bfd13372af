//! Region morphometry
//!
//! Computes the flat measurement record for one region over the 8-bit
//! working image: pixel area, intensity statistics, boundary-derived
//! shape metrics, and the intensity-weighted center of mass.

use crate::error::{RegionError, RegionResult};
use crate::roi::Roi;
use spheroid_core::GrayImage;

/// One measured region: the row of the per-image results table.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub area: u64,
    pub mean: f64,
    pub min: u8,
    pub max: u8,
    pub perim: f64,
    pub circ: f64,
    /// Intensity-weighted center of mass, x
    pub xm: f64,
    /// Intensity-weighted center of mass, y
    pub ym: f64,
}

impl Measurement {
    /// Header line of a per-image results table.
    pub const CSV_HEADER: &'static str = "Name,Area,Mean,Min,Max,Perim,Circ,XM,YM";

    /// One data row, fields in header order.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{:.3},{},{},{:.3},{:.3},{:.3},{:.3}",
            self.name, self.area, self.mean, self.min, self.max, self.perim, self.circ, self.xm,
            self.ym
        )
    }
}

/// Measure one region against the working image it was extracted from.
pub fn measure_roi(roi: &Roi, image: &GrayImage) -> RegionResult<Measurement> {
    let b = roi.bounds();
    if b.x < 0 || b.y < 0 || b.right() > image.width() as i32 || b.bottom() > image.height() as i32
    {
        return Err(RegionError::InvalidParameters(format!(
            "region '{}' bounds exceed image {}x{}",
            roi.name(),
            image.width(),
            image.height()
        )));
    }

    let mut area = 0u64;
    let mut sum = 0u64;
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut wx = 0.0f64;
    let mut wy = 0.0f64;
    let mut cx = 0.0f64;
    let mut cy = 0.0f64;

    let mask = roi.mask();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if !mask.get_unchecked(x, y) {
                continue;
            }
            let gx = (b.x as u32) + x;
            let gy = (b.y as u32) + y;
            let v = image.get_pixel_unchecked(gx, gy);
            area += 1;
            sum += v as u64;
            min = min.min(v);
            max = max.max(v);
            wx += v as f64 * (gx as f64 + 0.5);
            wy += v as f64 * (gy as f64 + 0.5);
            cx += gx as f64 + 0.5;
            cy += gy as f64 + 0.5;
        }
    }

    if area == 0 {
        return Ok(Measurement {
            name: roi.name().to_string(),
            area: 0,
            mean: 0.0,
            min: 0,
            max: 0,
            perim: 0.0,
            circ: 0.0,
            xm: 0.0,
            ym: 0.0,
        });
    }

    // Fall back to the geometric centroid on zero total intensity
    let (xm, ym) = if sum > 0 {
        (wx / sum as f64, wy / sum as f64)
    } else {
        (cx / area as f64, cy / area as f64)
    };

    Ok(Measurement {
        name: roi.name().to_string(),
        area,
        mean: sum as f64 / area as f64,
        min,
        max,
        perim: roi.perimeter(),
        circ: roi.circularity(),
        xm,
        ym,
    })
}
