//! TIFF reading
//!
//! Decodes single-page TIFF images into [`DynRaster`]. Grayscale data
//! keeps its bit depth; RGB data is collapsed to luma at decode time
//! since all downstream processing is grayscale.

use crate::error::{IoError, IoResult};
use spheroid_core::{DynRaster, Gray16Image, GrayImage};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};

/// Read a single-page TIFF image.
///
/// If the file contains multiple pages, only the first page is read.
pub fn read_tiff<R: Read + Seek>(reader: R) -> IoResult<DynRaster> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {e}")))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("failed to get TIFF dimensions: {e}")))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("failed to get TIFF color type: {e}")))?;
    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("failed to read TIFF image data: {e}")))?;

    match (color_type, image_data) {
        (ColorType::Gray(8), DecodingResult::U8(data)) => {
            Ok(DynRaster::Gray8(GrayImage::from_raw(width, height, data)?))
        }
        (ColorType::Gray(16), DecodingResult::U16(data)) => Ok(DynRaster::Gray16(
            Gray16Image::from_raw(width, height, data)?,
        )),
        (ColorType::RGB(8), DecodingResult::U8(data)) => {
            Ok(DynRaster::Gray8(rgb_to_luma(width, height, &data, 3)?))
        }
        (ColorType::RGBA(8), DecodingResult::U8(data)) => {
            Ok(DynRaster::Gray8(rgb_to_luma(width, height, &data, 4)?))
        }
        (ct, _) => Err(IoError::UnsupportedFormat(format!(
            "unsupported TIFF color type: {ct:?}"
        ))),
    }
}

/// Open and decode a TIFF file.
pub fn open_image(path: &Path) -> IoResult<DynRaster> {
    let file = File::open(path)?;
    read_tiff(BufReader::new(file))
}

/// Integer Rec. 601 luma of interleaved RGB(A) samples.
fn rgb_to_luma(width: u32, height: u32, data: &[u8], channels: usize) -> IoResult<GrayImage> {
    let expected = width as usize * height as usize * channels;
    if data.len() != expected {
        return Err(IoError::DecodeError(format!(
            "RGB sample count {} does not match {}x{}x{}",
            data.len(),
            width,
            height,
            channels
        )));
    }
    let luma: Vec<u8> = data
        .chunks_exact(channels)
        .map(|px| {
            ((px[0] as u32 * 299 + px[1] as u32 * 587 + px[2] as u32 * 114 + 500) / 1000) as u8
        })
        .collect();
    Ok(GrayImage::from_raw(width, height, luma)?)
}
