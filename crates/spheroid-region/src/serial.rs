//! Region serialization
//!
//! Binary encoding of a [`Roi`] for archive storage. The format is
//! row-wise run-length encoding of the mask behind a small fixed
//! header; masks round-trip exactly.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! magic      4 bytes  "SROI"
//! version    u8       1
//! tag        u8       0 = original, 1 = enlarged
//! name       u16 length + UTF-8 bytes
//! source     u16 length + UTF-8 bytes   (enlarged only)
//! x, y       i32, i32
//! w, h       u32, u32                   (each <= 65535)
//! rows       per row: u16 run count, then (u16 start, u16 len) runs
//! ```

use crate::error::{RegionError, RegionResult};
use crate::roi::{Derivation, Roi};
use spheroid_core::{Bitmap, Box};

const MAGIC: &[u8; 4] = b"SROI";
const VERSION: u8 = 1;

fn push_str(out: &mut Vec<u8>, s: &str) -> RegionResult<()> {
    let len = u16::try_from(s.len())
        .map_err(|_| RegionError::Serial(format!("name too long: {} bytes", s.len())))?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

impl Roi {
    /// Encode the region to its binary archive form.
    pub fn to_bytes(&self) -> RegionResult<Vec<u8>> {
        let b = self.bounds();
        if b.w > u16::MAX as i32 || b.h > u16::MAX as i32 {
            return Err(RegionError::Serial(format!(
                "mask {}x{} exceeds the encodable size",
                b.w, b.h
            )));
        }

        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        match self.derivation() {
            Derivation::Original => {
                out.push(0);
                push_str(&mut out, self.name())?;
            }
            Derivation::Enlarged { source } => {
                out.push(1);
                push_str(&mut out, self.name())?;
                push_str(&mut out, source)?;
            }
        }
        out.extend_from_slice(&b.x.to_le_bytes());
        out.extend_from_slice(&b.y.to_le_bytes());
        out.extend_from_slice(&(b.w as u32).to_le_bytes());
        out.extend_from_slice(&(b.h as u32).to_le_bytes());

        let mask = self.mask();
        for y in 0..mask.height() {
            let mut runs: Vec<(u16, u16)> = Vec::new();
            let mut x = 0u32;
            while x < mask.width() {
                if mask.get_unchecked(x, y) {
                    let start = x;
                    while x < mask.width() && mask.get_unchecked(x, y) {
                        x += 1;
                    }
                    runs.push((start as u16, (x - start) as u16));
                } else {
                    x += 1;
                }
            }
            out.extend_from_slice(&(runs.len() as u16).to_le_bytes());
            for (start, len) in runs {
                out.extend_from_slice(&start.to_le_bytes());
                out.extend_from_slice(&len.to_le_bytes());
            }
        }
        Ok(out)
    }

    /// Decode a region from its binary archive form.
    pub fn from_bytes(data: &[u8]) -> RegionResult<Roi> {
        let mut cursor = Cursor::new(data);
        let magic = cursor.take(4)?;
        if magic != MAGIC {
            return Err(RegionError::Serial("bad magic".into()));
        }
        let version = cursor.u8()?;
        if version != VERSION {
            return Err(RegionError::Serial(format!(
                "unsupported version {version}"
            )));
        }
        let tag = cursor.u8()?;
        let name = cursor.string()?;
        let derivation = match tag {
            0 => Derivation::Original,
            1 => Derivation::Enlarged {
                source: cursor.string()?,
            },
            other => return Err(RegionError::Serial(format!("unknown tag {other}"))),
        };
        let x = cursor.i32()?;
        let y = cursor.i32()?;
        let w = cursor.u32()?;
        let h = cursor.u32()?;
        if w == 0 || h == 0 || w > u16::MAX as u32 || h > u16::MAX as u32 {
            return Err(RegionError::Serial(format!("bad mask size {w}x{h}")));
        }

        let mut mask = Bitmap::new(w, h)?;
        for row in 0..h {
            let count = cursor.u16()?;
            for _ in 0..count {
                let start = cursor.u16()? as u32;
                let len = cursor.u16()? as u32;
                if start + len > w {
                    return Err(RegionError::Serial(format!(
                        "run {start}+{len} exceeds row width {w}"
                    )));
                }
                for px in start..start + len {
                    mask.put_unchecked(px, row, true);
                }
            }
        }

        Roi::new(name, Box::new(x, y, w as i32, h as i32), mask, derivation)
    }
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> RegionResult<&'a [u8]> {
        if self.pos + n > self.data.len() {
            return Err(RegionError::Serial("unexpected end of data".into()));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self) -> RegionResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> RegionResult<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> RegionResult<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn i32(&mut self) -> RegionResult<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn string(&mut self) -> RegionResult<String> {
        let len = self.u16()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| RegionError::Serial(e.to_string()))
    }
}
