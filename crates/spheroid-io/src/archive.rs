//! ZIP container
//!
//! Minimal ZIP writer/reader for region archives: one deflate-compressed
//! entry per region, no encryption, no ZIP64. The writer emits local
//! headers, a central directory, and the end record; the reader locates
//! the end record and walks the central directory, accepting stored and
//! deflated entries.

use crate::error::{IoError, IoResult};
use miniz_oxide::deflate::compress_to_vec;
use miniz_oxide::inflate::decompress_to_vec;
use std::io::Write;

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_SIG: u32 = 0x0201_4b50;
const END_RECORD_SIG: u32 = 0x0605_4b50;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATED: u16 = 8;

const DEFLATE_LEVEL: u8 = 6;

/// One named payload inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// CRC-32 (IEEE, reflected) of a byte slice.
fn crc32(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xedb8_8320 & mask);
        }
    }
    !crc
}

/// Write entries as a ZIP archive.
pub fn write_zip<W: Write>(mut writer: W, entries: &[ArchiveEntry]) -> IoResult<()> {
    struct Record {
        name: Vec<u8>,
        crc: u32,
        compressed_len: u32,
        uncompressed_len: u32,
        method: u16,
        offset: u32,
    }

    let mut records = Vec::with_capacity(entries.len());
    let mut offset = 0u32;

    for entry in entries {
        let name = entry.name.as_bytes().to_vec();
        if name.len() > u16::MAX as usize {
            return Err(IoError::InvalidData(format!(
                "entry name too long: {} bytes",
                name.len()
            )));
        }
        let compressed = compress_to_vec(&entry.data, DEFLATE_LEVEL);
        // Deflate can expand tiny payloads; store those verbatim
        let (method, payload) = if compressed.len() < entry.data.len() {
            (METHOD_DEFLATED, compressed)
        } else {
            (METHOD_STORED, entry.data.clone())
        };
        let record = Record {
            crc: crc32(&entry.data),
            compressed_len: payload.len() as u32,
            uncompressed_len: entry.data.len() as u32,
            method,
            offset,
            name,
        };

        writer.write_all(&LOCAL_HEADER_SIG.to_le_bytes())?;
        writer.write_all(&20u16.to_le_bytes())?; // version needed
        writer.write_all(&0u16.to_le_bytes())?; // flags
        writer.write_all(&record.method.to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // mod time
        writer.write_all(&0u16.to_le_bytes())?; // mod date
        writer.write_all(&record.crc.to_le_bytes())?;
        writer.write_all(&record.compressed_len.to_le_bytes())?;
        writer.write_all(&record.uncompressed_len.to_le_bytes())?;
        writer.write_all(&(record.name.len() as u16).to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // extra length
        writer.write_all(&record.name)?;
        writer.write_all(&payload)?;

        offset += 30 + record.name.len() as u32 + record.compressed_len;
        records.push(record);
    }

    let central_offset = offset;
    let mut central_size = 0u32;
    for record in &records {
        writer.write_all(&CENTRAL_DIR_SIG.to_le_bytes())?;
        writer.write_all(&20u16.to_le_bytes())?; // version made by
        writer.write_all(&20u16.to_le_bytes())?; // version needed
        writer.write_all(&0u16.to_le_bytes())?; // flags
        writer.write_all(&record.method.to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // mod time
        writer.write_all(&0u16.to_le_bytes())?; // mod date
        writer.write_all(&record.crc.to_le_bytes())?;
        writer.write_all(&record.compressed_len.to_le_bytes())?;
        writer.write_all(&record.uncompressed_len.to_le_bytes())?;
        writer.write_all(&(record.name.len() as u16).to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // extra length
        writer.write_all(&0u16.to_le_bytes())?; // comment length
        writer.write_all(&0u16.to_le_bytes())?; // disk number
        writer.write_all(&0u16.to_le_bytes())?; // internal attributes
        writer.write_all(&0u32.to_le_bytes())?; // external attributes
        writer.write_all(&record.offset.to_le_bytes())?;
        writer.write_all(&record.name)?;
        central_size += 46 + record.name.len() as u32;
    }

    writer.write_all(&END_RECORD_SIG.to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?; // this disk
    writer.write_all(&0u16.to_le_bytes())?; // central dir disk
    writer.write_all(&(records.len() as u16).to_le_bytes())?;
    writer.write_all(&(records.len() as u16).to_le_bytes())?;
    writer.write_all(&central_size.to_le_bytes())?;
    writer.write_all(&central_offset.to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?; // comment length
    Ok(())
}

fn read_u16(data: &[u8], pos: usize) -> IoResult<u16> {
    data.get(pos..pos + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or_else(|| IoError::InvalidData("truncated archive".into()))
}

fn read_u32(data: &[u8], pos: usize) -> IoResult<u32> {
    data.get(pos..pos + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| IoError::InvalidData("truncated archive".into()))
}

/// Parse a ZIP archive into its entries, in central-directory order.
pub fn read_zip(data: &[u8]) -> IoResult<Vec<ArchiveEntry>> {
    // Locate the end record: scan backwards over the trailing comment
    let end_pos = (0..=data.len().saturating_sub(22))
        .rev()
        .find(|&pos| read_u32(data, pos).is_ok_and(|sig| sig == END_RECORD_SIG))
        .ok_or_else(|| IoError::InvalidData("missing end-of-archive record".into()))?;

    let entry_count = read_u16(data, end_pos + 10)? as usize;
    let mut pos = read_u32(data, end_pos + 16)? as usize;

    let mut entries = Vec::with_capacity(entry_count);
    for _ in 0..entry_count {
        if read_u32(data, pos)? != CENTRAL_DIR_SIG {
            return Err(IoError::InvalidData("bad central directory entry".into()));
        }
        let method = read_u16(data, pos + 10)?;
        let crc = read_u32(data, pos + 16)?;
        let compressed_len = read_u32(data, pos + 20)? as usize;
        let name_len = read_u16(data, pos + 28)? as usize;
        let extra_len = read_u16(data, pos + 30)? as usize;
        let comment_len = read_u16(data, pos + 32)? as usize;
        let local_offset = read_u32(data, pos + 42)? as usize;
        let name_bytes = data
            .get(pos + 46..pos + 46 + name_len)
            .ok_or_else(|| IoError::InvalidData("truncated archive".into()))?;
        let name = String::from_utf8(name_bytes.to_vec())
            .map_err(|e| IoError::InvalidData(e.to_string()))?;

        // Local header: skip to the payload
        if read_u32(data, local_offset)? != LOCAL_HEADER_SIG {
            return Err(IoError::InvalidData("bad local header".into()));
        }
        let local_name_len = read_u16(data, local_offset + 26)? as usize;
        let local_extra_len = read_u16(data, local_offset + 28)? as usize;
        let payload_start = local_offset + 30 + local_name_len + local_extra_len;
        let payload = data
            .get(payload_start..payload_start + compressed_len)
            .ok_or_else(|| IoError::InvalidData("truncated entry payload".into()))?;

        let entry_data = match method {
            METHOD_STORED => payload.to_vec(),
            METHOD_DEFLATED => decompress_to_vec(payload)
                .map_err(|e| IoError::InvalidData(format!("deflate error: {e}")))?,
            other => {
                return Err(IoError::InvalidData(format!(
                    "unsupported compression method {other}"
                )));
            }
        };
        if crc32(&entry_data) != crc {
            return Err(IoError::InvalidData(format!("CRC mismatch in '{name}'")));
        }

        entries.push(ArchiveEntry {
            name,
            data: entry_data,
        });
        pos += 46 + name_len + extra_len + comment_len;
    }
    Ok(entries)
}
