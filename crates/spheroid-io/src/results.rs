//! Results-table files
//!
//! Per-image measurement tables are plain CSV text: a header line
//! followed by one row per region. Aggregation reads tables back
//! line-by-line, so the read side makes no assumption about the column
//! set.

use crate::error::IoResult;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write a results table: header line plus data rows.
pub fn write_results(path: &Path, header: &str, rows: &[String]) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{header}")?;
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a text file as lines, without any interpretation.
pub fn read_lines(path: &Path) -> IoResult<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(reader.lines().collect::<Result<_, _>>()?)
}
