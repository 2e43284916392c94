//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Writes records to a JSONL file, one compact object per line.
pub fn write_jsonl(records: &[MessageRecord], path: impl AsRef<Path>) -> Result<(), ChatlensError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string, same format as [`write_jsonl`].
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String, ChatlensError> {
    let mut buf = Vec::new();
    write_lines(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(records: &[MessageRecord], writer: &mut W) -> Result<(), ChatlensError> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}
