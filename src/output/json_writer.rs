//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-02T14:05:00", "sender": "Alice", "body": "Hello", ...}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], path: impl AsRef<Path>) -> Result<(), ChatlensError> {
    let json = to_json(records)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string, same format as [`write_json`].
pub fn to_json(records: &[MessageRecord]) -> Result<String, ChatlensError> {
    Ok(serde_json::to_string_pretty(records)?)
}
