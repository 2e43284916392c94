//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TIMESTAMP_OUTPUT_FORMAT;
use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Column names, in output order.
pub const CSV_HEADER: [&str; 13] = [
    "Timestamp",
    "Sender",
    "Body",
    "Links",
    "Date",
    "Year",
    "MonthNumber",
    "Month",
    "Day",
    "Weekday",
    "Hour",
    "Minute",
    "Period",
];

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: [`CSV_HEADER`]
/// - `Links` holds every extracted link joined with `", "`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], path: impl AsRef<Path>) -> Result<(), ChatlensError> {
    let file = File::create(path)?;
    write_records(records, file)
}

/// Converts records to a CSV string, same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String, ChatlensError> {
    let mut buf = Vec::new();
    write_records(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<(), ChatlensError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &MessageRecord) -> [String; 13] {
    [
        record.timestamp.format(TIMESTAMP_OUTPUT_FORMAT).to_string(),
        record.sender.clone(),
        record.body.clone(),
        record.extracted_links.join(", "),
        record.date_only.to_string(),
        record.year.to_string(),
        record.month_number.to_string(),
        record.month_name.to_string(),
        record.day_of_month.to_string(),
        record.weekday_name.to_string(),
        record.hour.to_string(),
        record.minute.to_string(),
        record.period_bucket.clone(),
    ]
}
