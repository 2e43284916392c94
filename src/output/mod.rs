//! Record set writers.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited CSV with a header row (`csv-output` feature)
//! - [`write_json`] / [`to_json`] - pretty JSON array (`json-output` feature)
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line (`json-output` feature)
//!
//! Every writer emits all record columns, derived calendar fields included,
//! so an export can be re-analysed without re-parsing the original log.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::output::{to_csv, write_jsonl};
//! use chatlens::ChatParser;
//!
//! let log = ChatParser::new().parse_file("chat.txt")?;
//!
//! write_jsonl(log.records(), "records.jsonl")?;
//! let csv = to_csv(log.records())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by the flat (CSV) writer.
#[cfg(feature = "csv-output")]
pub(crate) const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
