//! Chat export parser.
//!
//! Converts the raw text of an exported chat into a [`ChatLog`]. The export
//! is split on every `[DD/MM/YY, HH:MM:SS] ` token that starts a line or
//! directly follows another token; the text up to the next token (or the end
//! of input) belongs to that token's record. Anything before the first token
//! is discarded as preamble.
//!
//! Supported shape:
//!
//! ```text
//! [01/01/23, 10:00:00] Alice: Hello there
//! second line of the same message
//! [01/01/23, 10:05:00] Bob: Hi Alice
//! [01/01/23, 10:06:00] Alice added Carol
//! ```
//!
//! # Boundary policy
//!
//! - The sender is the text before the first `": "` on the record's first
//!   line. Without one, the record is a system event and its sender is
//!   [`NOTIFICATION_SENDER`](crate::NOTIFICATION_SENDER). `"Name:"`
//!   followed by a line break is not a sender prefix.
//! - One trailing line terminator is the separator between records and is
//!   removed; interior newlines stay in the body.
//! - A token that is not a real date/time (e.g. `31/02/23`) drops its record
//!   and increments [`ChatLog::dropped`], unless
//!   [`ParserConfig::strict`] is set.
//!
//! # Example
//!
//! ```rust
//! use chatlens::ChatParser;
//!
//! let log = ChatParser::new()
//!     .parse_str("[01/01/23, 10:00:00] Alice: Hello there\n[01/01/23, 10:05:00] Bob: Hi Alice")?;
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.records()[1].sender, "Bob");
//! assert_eq!(log.records()[1].body, "Hi Alice");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::parsing::parse_timestamp;
use crate::parsing::timestamp::find_boundaries;
use crate::record::{ChatLog, MessageRecord};

/// `"<name>: "` prefix, name limited to the first line, first `": "` wins.
static SENDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\n]+?): ").expect("sender pattern is valid"));

/// Parser for exported chat logs.
///
/// The parser is stateless apart from its configuration; one instance can
/// parse any number of documents.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads a UTF-8 export from disk and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read, and
    /// [`ChatlensError::MalformedTimestamp`] in strict mode.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ChatLog, ChatlensError> {
        let content = fs::read_to_string(path.as_ref())?;
        self.parse_str(&content)
    }

    /// Parses export text held in memory.
    ///
    /// Input with no boundary token at all (including `""`) yields an empty
    /// log, not an error.
    ///
    /// # Errors
    ///
    /// Only in strict mode: [`ChatlensError::MalformedTimestamp`] for the
    /// first token that is not a valid calendar date/time.
    pub fn parse_str(&self, content: &str) -> Result<ChatLog, ChatlensError> {
        let boundaries = find_boundaries(content);

        if boundaries.is_empty() {
            debug!(bytes = content.len(), "no message boundaries found");
            return Ok(ChatLog::default());
        }

        let mut records = Vec::with_capacity(boundaries.len());
        let mut dropped = 0usize;

        for (i, boundary) in boundaries.iter().enumerate() {
            let body_end = boundaries
                .get(i + 1)
                .map_or(content.len(), |next| next.start);
            let candidate = strip_line_terminator(&content[boundary.end..body_end]);
            let token = boundary.token;

            match parse_timestamp(token) {
                Ok(timestamp) => records.push(build_record(timestamp, candidate)),
                Err(err) if self.config.strict => return Err(err),
                Err(err) => {
                    warn!(token, error = %err, "dropping record with malformed timestamp");
                    dropped += 1;
                }
            }
        }

        debug!(records = records.len(), dropped, "parsed chat export");
        Ok(ChatLog::new(records, dropped))
    }
}

/// Parses export text with the default configuration.
///
/// Never fails: malformed timestamps are dropped and counted.
pub fn parse(content: &str) -> ChatLog {
    // lenient mode has no error path
    ChatParser::new().parse_str(content).unwrap_or_default()
}

/// Splits `"<name>: rest"` into a sender and body, or marks a system event.
fn build_record(timestamp: chrono::NaiveDateTime, candidate: &str) -> MessageRecord {
    match split_sender(candidate) {
        Some((sender, body)) => MessageRecord::new(timestamp, sender, body),
        None => MessageRecord::notification(timestamp, candidate),
    }
}

/// Returns `(sender, body)` when the candidate starts with a `"<name>: "` prefix.
pub(crate) fn split_sender(candidate: &str) -> Option<(&str, &str)> {
    let caps = SENDER_PREFIX.captures(candidate)?;
    let name = caps.get(1)?;
    let prefix = caps.get(0)?;
    Some((name.as_str(), &candidate[prefix.end()..]))
}

fn strip_line_terminator(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
