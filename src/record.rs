//! Parsed message records and the record set that holds them.
//!
//! A [`MessageRecord`] is one message or system event from an export, with
//! every calendar field the analytics engine groups by computed once at
//! construction. A [`ChatLog`] is the ordered, immutable collection the
//! parser produces from one document.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "see https://example.com");
//!
//! assert_eq!(record.weekday_name, "Monday");
//! assert_eq!(record.period_bucket, "14-15");
//! assert_eq!(record.extracted_links, vec!["https://example.com"]);
//! ```

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::analytics::filter::UserSelection;
use crate::parsing::{extract_links, month_name, period_bucket, weekday_name};

/// Sender value reserved for system events (joins, leaves, title changes).
///
/// A participant whose display name is literally this string cannot be told
/// apart from a system event.
pub const NOTIFICATION_SENDER: &str = "group_notification";

/// One parsed message or system event.
///
/// | Field | Derived from |
/// |-------|--------------|
/// | `timestamp` | bracketed prefix |
/// | `sender`, `body` | text after the prefix, split on the first `": "` |
/// | `extracted_links` | `body` |
/// | everything else | `timestamp` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    /// When the message was sent, to the second.
    pub timestamp: NaiveDateTime,

    /// Author name, or [`NOTIFICATION_SENDER`] for system events.
    pub sender: String,

    /// Message text without the `sender: ` prefix.
    ///
    /// Multi-line messages keep their interior newlines.
    pub body: String,

    /// Links found in `body`, in order. Never removed from `body`.
    pub extracted_links: Vec<String>,

    pub date_only: NaiveDate,
    pub year: i32,
    pub month_number: u32,
    pub month_name: &'static str,
    pub day_of_month: u32,
    pub weekday_name: &'static str,
    pub hour: u32,
    pub minute: u32,

    /// Hour-range label, see [`period_bucket`].
    pub period_bucket: String,
}

impl MessageRecord {
    /// Builds a record and derives its calendar fields and links.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let extracted_links = extract_links(&body);
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender: sender.into(),
            body,
            extracted_links,
            date_only: timestamp.date(),
            year: timestamp.year(),
            month_number: timestamp.month(),
            month_name: month_name(timestamp.month()),
            day_of_month: timestamp.day(),
            weekday_name: weekday_name(timestamp.weekday()),
            hour,
            minute: timestamp.minute(),
            period_bucket: period_bucket(hour),
        }
    }

    /// Builds a system-event record.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, NOTIFICATION_SENDER, body)
    }

    /// Returns `true` if this record is a system event rather than an authored message.
    pub fn is_notification(&self) -> bool {
        self.sender == NOTIFICATION_SENDER
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Body length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// The ordered record set parsed from one export.
///
/// Records keep their order of appearance in the source text; nothing is
/// sorted. The set is never modified after parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatLog {
    records: Vec<MessageRecord>,
    dropped: usize,
}

impl ChatLog {
    /// Wraps parsed records together with the number of dropped ones.
    pub fn new(records: Vec<MessageRecord>, dropped: usize) -> Self {
        Self { records, dropped }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Number of boundary tokens whose timestamp was malformed.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the input contained no usable message (including empty input).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct senders, sorted. Includes [`NOTIFICATION_SENDER`] when present.
    pub fn senders(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Values a user can pick from: `"Overall"` followed by [`senders`](Self::senders).
    pub fn selection_options(&self) -> Vec<String> {
        let mut options = vec![UserSelection::OVERALL.to_string()];
        options.extend(self.senders());
        options
    }

    /// Records matching `selection`, in source order.
    pub fn select<'a>(
        &'a self,
        selection: &'a UserSelection,
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        selection.filter(&self.records)
    }

    /// Consumes the log and returns its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl IntoIterator for ChatLog {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let r = MessageRecord::new(ts(2023, 3, 15, 23, 45), "Alice", "Hi");
        assert_eq!(r.date_only, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(r.year, 2023);
        assert_eq!(r.month_number, 3);
        assert_eq!(r.month_name, "March");
        assert_eq!(r.day_of_month, 15);
        assert_eq!(r.weekday_name, "Wednesday");
        assert_eq!(r.hour, 23);
        assert_eq!(r.minute, 45);
        assert_eq!(r.period_bucket, "23-00");
    }

    #[test]
    fn test_midnight_bucket() {
        let r = MessageRecord::new(ts(2023, 1, 1, 0, 10), "Alice", "late");
        assert_eq!(r.period_bucket, "00-1");
    }

    #[test]
    fn test_notification() {
        let r = MessageRecord::notification(ts(2023, 1, 1, 9, 0), "Alice added Bob");
        assert!(r.is_notification());
        assert_eq!(r.sender, NOTIFICATION_SENDER);
        assert!(!MessageRecord::new(ts(2023, 1, 1, 9, 0), "Alice", "x").is_notification());
    }

    #[test]
    fn test_links_extracted_at_construction() {
        let r = MessageRecord::new(ts(2023, 1, 1, 9, 0), "Bob", "a https://x.io b");
        assert_eq!(r.extracted_links, vec!["https://x.io"]);
        assert!(r.body.contains("https://x.io"));
    }

    #[test]
    fn test_word_count_and_char_len() {
        let r = MessageRecord::new(ts(2023, 1, 1, 9, 0), "Bob", "  héllo   wörld \n again");
        assert_eq!(r.word_count(), 3);
        assert_eq!(r.char_len(), "  héllo   wörld \n again".chars().count());
        assert_eq!(MessageRecord::new(ts(2023, 1, 1, 9, 0), "Bob", "   ").word_count(), 0);
    }

    #[test]
    fn test_chat_log_senders_sorted_unique() {
        let log = ChatLog::new(
            vec![
                MessageRecord::new(ts(2023, 1, 1, 9, 0), "Zed", "a"),
                MessageRecord::new(ts(2023, 1, 1, 9, 1), "Alice", "b"),
                MessageRecord::notification(ts(2023, 1, 1, 9, 2), "Zed left"),
                MessageRecord::new(ts(2023, 1, 1, 9, 3), "Alice", "c"),
            ],
            0,
        );
        assert_eq!(log.senders(), vec!["Alice", "Zed", NOTIFICATION_SENDER]);
        assert_eq!(
            log.selection_options(),
            vec!["Overall", "Alice", "Zed", NOTIFICATION_SENDER]
        );
    }

    #[test]
    fn test_chat_log_select() {
        let log = ChatLog::new(
            vec![
                MessageRecord::new(ts(2023, 1, 1, 9, 0), "Alice", "a"),
                MessageRecord::new(ts(2023, 1, 1, 9, 1), "Bob", "b"),
            ],
            1,
        );
        let alice = UserSelection::user("Alice");
        assert_eq!(log.select(&alice).count(), 1);
        assert_eq!(log.select(&UserSelection::Overall).count(), 2);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_empty_chat_log() {
        let log = ChatLog::default();
        assert!(log.is_empty());
        assert!(log.senders().is_empty());
        assert_eq!(log.selection_options(), vec!["Overall"]);
    }
}
