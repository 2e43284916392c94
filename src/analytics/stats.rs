//! Message, word, media and link totals per user.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::filter::UserSelection;
use super::ranked_counts;
use super::timeline::{DailyCount, daily_timeline};
use crate::analytics::content::IMAGE_MARKER;
use crate::parsing::extract_links;
use crate::record::MessageRecord;

/// Headline totals for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of records
    pub messages: usize,

    /// Whitespace-separated tokens across all bodies
    pub words: usize,

    /// Records whose body contains `"image omitted"`.
    ///
    /// Videos, documents and audio are only counted by
    /// [`media_analysis`](crate::analytics::media_analysis).
    pub media: usize,

    /// Links across all bodies
    pub links: usize,
}

/// Computes [`ChatStats`] for the selected records.
///
/// Links are extracted from each body at query time with the same extractor
/// the parser uses, so the count matches the records' `extracted_links`.
pub fn fetch_stats(records: &[MessageRecord], selection: &UserSelection) -> ChatStats {
    selection
        .filter(records)
        .fold(ChatStats::default(), |mut acc, record| {
            acc.messages += 1;
            acc.words += record.word_count();
            if record.body.contains(IMAGE_MARKER) {
                acc.media += 1;
            }
            acc.links += extract_links(&record.body).len();
            acc
        })
}

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub messages: usize,
}

/// Share of all messages sent by one sender, in percent (2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub percent: f64,
}

/// Most active senders and every sender's share of the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// Up to `limit` senders, most active first
    pub top: Vec<SenderCount>,

    /// Every sender, in the same order as `top`
    pub shares: Vec<SenderShare>,
}

/// Ranks senders by message count across the whole record set.
///
/// Ties are broken by first appearance in the log. System events count
/// under [`NOTIFICATION_SENDER`](crate::NOTIFICATION_SENDER) like any other sender.
pub fn most_busy_users(records: &[MessageRecord], limit: usize) -> BusyUsers {
    let total = records.len();
    let ranked = ranked_counts(records.iter().map(|r| r.sender.as_str()));

    let shares = ranked
        .iter()
        .map(|(sender, count)| SenderShare {
            sender: sender.clone(),
            percent: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(limit)
        .map(|(sender, messages)| SenderCount { sender, messages })
        .collect();

    BusyUsers { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Totals and daily activity for one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub user: String,
    pub stats: ChatStats,
    pub daily: Vec<DailyCount>,
}

impl UserSummary {
    fn build(records: &[MessageRecord], selection: &UserSelection) -> Self {
        Self {
            user: selection.to_string(),
            stats: fetch_stats(records, selection),
            daily: daily_timeline(records, selection),
        }
    }
}

/// Side-by-side summaries of two selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserComparison {
    pub first: UserSummary,
    pub second: UserSummary,
}

/// Compares two selections by totals and daily timeline.
pub fn compare_users(
    records: &[MessageRecord],
    first: &UserSelection,
    second: &UserSelection,
) -> UserComparison {
    UserComparison {
        first: UserSummary::build(records, first),
        second: UserSummary::build(records, second),
    }
}

/// Earliest and latest message of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivitySpan {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// Returns the first and last message timestamps, or `None` for an empty selection.
///
/// Uses timestamp order, not log order, since exports can be out of order.
pub fn activity_span(records: &[MessageRecord], selection: &UserSelection) -> Option<ActivitySpan> {
    selection.filter(records).fold(None, |span, record| {
        let ts = record.timestamp;
        Some(match span {
            None => ActivitySpan { first: ts, last: ts },
            Some(ActivitySpan { first, last }) => ActivitySpan {
                first: first.min(ts),
                last: last.max(ts),
            },
        })
    })
}
