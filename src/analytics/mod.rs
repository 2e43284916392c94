//! Analytics engine.
//!
//! A library of pure query functions over a parsed record set. Each function
//! answers one question and returns a plain, serializable value; none of them
//! mutates its input or keeps state between calls, so any number of them can
//! run over the same [`ChatLog`](crate::ChatLog) concurrently.
//!
//! - [`filter`] - [`UserSelection`] (`"Overall"` or one sender)
//! - [`stats`] - [`fetch_stats`], [`most_busy_users`], [`compare_users`], [`activity_span`]
//! - [`timeline`] - [`daily_timeline`], [`monthly_timeline`], [`week_activity_map`],
//!   [`month_activity_map`], [`activity_heatmap`]
//! - [`content`] - [`media_analysis`], [`message_length_analysis`], [`link_analysis`],
//!   [`popular_content_analysis`]
//! - [`words`] - [`StopWords`], [`most_common_words`], [`create_wordcloud`]
//! - [`report`] - [`ChatReport`], every result for one selection
//!
//! Every function accepts an empty record set and returns empty or
//! zero-valued results for it.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::analytics::{UserSelection, fetch_stats, week_activity_map};
//! use chatlens::ChatParser;
//!
//! let log = ChatParser::new().parse_str(
//!     "[02/01/23, 10:00:00] Alice: Hello there\n[04/01/23, 10:05:00] Bob: Hi Alice",
//! )?;
//!
//! let stats = fetch_stats(log.records(), &UserSelection::Overall);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.words, 4);
//!
//! let week = week_activity_map(log.records(), &UserSelection::user("Bob"));
//! assert_eq!(week[2].weekday, "Wednesday");
//! assert_eq!(week[2].messages, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashMap;

pub mod content;
pub mod filter;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod words;

pub use content::{
    DomainCount, LengthStats, LinkCount, LinkReport, MediaCounts, link_analysis, media_analysis,
    message_length_analysis, popular_content_analysis,
};
pub use filter::UserSelection;
pub use report::ChatReport;
pub use stats::{
    ActivitySpan, BusyUsers, ChatStats, SenderCount, SenderShare, UserComparison, UserSummary,
    activity_span, compare_users, fetch_stats, most_busy_users,
};
pub use timeline::{
    ActivityHeatmap, DailyCount, HeatmapRow, MonthCount, MonthlyCount, WeekdayCount,
    activity_heatmap, daily_timeline, month_activity_map, monthly_timeline, week_activity_map,
};
pub use words::{
    CloudWord, StopWords, WordCloud, WordCount, create_wordcloud, most_common_words,
};

/// Counts occurrences and ranks them by count, descending.
///
/// Ties keep first-encountered order (the sort is stable).
pub(crate) fn ranked_counts<I, S>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        let key = item.as_ref();
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.to_string(), counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
