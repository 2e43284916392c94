//! Full analytics report for one selection.
//!
//! [`ChatReport`] runs every analytics function against one [`ChatLog`] and
//! collects the results into a single serializable value. Word analyses are
//! `None` when no stop-word list is available; everything else is always
//! present.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::{ChatReport, StopWords, UserSelection};
//! use chatlens::config::AnalysisConfig;
//! use chatlens::ChatParser;
//!
//! let log = ChatParser::new().parse_str(
//!     "[01/01/23, 10:00:00] Alice: Hello there\n[01/01/23, 10:05:00] Bob: Hi Alice",
//! )?;
//! let stop_words = StopWords::bundled();
//!
//! let report = ChatReport::build(
//!     &log,
//!     &UserSelection::Overall,
//!     Some(&stop_words),
//!     &AnalysisConfig::default(),
//! )
//! .with_comparison(&log, &UserSelection::user("Bob"));
//!
//! assert_eq!(report.stats.messages, 2);
//! assert!(report.common_words.is_some());
//! assert!(report.comparison.is_some());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::Serialize;

use super::content::{
    LengthStats, LinkCount, LinkReport, MediaCounts, link_analysis, media_analysis,
    message_length_analysis, popular_content_analysis,
};
use super::filter::UserSelection;
use super::stats::{
    ActivitySpan, BusyUsers, ChatStats, UserComparison, activity_span, compare_users,
    fetch_stats, most_busy_users,
};
use super::timeline::{
    ActivityHeatmap, DailyCount, MonthCount, MonthlyCount, WeekdayCount, activity_heatmap,
    daily_timeline, month_activity_map, monthly_timeline, week_activity_map,
};
use super::words::{StopWords, WordCloud, WordCount, create_wordcloud, most_common_words};
use crate::config::AnalysisConfig;
use crate::record::ChatLog;

/// Every analytics result for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub selection: UserSelection,
    /// Records dropped by the parser for malformed timestamps
    pub dropped_records: usize,
    pub stats: ChatStats,
    pub span: Option<ActivitySpan>,
    /// Computed over the whole log, whatever the selection
    pub busy_users: BusyUsers,
    pub daily_timeline: Vec<DailyCount>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub week_activity: Vec<WeekdayCount>,
    pub month_activity: Vec<MonthCount>,
    pub heatmap: ActivityHeatmap,
    pub media: MediaCounts,
    pub message_lengths: Vec<LengthStats>,
    pub common_words: Option<Vec<WordCount>>,
    pub wordcloud: Option<WordCloud>,
    /// Computed over the whole log, whatever the selection
    pub links: LinkReport,
    /// Computed over the whole log, whatever the selection
    pub popular_content: Vec<LinkCount>,
    pub comparison: Option<UserComparison>,
}

impl ChatReport {
    /// Runs every analysis for `selection`.
    ///
    /// Pass `None` for `stop_words` when the list could not be loaded; the
    /// word analyses are then skipped and everything else still runs.
    pub fn build(
        log: &ChatLog,
        selection: &UserSelection,
        stop_words: Option<&StopWords>,
        config: &AnalysisConfig,
    ) -> Self {
        let records = log.records();

        Self {
            selection: selection.clone(),
            dropped_records: log.dropped(),
            stats: fetch_stats(records, selection),
            span: activity_span(records, selection),
            busy_users: most_busy_users(records, config.top_users),
            daily_timeline: daily_timeline(records, selection),
            monthly_timeline: monthly_timeline(records, selection),
            week_activity: week_activity_map(records, selection),
            month_activity: month_activity_map(records, selection),
            heatmap: activity_heatmap(records, selection),
            media: media_analysis(records, selection),
            message_lengths: message_length_analysis(records, selection),
            common_words: stop_words
                .map(|stop| most_common_words(records, selection, stop, config.top_words)),
            wordcloud: stop_words
                .map(|stop| create_wordcloud(records, selection, stop, &config.wordcloud)),
            links: link_analysis(records, config.top_domains),
            popular_content: popular_content_analysis(records, config.top_content),
            comparison: None,
        }
    }

    /// Adds a comparison against `other`.
    ///
    /// Ignored when `other` is `Overall` or the report's own selection.
    #[must_use]
    pub fn with_comparison(mut self, log: &ChatLog, other: &UserSelection) -> Self {
        if !other.is_overall() && *other != self.selection {
            self.comparison = Some(compare_users(log.records(), &self.selection, other));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatParser;

    fn log() -> ChatLog {
        ChatParser::new()
            .parse_str(
                "\
[01/01/23, 10:00:00] Alice: Hello there https://example.com
[01/01/23, 10:05:00] Bob: Hi Alice
[31/02/23, 10:05:00] Bob: dropped
[02/01/23, 09:00:00] Alice added Carol
",
            )
            .unwrap()
    }

    #[test]
    fn test_build_overall() {
        let log = log();
        let stop = StopWords::bundled();
        let report = ChatReport::build(
            &log,
            &UserSelection::Overall,
            Some(&stop),
            &AnalysisConfig::default(),
        );
        assert_eq!(report.dropped_records, 1);
        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.stats.links, 1);
        assert_eq!(report.daily_timeline.len(), 2);
        assert_eq!(report.week_activity.len(), 7);
        assert_eq!(report.month_activity.len(), 12);
        assert_eq!(report.heatmap.total(), 3);
        assert_eq!(report.links.unique_links, 1);
        assert!(report.common_words.is_some());
        assert!(report.wordcloud.is_some());
        assert!(report.comparison.is_none());
    }

    #[test]
    fn test_build_without_stop_words() {
        let log = log();
        let report = ChatReport::build(
            &log,
            &UserSelection::user("Alice"),
            None,
            &AnalysisConfig::default(),
        );
        assert!(report.common_words.is_none());
        assert!(report.wordcloud.is_none());
        assert_eq!(report.stats.messages, 1);
        assert_eq!(report.busy_users.shares.len(), 3);
    }

    #[test]
    fn test_comparison_rules() {
        let log = log();
        let config = AnalysisConfig::default();
        let alice = UserSelection::user("Alice");

        let same = ChatReport::build(&log, &alice, None, &config).with_comparison(&log, &alice);
        assert!(same.comparison.is_none());

        let overall = ChatReport::build(&log, &alice, None, &config)
            .with_comparison(&log, &UserSelection::Overall);
        assert!(overall.comparison.is_none());

        let bob = ChatReport::build(&log, &alice, None, &config)
            .with_comparison(&log, &UserSelection::user("Bob"));
        let cmp = bob.comparison.unwrap();
        assert_eq!(cmp.first.user, "Alice");
        assert_eq!(cmp.second.user, "Bob");
    }

    #[test]
    fn test_build_empty_log() {
        let report = ChatReport::build(
            &ChatLog::default(),
            &UserSelection::Overall,
            Some(&StopWords::bundled()),
            &AnalysisConfig::default(),
        );
        assert_eq!(report.stats, ChatStats::default());
        assert!(report.span.is_none());
        assert!(report.busy_users.top.is_empty());
        assert_eq!(report.heatmap.total(), 0);
        assert!(report.common_words.unwrap().is_empty());
    }
}
