//! Property-based tests for chatlens.
//!
//! These tests generate random chat exports to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chatlens::analytics::{
    UserSelection, activity_heatmap, daily_timeline, fetch_stats, media_analysis,
    most_busy_users, week_activity_map,
};
use chatlens::parsing::period_bucket;
use chatlens::{ChatLog, NOTIFICATION_SENDER, parser::parse};

/// One generated line: (timestamp, sender or None for a system event, body)
type Line = (NaiveDateTime, Option<String>, String);

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    // Two-digit years only cover 2000-2068 unambiguously
    (2000i32..2060, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, m, d, h, min, s)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(h, min, s))
                .unwrap()
        },
    )
}

/// Fast: select from predefined senders (no regex strategies)
fn arb_sender() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(
        0.85,
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Rahul Sharma".to_string(),
            "Иван".to_string(),
            "+91 98765 43210".to_string(),
            "🔥User🔥".to_string(),
        ]),
    )
}

fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hi there!".to_string(),
        "note: with a colon".to_string(),
        "Привет мир".to_string(),
        "image omitted".to_string(),
        "video omitted".to_string(),
        "‎report.pdf • 2 pages document omitted".to_string(),
        "audio omitted".to_string(),
        "image omitted video omitted".to_string(),
        "see https://example.com/a?b=1".to_string(),
        "line one\nline two".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "quoting [01/01/23, 10:00:00] inline".to_string(),
    ])
}

fn arb_lines(max_len: usize) -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec((arb_timestamp(), arb_sender(), arb_body()), 0..max_len)
}

/// System event bodies must not look like a `name: ` prefix.
fn event_body(body: &str) -> String {
    format!("Alice changed the subject {}", body.replace(": ", " "))
}

fn render(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|(ts, sender, body)| {
            let token = ts.format("%d/%m/%y, %H:%M:%S");
            match sender {
                Some(name) => format!("[{token}] {name}: {body}\n"),
                None => format!("[{token}] {}\n", event_body(body)),
            }
        })
        .collect()
}

fn parsed(lines: &[Line]) -> ChatLog {
    parse(&render(lines))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Rendering records in the export grammar and parsing them back
    /// recovers timestamp, sender and body.
    #[test]
    fn parse_recovers_rendered_records(lines in arb_lines(40)) {
        let log = parsed(&lines);
        prop_assert_eq!(log.len(), lines.len());
        prop_assert_eq!(log.dropped(), 0);

        for (record, (ts, sender, body)) in log.records().iter().zip(&lines) {
            prop_assert_eq!(record.timestamp, *ts);
            match sender {
                Some(name) => {
                    prop_assert_eq!(&record.sender, name);
                    prop_assert_eq!(&record.body, body);
                }
                None => {
                    prop_assert_eq!(record.sender.as_str(), NOTIFICATION_SENDER);
                    prop_assert_eq!(record.body.clone(), event_body(body));
                }
            }
        }
    }

    /// Parsing is deterministic.
    #[test]
    fn parse_is_idempotent(lines in arb_lines(30)) {
        let text = render(&lines);
        prop_assert_eq!(parse(&text), parse(&text));
    }

    /// Every hour maps to exactly one of 24 distinct buckets.
    #[test]
    fn period_bucket_is_total(hour in 0u32..24) {
        let bucket = period_bucket(hour);
        prop_assert!(!bucket.is_empty());
        let all: std::collections::HashSet<String> = (0..24).map(period_bucket).collect();
        prop_assert_eq!(all.len(), 24);
        prop_assert!(all.contains(&bucket));
    }

    /// Per-user message counts add up to the overall count.
    #[test]
    fn user_counts_sum_to_overall(lines in arb_lines(40)) {
        let log = parsed(&lines);
        let overall = fetch_stats(log.records(), &UserSelection::Overall);
        let per_user: usize = log
            .senders()
            .into_iter()
            .map(|s| fetch_stats(log.records(), &UserSelection::user(s)).messages)
            .sum();
        prop_assert_eq!(per_user, overall.messages);

        let busy = most_busy_users(log.records(), usize::MAX);
        prop_assert_eq!(busy.top.iter().map(|s| s.messages).sum::<usize>(), overall.messages);
    }

    /// Every record lands in exactly one day, weekday and heatmap cell.
    #[test]
    fn timelines_conserve_messages(lines in arb_lines(40)) {
        let log = parsed(&lines);
        let all = UserSelection::Overall;
        let n = log.len();

        prop_assert_eq!(daily_timeline(log.records(), &all).iter().map(|d| d.messages).sum::<usize>(), n);
        prop_assert_eq!(week_activity_map(log.records(), &all).iter().map(|w| w.messages).sum::<usize>(), n);
        prop_assert_eq!(activity_heatmap(log.records(), &all).total(), n);
    }

    /// Media categories are counted per selection and add up across users.
    #[test]
    fn media_counts_conserved_across_users(lines in arb_lines(40)) {
        let log = parsed(&lines);
        let overall = media_analysis(log.records(), &UserSelection::Overall);
        let summed = log
            .senders()
            .into_iter()
            .map(|s| media_analysis(log.records(), &UserSelection::user(s)))
            .fold((0, 0, 0, 0), |acc, m| {
                (acc.0 + m.images, acc.1 + m.videos, acc.2 + m.documents, acc.3 + m.audio)
            });
        prop_assert_eq!(summed, (overall.images, overall.videos, overall.documents, overall.audio));
        prop_assert!(fetch_stats(log.records(), &UserSelection::Overall).media <= log.len());
    }

    /// Arbitrary text never panics the parser.
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let log = parse(&text);
        prop_assert!(log.len() <= text.len());
    }
}
