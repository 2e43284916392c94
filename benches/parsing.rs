//! Benchmarks for chatlens parsing and analytics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse_str`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analytics::{
    ChatReport, StopWords, UserSelection, activity_heatmap, daily_timeline, fetch_stats,
    link_analysis, most_busy_users, most_common_words,
};
use chatlens::config::AnalysisConfig;
use chatlens::output::{to_csv, to_jsonl};
use chatlens::{ChatLog, ChatParser};

use chrono::{Duration, NaiveDate};

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["Alice", "Bob", "Rahul", "Priya"];

fn generate_export(count: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap();

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let ts = (base + Duration::minutes(i as i64 * 7)).format("%d/%m/%y, %H:%M:%S");
        let line = match i % 10 {
            0 => format!("[{ts}] Alice added Priya"),
            1 => format!("[{ts}] Bob: image omitted"),
            2 => format!("[{ts}] Rahul: see https://example.com/item/{}", i % 37),
            3 => format!("[{ts}] Priya: first line {i}\nsecond line"),
            _ => format!(
                "[{ts}] {}: kya plan hai for the meeting number {i}",
                SENDERS[i % SENDERS.len()]
            ),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn generate_log(count: usize) -> ChatLog {
    ChatParser::new().parse_str(&generate_export(count)).unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let log = parser.parse_str(black_box(txt)).unwrap();
                black_box(log)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Analytics Benchmarks
// =============================================================================

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_stats");
    let selection = UserSelection::user("Alice");

    for size in [1_000_usize, 10_000, 100_000] {
        let log = generate_log(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| black_box(fetch_stats(black_box(log.records()), &selection)));
        });
    }

    group.finish();
}

fn bench_timelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("timelines");
    let log = generate_log(10_000);
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("daily_timeline", |b| {
        b.iter(|| black_box(daily_timeline(log.records(), &UserSelection::Overall)));
    });
    group.bench_function("activity_heatmap", |b| {
        b.iter(|| black_box(activity_heatmap(log.records(), &UserSelection::Overall)));
    });
    group.bench_function("most_busy_users", |b| {
        b.iter(|| black_box(most_busy_users(log.records(), 5)));
    });
    group.bench_function("link_analysis", |b| {
        b.iter(|| black_box(link_analysis(log.records(), 10)));
    });

    group.finish();
}

fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_common_words");
    let stop_words = StopWords::bundled();

    for size in [1_000_usize, 10_000] {
        let log = generate_log(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| {
                black_box(most_common_words(
                    log.records(),
                    &UserSelection::Overall,
                    &stop_words,
                    20,
                ))
            });
        });
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let log = generate_log(10_000);
    let stop_words = StopWords::bundled();
    let config = AnalysisConfig::default();

    c.bench_function("chat_report_10000", |b| {
        b.iter(|| {
            black_box(ChatReport::build(
                &log,
                &UserSelection::Overall,
                Some(&stop_words),
                &config,
            ))
        });
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let log = generate_log(10_000);
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("to_csv", |b| {
        b.iter(|| black_box(to_csv(log.records()).unwrap()));
    });
    group.bench_function("to_jsonl", |b| {
        b.iter(|| black_box(to_jsonl(log.records()).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_str,
    bench_stats,
    bench_timelines,
    bench_words,
    bench_full_report,
    bench_output,
);
criterion_main!(benches);
