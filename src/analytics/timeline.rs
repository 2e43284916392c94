//! Activity over time: per day, per month, per weekday, and weekday × hour.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::filter::UserSelection;
use crate::parsing::{MONTHS, WEEKDAYS, month_name, period_bucket};
use crate::record::MessageRecord;

/// Messages sent on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// One row per date with at least one message, oldest first.
pub fn daily_timeline(records: &[MessageRecord], selection: &UserSelection) -> Vec<DailyCount> {
    count_by_date(selection.filter(records))
}

/// Groups records by `date_only` into ascending rows.
pub(crate) fn count_by_date<'a>(
    records: impl Iterator<Item = &'a MessageRecord>,
) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *per_day.entry(record.date_only).or_insert(0) += 1;
    }

    per_day
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

/// Messages sent in one calendar month of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_number: u32,
    /// `"<Month>-<year>"`, e.g. `"March-2023"`
    pub label: String,
    pub messages: usize,
}

/// One row per (year, month) with at least one message, oldest first.
pub fn monthly_timeline(records: &[MessageRecord], selection: &UserSelection) -> Vec<MonthlyCount> {
    let mut per_month: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in selection.filter(records) {
        *per_month
            .entry((record.year, record.month_number))
            .or_insert(0) += 1;
    }

    per_month
        .into_iter()
        .map(|((year, month_number), messages)| MonthlyCount {
            year,
            month_number,
            label: format!("{}-{}", month_name(month_number), year),
            messages,
        })
        .collect()
}

/// Messages sent on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: &'static str,
    pub messages: usize,
}

/// Message count per weekday, always seven rows from Monday to Sunday.
pub fn week_activity_map(records: &[MessageRecord], selection: &UserSelection) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for record in selection.filter(records) {
        if let Some(i) = weekday_index(record.weekday_name) {
            counts[i] += 1;
        }
    }

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(&weekday, messages)| WeekdayCount { weekday, messages })
        .collect()
}

/// Messages sent in one month name, across all years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub messages: usize,
}

/// Message count per month name, always twelve rows from January to December.
pub fn month_activity_map(records: &[MessageRecord], selection: &UserSelection) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for record in selection.filter(records) {
        if let Some(slot) = counts.get_mut(record.month_number.wrapping_sub(1) as usize) {
            *slot += 1;
        }
    }

    MONTHS
        .iter()
        .zip(counts)
        .map(|(&month, messages)| MonthCount { month, messages })
        .collect()
}

/// One weekday's counts across all period buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub weekday: &'static str,
    pub counts: Vec<usize>,
}

/// Weekday × hour-of-day message counts.
///
/// Always a full 7 × 24 grid: rows Monday..Sunday, columns in hour order
/// (`"00-1"`, `"1-2"`, … `"23-00"`), with zero for combinations that never
/// occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub periods: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl ActivityHeatmap {
    fn empty() -> Self {
        Self {
            periods: (0..24).map(period_bucket).collect(),
            rows: WEEKDAYS
                .iter()
                .map(|&weekday| HeatmapRow {
                    weekday,
                    counts: vec![0; 24],
                })
                .collect(),
        }
    }

    /// Count for a weekday name and period label, `0` for unknown labels.
    pub fn get(&self, weekday: &str, period: &str) -> usize {
        let Some(row) = self.rows.iter().find(|r| r.weekday == weekday) else {
            return 0;
        };
        self.periods
            .iter()
            .position(|p| p == period)
            .map_or(0, |col| row.counts[col])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.rows.iter().flat_map(|r| r.counts.iter()).sum()
    }
}

/// Builds the weekday × period heatmap for the selection.
pub fn activity_heatmap(records: &[MessageRecord], selection: &UserSelection) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::empty();
    for record in selection.filter(records) {
        let (Some(row), Some(cell)) = (
            weekday_index(record.weekday_name),
            usize::try_from(record.hour).ok().filter(|h| *h < 24),
        ) else {
            continue;
        };
        heatmap.rows[row].counts[cell] += 1;
    }
    heatmap
}

fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAYS.iter().position(|&w| w == name)
}
