//! Content analyses: media placeholders, message lengths and shared links.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::filter::UserSelection;
use super::ranked_counts;
use super::timeline::{DailyCount, count_by_date};
use crate::parsing::domain_of;
use crate::record::MessageRecord;

/// Placeholder an export writes instead of an attached image.
pub const IMAGE_MARKER: &str = "image omitted";
/// Placeholder for an attached video.
pub const VIDEO_MARKER: &str = "video omitted";
/// Placeholder for an attached document.
pub const DOCUMENT_MARKER: &str = "document omitted";
/// Placeholder for an attached voice note or audio file.
pub const AUDIO_MARKER: &str = "audio omitted";

/// Media messages per category.
///
/// Categories are counted independently: a body containing two markers
/// counts once in each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaCounts {
    pub images: usize,
    pub videos: usize,
    pub documents: usize,
    pub audio: usize,
}

impl MediaCounts {
    /// `(label, count)` rows in display order.
    pub fn rows(&self) -> [(&'static str, usize); 4] {
        [
            ("Images", self.images),
            ("Videos", self.videos),
            ("Documents", self.documents),
            ("Audio", self.audio),
        ]
    }

    /// Sum over categories.
    pub fn total(&self) -> usize {
        self.images + self.videos + self.documents + self.audio
    }
}

/// Counts media placeholders by category.
pub fn media_analysis(records: &[MessageRecord], selection: &UserSelection) -> MediaCounts {
    selection
        .filter(records)
        .fold(MediaCounts::default(), |mut acc, record| {
            let body = record.body.as_str();
            acc.images += usize::from(body.contains(IMAGE_MARKER));
            acc.videos += usize::from(body.contains(VIDEO_MARKER));
            acc.documents += usize::from(body.contains(DOCUMENT_MARKER));
            acc.audio += usize::from(body.contains(AUDIO_MARKER));
            acc
        })
}

/// Descriptive statistics of body length (in characters) for one sender.
///
/// Quartiles use linear interpolation between closest ranks. `std` is the
/// sample standard deviation and is `None` for a single message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthStats {
    pub sender: String,
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: usize,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: usize,
}

impl LengthStats {
    fn from_lengths(sender: String, mut lengths: Vec<usize>) -> Option<Self> {
        lengths.sort_unstable();
        let count = lengths.len();
        let (&min, &max) = (lengths.first()?, lengths.last()?);

        let mean = lengths.iter().sum::<usize>() as f64 / count as f64;
        let std = (count > 1).then(|| {
            let var = lengths
                .iter()
                .map(|&l| (l as f64 - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            var.sqrt()
        });

        Some(Self {
            sender,
            count,
            mean,
            std,
            min,
            q25: quantile(&lengths, 0.25),
            median: quantile(&lengths, 0.5),
            q75: quantile(&lengths, 0.75),
            max,
        })
    }
}

/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[usize], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let (a, b) = (sorted[lo] as f64, sorted[hi] as f64);
    a + (b - a) * (pos - lo as f64)
}

/// Message length statistics per sender, ordered by sender name.
pub fn message_length_analysis(
    records: &[MessageRecord],
    selection: &UserSelection,
) -> Vec<LengthStats> {
    let mut by_sender: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for record in selection.filter(records) {
        by_sender
            .entry(record.sender.as_str())
            .or_default()
            .push(record.char_len());
    }

    by_sender
        .into_iter()
        .filter_map(|(sender, lengths)| LengthStats::from_lengths(sender.to_string(), lengths))
        .collect()
}

/// Occurrences of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

/// Link statistics for a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Distinct link strings
    pub unique_links: usize,

    /// Most frequent hosts, links without a host counted as `"N/A"`
    pub top_domains: Vec<DomainCount>,

    /// Messages containing at least one link, per date, oldest first
    pub activity: Vec<DailyCount>,
}

/// Summarizes the links shared across `records`.
///
/// `activity` only counts messages that carry a link; dates without any
/// link-bearing message are omitted.
pub fn link_analysis(records: &[MessageRecord], top_domains: usize) -> LinkReport {
    let links = || records.iter().flat_map(|r| r.extracted_links.iter());

    let unique_links = links().map(String::as_str).collect::<HashSet<_>>().len();

    let top_domains = ranked_counts(links().map(|link| domain_of(link)))
        .into_iter()
        .take(top_domains)
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();

    let activity = count_by_date(records.iter().filter(|r| !r.extracted_links.is_empty()));

    LinkReport {
        unique_links,
        top_domains,
        activity,
    }
}

/// Occurrences of one exact link string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCount {
    pub link: String,
    pub count: usize,
}

/// Most frequently repeated links (exact string match), most shared first.
pub fn popular_content_analysis(records: &[MessageRecord], limit: usize) -> Vec<LinkCount> {
    ranked_counts(records.iter().flat_map(|r| r.extracted_links.iter()))
        .into_iter()
        .take(limit)
        .map(|(link, count)| LinkCount { link, count })
        .collect()
}
