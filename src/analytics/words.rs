//! Word frequency analyses.
//!
//! Both [`most_common_words`] and [`create_wordcloud`] skip system events and
//! media placeholders, lowercase every token and drop stop words before
//! counting. The stop-word list is a [`StopWords`] value loaded once per
//! session and passed in explicitly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::content::{AUDIO_MARKER, DOCUMENT_MARKER, IMAGE_MARKER, VIDEO_MARKER};
use super::filter::UserSelection;
use super::ranked_counts;
use crate::config::WordCloudConfig;
use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// File name the stop-word list is looked up under by default.
pub const DEFAULT_STOPWORDS_FILE: &str = "stop_hinglish.txt";

/// Body used by Android exports for any omitted attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

static BUNDLED_STOPWORDS: &str = include_str!("../../assets/stop_hinglish.txt");

/// Immutable set of lowercase tokens excluded from word counts.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::StopWords;
///
/// let stop = StopWords::parse("the a\nHAI");
/// assert!(stop.contains("hai"));
/// assert!(!stop.contains("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a list from text, tokens separated by any whitespace.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a stop-word file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ChatlensError::missing_resource(path, e))?;
        let stop_words = Self::parse(&text);
        debug!(path = %path.display(), words = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// The Hinglish/English list shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_STOPWORDS)
    }

    /// Returns `true` if `word` (already lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns `true` if a body is only an attachment placeholder.
///
/// Matches `<Media omitted>` and bodies ending in one of the four
/// `"... omitted"` markers (document placeholders carry a file name first).
/// Invisible direction marks some exports prepend are ignored.
pub fn is_media_placeholder(body: &str) -> bool {
    let trimmed = body.trim_matches(|c: char| c.is_whitespace() || c == '\u{200e}');
    trimmed == MEDIA_OMITTED
        || [IMAGE_MARKER, VIDEO_MARKER, DOCUMENT_MARKER, AUDIO_MARKER]
            .iter()
            .any(|marker| trimmed.ends_with(marker))
}

/// Lowercased, stop-word-free tokens of the selection's authored text.
fn counted_words<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    selection
        .filter(records)
        .filter(|r| !r.is_notification() && !is_media_placeholder(&r.body))
        .flat_map(|r| {
            r.body
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Up to `limit` most frequent words, ties in first-seen order.
pub fn most_common_words(
    records: &[MessageRecord],
    selection: &UserSelection,
    stop_words: &StopWords,
    limit: usize,
) -> Vec<WordCount> {
    ranked_counts(counted_words(records, selection, stop_words))
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// One word placed in a word cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`
    pub weight: f64,
    pub font_size: u32,
}

/// Frequency-weighted word layout, ready for a renderer to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    /// Most frequent first
    pub words: Vec<CloudWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builds a word cloud layout for the selection.
///
/// Keeps at most `config.max_words` words. Font sizes scale linearly with
/// weight between the configured minimum and maximum.
pub fn create_wordcloud(
    records: &[MessageRecord],
    selection: &UserSelection,
    stop_words: &StopWords,
    config: &WordCloudConfig,
) -> WordCloud {
    let ranked = ranked_counts(counted_words(records, selection, stop_words));
    let max_count = ranked.first().map_or(1, |(_, count)| *count) as f64;
    let span = f64::from(config.max_font_size.saturating_sub(config.min_font_size));

    let words = ranked
        .into_iter()
        .take(config.max_words)
        .map(|(word, count)| {
            let weight = count as f64 / max_count;
            CloudWord {
                word,
                count,
                weight,
                font_size: config.min_font_size + (span * weight).round() as u32,
            }
        })
        .collect();

    WordCloud {
        width: config.width,
        height: config.height,
        words,
    }
}
