//! Configuration types for the parser and the analytics engine.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Defaults: top 5 users, top 20
//! words, top 10 domains and top 10 shared links.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//! use chatlens::ChatParser;
//!
//! let parser = ChatParser::with_config(ParserConfig::new().with_strict(true));
//! let analysis = AnalysisConfig::new().with_top_words(50);
//! assert_eq!(analysis.top_words, 50);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for parsing an export.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Abort on the first malformed timestamp instead of dropping the
    /// record and counting it (default: false)
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict timestamp handling.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Result sizes used by the analytics engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Senders listed by `most_busy_users` (default: 5)
    pub top_users: usize,

    /// Words listed by `most_common_words` (default: 20)
    pub top_words: usize,

    /// Domains listed by `link_analysis` (default: 10)
    pub top_domains: usize,

    /// Links listed by `popular_content_analysis` (default: 10)
    pub top_content: usize,

    /// Word cloud layout settings
    pub wordcloud: WordCloudConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
            top_domains: 10,
            top_content: 10,
            wordcloud: WordCloudConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_top_domains(mut self, n: usize) -> Self {
        self.top_domains = n;
        self
    }

    #[must_use]
    pub fn with_top_content(mut self, n: usize) -> Self {
        self.top_content = n;
        self
    }

    /// Replaces the word cloud settings.
    #[must_use]
    pub fn with_wordcloud(mut self, wordcloud: WordCloudConfig) -> Self {
        self.wordcloud = wordcloud;
        self
    }
}

/// Word cloud canvas and font scaling.
///
/// Font sizes are interpolated linearly between `min_font_size` (least
/// frequent kept word) and `max_font_size` (most frequent word).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Canvas width in pixels (default: 500)
    pub width: u32,

    /// Canvas height in pixels (default: 500)
    pub height: u32,

    /// Font size of the rarest kept word (default: 10)
    pub min_font_size: u32,

    /// Font size of the most frequent word (default: 100)
    pub max_font_size: u32,

    /// Maximum number of words in the layout (default: 200)
    pub max_words: usize,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            min_font_size: 10,
            max_font_size: 100,
            max_words: 200,
        }
    }
}

impl WordCloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the font size range. `min` is clamped to at most `max`.
    #[must_use]
    pub fn with_font_range(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min.min(max);
        self.max_font_size = max;
        self
    }

    /// Sets the maximum number of words.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}
