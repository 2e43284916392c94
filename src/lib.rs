//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp group-chat logs into typed
//! message records and answering activity questions about them.
//!
//! ## Overview
//!
//! A chat export is a plain-text document where every message starts with a
//! bracketed timestamp:
//!
//! ```text
//! [14/03/23, 09:15:02] Alice: Morning all
//! [14/03/23, 09:16:40] Bob: Hi! see https://example.com/agenda
//! second line of Bob's message
//! [14/03/23, 09:20:00] Alice added Carol
//! ```
//!
//! The [`parser`] splits such a document into [`MessageRecord`]s, with system
//! events (joins, leaves, title changes) attributed to [`NOTIFICATION_SENDER`].
//! The [`analytics`] engine then answers questions over the resulting
//! [`ChatLog`] for everyone (`"Overall"`) or a single sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let log = ChatParser::new().parse_str(
//!     "[14/03/23, 09:15:02] Alice: Morning all\n\
//!      [14/03/23, 09:16:40] Bob: Hi! see https://example.com/agenda\n\
//!      [14/03/23, 09:20:00] Alice added Carol\n",
//! )?;
//!
//! assert_eq!(log.len(), 3);
//! assert_eq!(log.selection_options()[0], "Overall");
//!
//! let stats = fetch_stats(log.records(), &UserSelection::user("Bob"));
//! assert_eq!(stats.links, 1);
//!
//! let busy = most_busy_users(log.records(), 5);
//! assert_eq!(busy.top[0].sender, "Alice");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`]: raw text to [`ChatLog`]
//! - [`record`] - [`MessageRecord`], [`ChatLog`]
//! - [`parsing`] - timestamp grammar, calendar names, link extraction
//! - [`analytics`] - pure query functions and [`ChatReport`](analytics::ChatReport)
//! - [`config`] - [`ParserConfig`](config::ParserConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig), [`WordCloudConfig`](config::WordCloudConfig)
//! - [`output`] - CSV / JSON / JSONL record writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::ChatParser;
pub use record::{ChatLog, MessageRecord, NOTIFICATION_SENDER};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records and parsing
    pub use crate::parser::{ChatParser, parse};
    pub use crate::record::{ChatLog, MessageRecord, NOTIFICATION_SENDER};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig, WordCloudConfig};

    // Analytics
    pub use crate::analytics::{
        ChatReport, StopWords, UserSelection, activity_heatmap, activity_span, compare_users,
        create_wordcloud, daily_timeline, fetch_stats, link_analysis, media_analysis,
        message_length_analysis, month_activity_map, monthly_timeline, most_busy_users,
        most_common_words, popular_content_analysis, week_activity_map,
    };

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
