//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level arguments and verbosity flags
//! - [`Command`] - the `report`, `export` and `users` subcommands
//! - [`ExportFormat`] - record export formats accepted by `export -f`

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::analytics::UserSelection;

/// Default output path of `export` when `-o` is not given (extension follows `-f`).
pub const DEFAULT_EXPORT_STEM: &str = "chat_records";

/// Parse WhatsApp chat exports and compute per-user activity analytics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens report chat.txt
    chatlens report chat.txt --user Alice --compare Bob -o alice.json
    chatlens report chat.txt --stopwords stop_hinglish.txt
    chatlens export chat.txt -f jsonl -o records.jsonl
    chatlens users chat.txt")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logs (parse totals, dropped records)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Args {
    /// Maximum log level selected by `-v` / `-q` (WARN by default).
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the analytics report for a selection as JSON
    Report {
        /// Path to the exported chat (.txt)
        input: PathBuf,

        /// Restrict the report to one sender ("Overall" for everyone)
        #[arg(short, long, value_name = "NAME", default_value = "Overall")]
        user: UserSelection,

        /// Add a side-by-side comparison with another sender
        #[arg(short, long, value_name = "NAME")]
        compare: Option<UserSelection>,

        /// Stop-word list; the bundled list is used when omitted
        #[arg(long, value_name = "PATH")]
        stopwords: Option<PathBuf>,

        /// Abort on the first malformed timestamp instead of dropping the record
        #[arg(long)]
        strict: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Write the parsed records as CSV, JSON or JSONL
    Export {
        /// Path to the exported chat (.txt)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Path to output file [default: chat_records.<format>]
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Abort on the first malformed timestamp instead of dropping the record
        #[arg(long)]
        strict: bool,
    },

    /// List the selection options: "Overall" followed by every sender
    Users {
        /// Path to the exported chat (.txt)
        input: PathBuf,
    },
}

/// Record export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<ExportFormat> for crate::format::OutputFormat {
    fn from(format: ExportFormat) -> crate::format::OutputFormat {
        match format {
            ExportFormat::Csv => crate::format::OutputFormat::Csv,
            ExportFormat::Json => crate::format::OutputFormat::Json,
            ExportFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Resolves the `export` destination, defaulting to `chat_records.<ext>`.
pub fn export_path(output: Option<PathBuf>, format: ExportFormat) -> PathBuf {
    output.unwrap_or_else(|| {
        let format: crate::format::OutputFormat = format.into();
        PathBuf::from(format!("{DEFAULT_EXPORT_STEM}.{}", format.extension()))
    })
}
