//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use chatlens::analytics::{ChatReport, StopWords, UserSelection};
use chatlens::cli::{Args, Command, ExportFormat, export_path};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::{ChatLog, ChatParser, ChatlensError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; stdout carries command output. `RUST_LOG` overrides `-v`/`-q`.
fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), ChatlensError> {
    match args.command {
        Command::Report {
            input,
            user,
            compare,
            stopwords,
            strict,
            output,
        } => report(
            &input,
            &user,
            compare.as_ref(),
            stopwords.as_deref(),
            strict,
            output.as_deref(),
        ),
        Command::Export {
            input,
            format,
            output,
            strict,
        } => export(&input, format, export_path(output, format).as_path(), strict),
        Command::Users { input } => users(&input),
    }
}

fn load_log(input: &Path, strict: bool) -> Result<ChatLog, ChatlensError> {
    let parser = ChatParser::with_config(ParserConfig::new().with_strict(strict));
    let log = parser.parse_file(input)?;

    if log.dropped() > 0 {
        warn!(
            dropped = log.dropped(),
            "some records had malformed timestamps and were skipped"
        );
    }
    if log.is_empty() {
        warn!(input = %input.display(), "no messages found");
    }
    Ok(log)
}

/// Word analyses are skipped, not fatal, when the list cannot be read.
fn load_stop_words(path: Option<&Path>) -> Option<StopWords> {
    let Some(path) = path else {
        return Some(StopWords::bundled());
    };

    match StopWords::load(path) {
        Ok(stop_words) => Some(stop_words),
        Err(e) => {
            warn!(error = %e, "word analyses disabled");
            None
        }
    }
}

fn report(
    input: &Path,
    user: &UserSelection,
    compare: Option<&UserSelection>,
    stopwords: Option<&Path>,
    strict: bool,
    output: Option<&Path>,
) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let log = load_log(input, strict)?;
    let stop_words = load_stop_words(stopwords);

    let mut report = ChatReport::build(&log, user, stop_words.as_ref(), &AnalysisConfig::default());
    if let Some(other) = compare {
        report = report.with_comparison(&log, other);
    }

    let json = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    info!(
        records = log.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "report complete"
    );
    Ok(())
}

fn export(
    input: &Path,
    format: ExportFormat,
    output: &Path,
    strict: bool,
) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let log = load_log(input, strict)?;
    let format: OutputFormat = format.into();

    write_to_format(log.records(), output, format)?;

    println!(
        "Exported {} records as {} to {} ({:.2}s)",
        log.len(),
        format,
        output.display(),
        start.elapsed().as_secs_f64()
    );
    if log.dropped() > 0 {
        println!("Skipped {} records with malformed timestamps", log.dropped());
    }
    Ok(())
}

fn users(input: &Path) -> Result<(), ChatlensError> {
    let log = load_log(input, false)?;
    for option in log.selection_options() {
        println!("{option}");
    }
    Ok(())
}
