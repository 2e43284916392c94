//! Shared parsing utilities.
//!
//! This module contains the fixed grammars the parser and the analytics
//! engine both rely on:
//!
//! - [`timestamp`] - the bracketed `[DD/MM/YY, HH:MM:SS] ` boundary token and
//!   the calendar fields derived from it
//! - [`links`] - URL extraction and host lookup

pub mod links;
pub mod timestamp;

// Re-export commonly used items
pub use links::{NO_DOMAIN, domain_of, extract_links};
pub use timestamp::{
    MONTHS, WEEKDAYS, month_name, parse_timestamp, period_bucket, weekday_name,
};
