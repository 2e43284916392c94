//! Timestamp grammar and calendar helpers.
//!
//! Every message in a supported export starts with a token of the form
//! `[DD/MM/YY, HH:MM:SS] ` (24-hour clock, two-digit year). A token opens a
//! message at the start of the input, at the start of a line, or directly
//! after another such token. Byte-order marks and left-to-right marks in
//! front of the `[` belong to the token. Tokens quoted mid-line are text.
//!
//! Weekday and month names are always English so that grouping does not
//! depend on the user's locale.

use std::sync::LazyLock;

use chrono::{Month, NaiveDateTime, Weekday};
use regex::Regex;

use crate::error::ChatlensError;

/// chrono format for the captured token (the text between the brackets).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %H:%M:%S";

/// Timestamp token with any leading BOM/LRM marks. Group 1 captures the
/// text inside the brackets.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{FEFF}\x{200E}]*\[(\d{2}/\d{2}/\d{2}, \d{2}:\d{2}:\d{2})\] ")
        .expect("timestamp token pattern is valid")
});

/// A message boundary found in export text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Boundary<'a> {
    /// Byte offset of the token, including leading marks.
    pub start: usize,
    /// Byte offset where the message text begins.
    pub end: usize,
    /// Text between the brackets.
    pub token: &'a str,
}

/// Finds every message boundary in `content`, in order.
pub(crate) fn find_boundaries(content: &str) -> Vec<Boundary<'_>> {
    let mut boundaries: Vec<Boundary<'_>> = Vec::new();

    for caps in TOKEN.captures_iter(content) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let start = whole.start();
        let opens_line = start == 0 || content[..start].ends_with('\n');
        let chained = boundaries.last().is_some_and(|prev| prev.end == start);

        if opens_line || chained {
            boundaries.push(Boundary {
                start,
                end: whole.end(),
                token: token.as_str(),
            });
        }
    }
    boundaries
}

/// Canonical weekday ordering, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar month ordering.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses a captured token such as `01/01/23, 10:00:00`.
///
/// Two-digit years follow chrono's `%y` pivot: `00..=68` map to 20xx and
/// `69..=99` to 19xx.
///
/// # Errors
///
/// Returns [`ChatlensError::MalformedTimestamp`] when the token matches the
/// boundary shape but is not a real calendar date or clock time
/// (e.g. `31/02/23` or `25:00:00`).
pub fn parse_timestamp(token: &str) -> Result<NaiveDateTime, ChatlensError> {
    NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .map_err(|e| ChatlensError::malformed_timestamp(token, e))
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize]
}

/// English name of a month, 1-based. Out-of-range numbers yield `""`.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Hour-range label used by the activity heatmap.
///
/// `23` maps to `"23-00"`, `0` maps to `"00-1"`, every other hour `h` maps to
/// `"h-h+1"` without zero padding.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::period_bucket;
///
/// assert_eq!(period_bucket(14), "14-15");
/// assert_eq!(period_bucket(23), "23-00");
/// assert_eq!(period_bucket(0), "00-1");
/// ```
pub fn period_bucket(hour: u32) -> String {
    match hour {
        0 => "00-1".to_string(),
        23 => "23-00".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_valid() {
        let ts = parse_timestamp("15/01/24, 10:30:45").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
        assert_eq!(ts.second(), 45);
    }

    #[test]
    fn test_parse_timestamp_impossible_date() {
        let err = parse_timestamp("31/02/23, 10:00:00").unwrap_err();
        assert!(err.is_malformed_timestamp());
    }

    #[test]
    fn test_parse_timestamp_bad_clock() {
        assert!(parse_timestamp("01/01/23, 25:00:00").is_err());
        assert!(parse_timestamp("01/01/23, 10:61:00").is_err());
    }

    fn tokens(content: &str) -> Vec<&str> {
        find_boundaries(content).iter().map(|b| b.token).collect()
    }

    #[test]
    fn test_boundary_is_line_leading() {
        let text = "[01/01/23, 10:00:00] A: x\nquoted [01/01/23, 11:00:00] inline";
        assert_eq!(tokens(text), vec!["01/01/23, 10:00:00"]);
    }

    #[test]
    fn test_boundary_requires_trailing_space() {
        assert!(find_boundaries("[01/01/23, 10:00:00]Alice: hi").is_empty());
        assert_eq!(find_boundaries("[01/01/23, 10:00:00] Alice: hi").len(), 1);
    }

    #[test]
    fn test_chained_tokens_on_one_line() {
        let text = "[01/01/23, 09:00:00] [01/01/23, 09:00:01] Bob: hi";
        assert_eq!(
            tokens(text),
            vec!["01/01/23, 09:00:00", "01/01/23, 09:00:01"]
        );
    }

    #[test]
    fn test_quoted_tokens_mid_line_never_chain() {
        let text = "[01/01/23, 09:00:00] A: see [02/01/23, 10:00:00] [03/01/23, 10:00:00] x";
        assert_eq!(tokens(text).len(), 1);
    }

    #[test]
    fn test_leading_marks_belong_to_token() {
        let text = "\u{feff}[01/01/23, 10:00:00] A: hi\n\u{200e}[01/01/23, 10:00:05] A: img";
        let found = find_boundaries(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start, 0);
        assert_eq!(&text[found[1].start..found[1].start + 3], "\u{200e}");
    }

    #[test]
    fn test_period_bucket_edges() {
        assert_eq!(period_bucket(0), "00-1");
        assert_eq!(period_bucket(1), "1-2");
        assert_eq!(period_bucket(9), "9-10");
        assert_eq!(period_bucket(22), "22-23");
        assert_eq!(period_bucket(23), "23-00");
    }

    #[test]
    fn test_weekday_and_month_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(257), "");
    }
}
