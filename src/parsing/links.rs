//! URL extraction.
//!
//! A link is `http://` or `https://` followed by one or more characters from
//! ASCII letters, digits, the range `$`..=`_`, the set `@.&+!*\(),`, or a
//! `%XX` percent-escape. Whitespace and most non-ASCII text end a link.
//!
//! The parser stores the result in
//! [`MessageRecord::extracted_links`](crate::MessageRecord::extracted_links);
//! [`fetch_stats`](crate::analytics::fetch_stats) re-runs the same extractor at
//! query time.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Domain reported for links without a parseable host.
pub const NO_DOMAIN: &str = "N/A";

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("link pattern is valid")
});

/// Returns every link in `text`, in order of appearance.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::extract_links;
///
/// let links = extract_links("check https://example.com/page now");
/// assert_eq!(links, vec!["https://example.com/page"]);
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    LINK.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Host component of a link, or [`NO_DOMAIN`] when it has none.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::domain_of;
///
/// assert_eq!(domain_of("https://example.com/page"), "example.com");
/// assert_eq!(domain_of("https://"), "N/A");
/// ```
pub fn domain_of(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| NO_DOMAIN.to_string())
}
