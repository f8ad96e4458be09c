//! Grammar of the WhatsApp transcript dialect.
//!
//! Every message starts on a line shaped like
//!
//! ```text
//! 01/02/23, 10:00 am - Alice: hello world
//! 02/02/23, 1:00 pm - Carol (+1 555-0100): hi
//! ```
//!
//! i.e. `<day/month/yy>, <h:mm> <am|pm> - <sender>[ (annotation)]: <body>`.
//! Lines that don't start with a date belong to the previous message.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Body substrings marking an attachment placeholder (case-sensitive).
pub const MEDIA_MARKERS: &[&str] = &["<Media omitted>", "image omitted", "video omitted"];

/// Sender value of the encryption notice WhatsApp puts at the top of an export.
pub const SYSTEM_NOTICE: &str = "Messages and calls are end-to-end encrypted";

/// chrono format for the `<date>, <time> <meridiem>` header prefix.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p";

/// A new block starts at any line beginning with `digits/digits/digits`.
static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+/\d+").expect("boundary pattern is valid"));

// date, time, meridiem, sender (non-greedy, colon-free), optional " (annotation)", body
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\d+/\d+/\d+),\s(\d+:\d+)\s([aApP][mM])\s-\s([^:]+?)(?:\s\(.*?\))?:\s(.*)$")
        .expect("header pattern is valid")
});

/// The pieces of a block that matched the header grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader<'a> {
    /// `day/month/yy` as written
    pub date: &'a str,
    /// `h:mm` as written
    pub time: &'a str,
    /// `am` / `pm` in any case
    pub meridiem: &'a str,
    /// Sender, trimmed, annotation removed
    pub sender: &'a str,
    /// Everything after `": "`, newlines included
    pub body: &'a str,
}

impl BlockHeader<'_> {
    /// Parses the header timestamp. `None` if the date or time is out of range.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.date, self.time, self.meridiem)
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Splits transcript text into message blocks.
///
/// A block ends right before a newline that is followed by a date; that
/// newline belongs to neither block. Text before the first date line forms a
/// block of its own. Empty input has no blocks.
///
/// ```
/// use chatstats::parsing::transcript::split_blocks;
///
/// let text = "01/02/23, 10:00 am - Alice: line one\nline two\n01/02/23, 10:01 am - Bob: hi";
/// let blocks = split_blocks(text);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0], "01/02/23, 10:00 am - Alice: line one\nline two");
/// ```
pub fn split_blocks(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut start = 0;

    for (newline, _) in content.match_indices('\n') {
        let next = newline + 1;
        if BOUNDARY.is_match(&content[next..]) {
            blocks.push(&content[start..newline]);
            start = next;
        }
    }
    blocks.push(&content[start..]);

    blocks
}

/// Matches a block against the header grammar.
///
/// Returns `None` for blocks that aren't messages (continuation-only text,
/// system lines without `": "`, garbage).
pub fn parse_header(block: &str) -> Option<BlockHeader<'_>> {
    let caps = HEADER.captures(block)?;
    Some(BlockHeader {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        meridiem: caps.get(3)?.as_str(),
        sender: caps.get(4)?.as_str().trim(),
        body: caps.get(5).map_or("", |m| m.as_str()),
    })
}

/// Parses `day/month/yy` + `h:mm` + `am|pm` into a timestamp.
pub fn parse_timestamp(date: &str, time: &str, meridiem: &str) -> Option<NaiveDateTime> {
    let datetime = format!("{date}, {time} {}", meridiem.to_ascii_lowercase());
    NaiveDateTime::parse_from_str(&datetime, TIMESTAMP_FORMAT).ok()
}

/// Returns `true` if the body contains any of the [`MEDIA_MARKERS`].
pub fn is_media_body(body: &str) -> bool {
    MEDIA_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Returns `true` for the encryption-notice pseudo-sender.
///
/// This is an exact match on the trimmed sender, not a general system
/// message detector.
pub fn is_system_notice(sender: &str) -> bool {
    sender.trim() == SYSTEM_NOTICE
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_split_blocks_single_line_messages() {
        let text = "01/02/23, 10:00 am - Alice: hi\n01/02/23, 10:01 am - Bob: hey\n";
        let blocks = split_blocks(text);
        assert_eq!(
            blocks,
            vec!["01/02/23, 10:00 am - Alice: hi", "01/02/23, 10:01 am - Bob: hey\n"]
        );
    }

    #[test]
    fn test_split_blocks_keeps_continuation_lines() {
        let text = "01/02/23, 10:00 am - Alice: first\nsecond\n\nthird\n02/02/23, 9:00 am - Bob: x";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "01/02/23, 10:00 am - Alice: first\nsecond\n\nthird");
    }

    #[test]
    fn test_split_blocks_leading_garbage_is_own_block() {
        let blocks = split_blocks("header text\n01/02/23, 10:00 am - Alice: hi");
        assert_eq!(blocks, vec!["header text", "01/02/23, 10:00 am - Alice: hi"]);
    }

    #[test]
    fn test_split_blocks_empty() {
        assert!(split_blocks("").is_empty());
        assert_eq!(split_blocks("\n"), vec!["\n"]);
    }

    #[test]
    fn test_split_blocks_pasted_date_starts_new_block() {
        // A body line starting with d/d/d is taken as a message boundary.
        let text = "01/02/23, 10:00 am - Alice: see\n3/4/5 was the date";
        assert_eq!(split_blocks(text).len(), 2);
    }

    #[test]
    fn test_parse_header_basic() {
        let header = parse_header("01/02/23, 10:00 am - Alice: hello world").unwrap();
        assert_eq!(header.date, "01/02/23");
        assert_eq!(header.time, "10:00");
        assert_eq!(header.meridiem, "am");
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.body, "hello world");
    }

    #[test]
    fn test_parse_header_strips_annotation() {
        let header = parse_header("02/02/23, 1:00 pm - Carol (+1 555-0100): hi").unwrap();
        assert_eq!(header.sender, "Carol");
        assert_eq!(header.body, "hi");
    }

    #[test]
    fn test_parse_header_body_may_contain_colons_and_newlines() {
        let header = parse_header("01/02/23, 10:00 am - Alice: time: 10:30\nnote: ok").unwrap();
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.body, "time: 10:30\nnote: ok");
    }

    #[test]
    fn test_parse_header_uppercase_meridiem() {
        let header = parse_header("01/02/23, 10:00 PM - Alice: hi").unwrap();
        assert_eq!(header.meridiem, "PM");
        assert_eq!(header.timestamp().unwrap().hour(), 22);
    }

    #[test]
    fn test_parse_header_empty_body() {
        let header = parse_header("01/02/23, 10:00 am - Alice: ").unwrap();
        assert_eq!(header.body, "");
    }

    #[test]
    fn test_parse_header_rejects_non_messages() {
        assert!(parse_header("just some text").is_none());
        assert!(parse_header("01/02/23, 10:00 am - Alice joined using this group's invite link").is_none());
        assert!(parse_header("01/02/23, 10:00 - Alice: 24h clock").is_none());
        assert!(parse_header("[01/02/23, 10:00:00 AM] Alice: bracketed").is_none());
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("01/02/23", "10:05", "am").unwrap();
        assert_eq!((ts.day(), ts.month(), ts.year()), (1, 2, 2023));
        assert_eq!((ts.hour(), ts.minute()), (10, 5));

        let midnight = parse_timestamp("1/2/23", "12:00", "am").unwrap();
        assert_eq!(midnight.hour(), 0);
        let noon = parse_timestamp("1/2/23", "12:00", "PM").unwrap();
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("31/02/23", "10:00", "am").is_none());
        assert!(parse_timestamp("01/13/23", "10:00", "am").is_none());
        assert!(parse_timestamp("01/02/23", "13:00", "pm").is_none());
        assert!(parse_timestamp("01/02/23", "10:61", "am").is_none());
    }

    #[test]
    fn test_is_media_body() {
        assert!(is_media_body("<Media omitted>"));
        assert!(is_media_body("photo.jpg image omitted"));
        assert!(is_media_body("clip video omitted"));
        assert!(!is_media_body("Image omitted"));
        assert!(!is_media_body("hello"));
    }

    #[test]
    fn test_is_system_notice() {
        assert!(is_system_notice("Messages and calls are end-to-end encrypted"));
        assert!(is_system_notice("  Messages and calls are end-to-end encrypted "));
        assert!(!is_system_notice("Alice"));
        assert!(!is_system_notice("messages and calls are end-to-end encrypted"));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }
}
