//! Transcript parser: raw export → ordered message records.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let text = "01/02/23, 10:00 am - Alice: hello world\n\
//!             01/02/23, 10:05 am - Bob: <Media omitted>\n";
//!
//! let outcome = TranscriptParser::new().parse_str(text);
//! assert_eq!(outcome.messages.len(), 2);
//! assert_eq!(outcome.skipped, 0);
//! assert!(outcome.messages[1].is_media);
//! ```
//!
//! # Leniency
//!
//! Blocks that don't match the header grammar, or whose timestamp is out of
//! range, are dropped without an error. Their number is reported in
//! [`ParseOutcome::skipped`] so callers and tests can observe it.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatstatsError, Result};
use crate::parsing::encoding::{Encoding, decode_with_fallback};
use crate::parsing::transcript::{is_system_notice, normalize_newlines, parse_header, split_blocks};

/// Result of parsing one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Parsed records, in transcript order.
    pub messages: Vec<Message>,

    /// Blocks dropped because the header or timestamp didn't parse.
    pub skipped: usize,

    /// Well-formed records dropped because they came from the encryption
    /// notice pseudo-sender.
    pub system_notices: usize,

    /// Encoding the input was decoded with (`None` for [`TranscriptParser::parse_str`]).
    pub encoding: Option<Encoding>,
}

impl ParseOutcome {
    /// Returns `true` if no records were produced.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of blocks seen (parsed, skipped and filtered).
    pub fn total_blocks(&self) -> usize {
        self.messages.len() + self.skipped + self.system_notices
    }
}

/// Parser for `DD/MM/YY, h:mm am - Sender: Message` chat exports.
///
/// The parser holds no state between calls; one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a chat export file.
    ///
    /// # Errors
    ///
    /// - [`ChatstatsError::FileNotReadable`] if the file can't be read
    /// - [`ChatstatsError::Encoding`] if no candidate encoding fits
    pub fn parse(&self, path: &Path) -> Result<ParseOutcome> {
        let bytes =
            fs::read(path).map_err(|source| ChatstatsError::file_not_readable(path, source))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
        self.parse_bytes(&bytes)
    }

    /// Decodes and parses raw export bytes.
    ///
    /// # Errors
    ///
    /// [`ChatstatsError::Encoding`] if no candidate encoding fits.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseOutcome> {
        let (text, encoding) = decode_with_fallback(bytes, &self.config.encodings)?;
        let mut outcome = self.parse_str(&text);
        outcome.encoding = Some(encoding);
        Ok(outcome)
    }

    /// Parses already-decoded transcript text. Never fails.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let content = normalize_newlines(content);
        let mut outcome = ParseOutcome::default();

        for block in split_blocks(&content) {
            let Some(header) = parse_header(block) else {
                outcome.skipped += 1;
                continue;
            };

            let Some(timestamp) = header.timestamp() else {
                debug!(date = header.date, time = header.time, "unparseable timestamp, block skipped");
                outcome.skipped += 1;
                continue;
            };

            if self.config.skip_system_notice && is_system_notice(header.sender) {
                outcome.system_notices += 1;
                continue;
            }

            outcome
                .messages
                .push(Message::new(timestamp, header.sender, header.body));
        }

        info!(
            messages = outcome.messages.len(),
            skipped = outcome.skipped,
            system_notices = outcome.system_notices,
            "parsed transcript"
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const SAMPLE: &str = "01/02/23, 10:00 am - Alice: hello world\n\
                          01/02/23, 10:05 am - Bob: <Media omitted>\n";

    #[test]
    fn test_parse_str_basic() {
        let outcome = TranscriptParser::new().parse_str(SAMPLE);
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.encoding.is_none());

        let alice = &outcome.messages[0];
        assert_eq!(alice.sender, "Alice");
        assert_eq!(alice.body, "hello world");
        assert!(!alice.is_media);
        assert_eq!(
            alice.timestamp,
            NaiveDate::from_ymd_opt(2023, 2, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );

        assert!(outcome.messages[1].is_media);
    }

    #[test]
    fn test_multiline_body() {
        let text = "01/02/23, 10:00 am - Alice: first line\nsecond line\nthird\n\
                    01/02/23, 10:01 am - Bob: ok";
        let outcome = TranscriptParser::new().parse_str(text);
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0].body, "first line\nsecond line\nthird");
        assert_eq!(outcome.messages[0].word_count(), 5);
    }

    #[test]
    fn test_system_notice_filtered() {
        let text = "01/02/23, 9:00 am - Messages and calls are end-to-end encrypted: tap to learn more\n\
                    01/02/23, 10:00 am - Alice: hi";
        let outcome = TranscriptParser::new().parse_str(text);
        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.system_notices, 1);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.total_blocks(), 2);
    }

    #[test]
    fn test_system_notice_kept_when_disabled() {
        let text = "01/02/23, 9:00 am - Messages and calls are end-to-end encrypted: tap";
        let parser = TranscriptParser::with_config(ParserConfig::new().with_skip_system_notice(false));
        let outcome = parser.parse_str(text);
        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.system_notices, 0);
    }

    #[test]
    fn test_malformed_blocks_counted() {
        let text = "Chat export\n\
                    01/02/23, 10:00 am - Alice joined using this group's invite link\n\
                    31/02/23, 10:00 am - Bob: impossible date\n\
                    01/02/23, 10:00 am - Carol: fine";
        let outcome = TranscriptParser::new().parse_str(text);
        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.messages[0].sender, "Carol");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "01/02/23, 10:00 am - Alice: one\r\ntwo\r\n01/02/23, 10:01 pm - Bob: three\r\n";
        let outcome = TranscriptParser::new().parse_str(text);
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0].body, "one\ntwo");
        assert_eq!(outcome.messages[1].timestamp.hour(), 22);
    }

    #[test]
    fn test_empty_input() {
        let outcome = TranscriptParser::new().parse_str("");
        assert!(outcome.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_parse_bytes_utf16() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in SAMPLE.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let outcome = TranscriptParser::new().parse_bytes(&bytes).unwrap();
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.encoding, Some(Encoding::Utf16));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_file_not_readable());
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_parse_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let outcome = TranscriptParser::new().parse(&path).unwrap();
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.encoding, Some(Encoding::Utf8));
    }
}
