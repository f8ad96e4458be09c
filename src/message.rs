//! Message record produced by the transcript parser.
//!
//! A [`Message`] is one successfully parsed block of a chat export:
//! a timestamp, a sender, the (possibly multi-line) body and a flag telling
//! whether the body is an attachment placeholder instead of real text.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new(ts, "Alice", "hello world");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.word_count(), 2);
//! assert!(!msg.is_media());
//!
//! let media = Message::new(ts, "Bob", "<Media omitted>");
//! assert!(media.is_media());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::transcript::is_media_body;

/// A single chat message parsed from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (no timezone) |
/// | `sender` | `String` | Trimmed display name, annotation stripped |
/// | `body` | `String` | Message text, continuation lines included |
/// | `is_media` | `bool` | Body is a media placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name of the author.
    pub sender: String,

    /// Text of the message.
    ///
    /// May contain newlines and colons; kept verbatim.
    pub body: String,

    /// `true` when the body contains one of the
    /// [`MEDIA_MARKERS`](crate::parsing::transcript::MEDIA_MARKERS).
    pub is_media: bool,
}

impl Message {
    /// Creates a message, classifying the body as media or text.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        Self {
            timestamp,
            sender: sender.into(),
            is_media: is_media_body(&body),
            body,
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns `true` if the body is an attachment placeholder.
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Number of whitespace-delimited words in the body.
    ///
    /// Empty and whitespace-only bodies have zero words.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Renders the message back into transcript form.
    ///
    /// The output is accepted by the parser and reproduces `sender` and
    /// `timestamp` exactly; the original spacing and zero-padding are not
    /// preserved.
    ///
    /// ```
    /// use chatstats::Message;
    /// use chatstats::parser::TranscriptParser;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 2, 2)
    ///     .unwrap()
    ///     .and_hms_opt(13, 5, 0)
    ///     .unwrap();
    /// let msg = Message::new(ts, "Carol", "hi");
    /// assert_eq!(msg.to_transcript_line(), "02/02/23, 1:05 pm - Carol: hi");
    ///
    /// let outcome = TranscriptParser::new().parse_str(&msg.to_transcript_line());
    /// assert_eq!(outcome.messages, vec![msg]);
    /// ```
    pub fn to_transcript_line(&self) -> String {
        format!(
            "{} - {}: {}",
            self.timestamp.format("%d/%m/%y, %-I:%M %P"),
            self.sender,
            self.body
        )
    }
}
