//! Single-pass aggregation of parsed messages into [`Metrics`].
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::aggregate;
//! use chatstats::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse_str(
//!     "01/02/23, 10:00 am - Alice: hello world\n\
//!      01/02/23, 10:05 am - Bob: <Media omitted>\n",
//! );
//! let metrics = aggregate(&outcome.messages);
//!
//! assert_eq!(metrics.message_count().get("Alice"), 1);
//! assert_eq!(metrics.media_count().get("Bob"), 1);
//! assert_eq!(metrics.word_count().get("hello"), 1);
//! assert_eq!(metrics.average_message_length("Bob"), Some(0.0));
//! ```

use chrono::{Datelike, Timelike};
use tracing::info;

use super::metrics::Metrics;
use crate::Message;

/// Emoji component code points the emoji table has no standalone entry for:
/// the skin tone modifiers and the hair components.
pub const EMOJI_COMPONENTS: [std::ops::RangeInclusive<char>; 2] =
    ['\u{1F3FB}'..='\u{1F3FF}', '\u{1F9B0}'..='\u{1F9B3}'];

/// Returns `true` if `ch` alone is a complete emoji or an emoji component.
///
/// Multi-code-point sequences (flags, ZWJ families, keycaps) are not
/// recognized as a whole; their parts are checked one by one.
pub fn is_emoji(ch: char) -> bool {
    if EMOJI_COMPONENTS.iter().any(|range| range.contains(&ch)) {
        return true;
    }
    let mut buf = [0u8; 4];
    emojis::get(ch.encode_utf8(&mut buf)).is_some()
}

/// Builds the metrics bundle for `messages` in one pass.
///
/// Zero messages produce an empty bundle.
pub fn aggregate(messages: &[Message]) -> Metrics {
    let mut metrics = Metrics::default();
    let mut texts: Vec<&str> = Vec::new();

    for msg in messages {
        let sender = msg.sender();
        let ts = msg.timestamp();

        metrics.message_count.increment(sender.to_string());
        metrics.hourly_activity.increment(ts.hour());
        metrics.weekday_activity.increment(ts.weekday());
        metrics.date_activity.increment(ts.date());

        if msg.is_media() {
            metrics.media_count.increment(sender.to_string());
            continue;
        }

        let words: Vec<&str> = msg.body().split_whitespace().collect();
        metrics
            .word_count
            .extend(words.iter().map(|w| (*w).to_string()));
        metrics
            .message_lengths
            .entry(sender.to_string())
            .or_default()
            .push(words.len());
        metrics
            .emoji_count
            .extend(msg.body().chars().filter(|c| is_emoji(*c)));
        texts.push(msg.body());
    }

    metrics.all_text = texts.join(" ");

    info!(
        messages = metrics.total_messages(),
        members = metrics.member_count(),
        media = metrics.total_media(),
        "aggregated metrics"
    );

    metrics
}

impl Metrics {
    /// Same as [`aggregate`].
    pub fn from_messages(messages: &[Message]) -> Self {
        aggregate(messages)
    }
}
