//! Configuration types for parsing, reporting and chart output.
//!
//! These are plain builder structs for library usage, without any CLI
//! framework dependencies. The defaults give the stock report layout.
//!
//! - [`ParserConfig`] - transcript decoding and filtering
//! - [`ReportConfig`] - top-N limits of the statistics report
//! - [`ChartConfig`] - how many entries each chart table keeps
//! - [`WordCloudConfig`] - word-cloud input size and stopwords
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParserConfig, ReportConfig};
//! use chatstats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new().with_skip_system_notice(false),
//! );
//!
//! let report = ReportConfig::new().with_top_members(10);
//! assert_eq!(report.top_members, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::wordcloud::STOPWORDS;
use crate::parsing::encoding::Encoding;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
/// use chatstats::parsing::Encoding;
///
/// let config = ParserConfig::new().with_encodings(vec![Encoding::Utf16]);
/// assert_eq!(config.encodings, vec![Encoding::Utf16]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop records sent by the encryption-notice pseudo-sender (default: true)
    pub skip_system_notice: bool,

    /// Encodings tried in order when decoding raw bytes (default: UTF-8, UTF-16)
    pub encodings: Vec<Encoding>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_notice: true,
            encodings: Encoding::default_candidates(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to drop the encryption notice.
    #[must_use]
    pub fn with_skip_system_notice(mut self, skip: bool) -> Self {
        self.skip_system_notice = skip;
        self
    }

    /// Sets the candidate encodings.
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<Encoding>) -> Self {
        self.encodings = encodings;
        self
    }
}

/// Limits used by the statistics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Members listed under "Most Active Members" (default: 5)
    pub top_members: usize,

    /// Members listed under "Media Senders" (default: 3)
    pub top_media_senders: usize,

    /// Words listed under "Most Used Words" (default: 10)
    pub top_words: usize,

    /// Words shorter than this many characters are left out of the word
    /// ranking (default: 3)
    pub min_word_chars: usize,

    /// Emojis listed under "Most Used Emojis" (default: 5)
    pub top_emojis: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_members: 5,
            top_media_senders: 3,
            top_words: 10,
            min_word_chars: 3,
            top_emojis: 5,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many members are ranked.
    #[must_use]
    pub fn with_top_members(mut self, n: usize) -> Self {
        self.top_members = n;
        self
    }

    /// Sets how many media senders are ranked.
    #[must_use]
    pub fn with_top_media_senders(mut self, n: usize) -> Self {
        self.top_media_senders = n;
        self
    }

    /// Sets how many words are ranked.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the minimum word length (in characters) for the word ranking.
    #[must_use]
    pub fn with_min_word_chars(mut self, n: usize) -> Self {
        self.min_word_chars = n;
        self
    }

    /// Sets how many emojis are ranked.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }
}

/// How many entries each chart table keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Senders in the message-count chart (default: 15)
    pub top_members: usize,

    /// Senders in the media-count chart (default: 10)
    pub top_media_senders: usize,

    /// Senders in the average-length chart (default: 15)
    pub top_average_lengths: usize,

    /// Emojis in the emoji chart (default: 15)
    pub top_emojis: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_members: 15,
            top_media_senders: 10,
            top_average_lengths: 15,
            top_emojis: 15,
        }
    }
}

impl ChartConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits used by the quick message-count chart of `chatstats basic`.
    pub fn basic() -> Self {
        Self {
            top_members: 10,
            ..Self::default()
        }
    }

    /// Sets how many senders the message-count chart keeps.
    #[must_use]
    pub fn with_top_members(mut self, n: usize) -> Self {
        self.top_members = n;
        self
    }

    /// Sets how many emojis the emoji chart keeps.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }
}

/// Word-cloud input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Maximum number of weighted words (default: 100)
    pub max_words: usize,

    /// Words left out, compared case-insensitively (default: [`STOPWORDS`])
    pub stopwords: Vec<String>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            max_words: 100,
            stopwords: STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl WordCloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of words.
    #[must_use]
    pub fn with_max_words(mut self, n: usize) -> Self {
        self.max_words = n;
        self
    }

    /// Adds extra stopwords on top of the current list.
    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}
