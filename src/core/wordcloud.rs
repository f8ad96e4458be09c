//! Word-cloud input: weighted words from the accumulated message text.
//!
//! Rendering is left to the consumer; this module only produces the
//! `(word, weight)` list a renderer lays out.

use std::collections::HashSet;

use super::frequency::FrequencyTable;
use super::metrics::Metrics;
use crate::config::WordCloudConfig;

/// Common words left out of the cloud by default.
///
/// Includes the two words of the `<Media omitted>` placeholder and a few
/// frequent Hindi and Italian fillers.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "in", "a", "is", "that", "for", "on", "with", "as", "this", "by",
    "an", "are", "at", "be", "but", "or", "have", "it", "from", "you", "was", "not", "what", "all",
    "they", "when", "we", "there", "can", "no", "yes", "Media", "omitted", "hai", "he", "che",
    "ne", "ma",
];

/// Ranks the words of [`Metrics::all_text`] for a word cloud.
///
/// Words are whitespace-delimited and kept as written; stopwords are
/// matched case-insensitively. At most `config.max_words` entries are
/// returned, highest count first, ties in order of first appearance.
///
/// ```
/// use chatstats::config::WordCloudConfig;
/// use chatstats::core::{aggregate, word_cloud_weights};
/// use chatstats::parser::TranscriptParser;
///
/// let outcome = TranscriptParser::new()
///     .parse_str("01/02/23, 10:00 am - Alice: the pizza and the pizza oven");
/// let metrics = aggregate(&outcome.messages);
///
/// let weights = word_cloud_weights(&metrics, &WordCloudConfig::default());
/// assert_eq!(weights, vec![("pizza".to_string(), 2), ("oven".to_string(), 1)]);
/// ```
pub fn word_cloud_weights(metrics: &Metrics, config: &WordCloudConfig) -> Vec<(String, u64)> {
    let stopwords: HashSet<String> = config
        .stopwords
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let table: FrequencyTable<&str> = metrics
        .all_text()
        .split_whitespace()
        .filter(|word| !stopwords.contains(&word.to_lowercase()))
        .collect();

    table
        .top(config.max_words)
        .into_iter()
        .map(|(word, count)| ((*word).to_string(), count))
        .collect()
}
