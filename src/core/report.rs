//! Rankings and the plain-text reports.
//!
//! - [`StatisticsReport`] - the full `statistics_report.txt` document
//! - [`BasicSummary`] - per-sender message counts printed by `chatstats basic`

use std::fmt;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use tracing::debug;

use super::frequency::FrequencyTable;
use super::metrics::{Metrics, weekday_name};
use crate::config::ReportConfig;
use crate::error::Result;

/// The `n` most frequent entries of `table`; ties keep first-seen order.
pub fn top_n<K: Eq + Hash + Clone>(table: &FrequencyTable<K>, n: usize) -> Vec<(&K, u64)> {
    table.top(n)
}

/// `value` as a percentage of `total`; `0.0` when `total` is zero.
pub fn percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    value as f64 / total as f64 * 100.0
}

/// The full statistics report.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ReportConfig;
/// use chatstats::core::{StatisticsReport, aggregate};
/// use chatstats::parser::TranscriptParser;
///
/// let outcome = TranscriptParser::new().parse_str("01/02/23, 10:00 am - Alice: hello world");
/// let metrics = aggregate(&outcome.messages);
///
/// let text = StatisticsReport::render(&metrics, &ReportConfig::default());
/// assert!(text.starts_with("===== WhatsApp Chat Analysis Report ====="));
/// assert!(text.contains("1. Alice: 1 messages (100.0%)"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatisticsReport<'a> {
    metrics: &'a Metrics,
    config: &'a ReportConfig,
}

impl<'a> StatisticsReport<'a> {
    /// Wraps a metrics bundle for rendering.
    pub fn new(metrics: &'a Metrics, config: &'a ReportConfig) -> Self {
        Self { metrics, config }
    }

    /// Renders the report to a string.
    pub fn render(metrics: &Metrics, config: &ReportConfig) -> String {
        StatisticsReport::new(metrics, config).to_string()
    }

    /// Writes the report to `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file can't be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        debug!(path = %path.display(), "wrote statistics report");
        Ok(())
    }

    fn write_members(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;
        let total = m.total_messages();

        writeln!(f, "Total Messages: {total}")?;
        writeln!(f, "Total Group Members: {}", m.member_count())?;
        writeln!(f)?;

        writeln!(f, "Top {} Most Active Members:", self.config.top_members)?;
        for (i, (member, count)) in top_n(m.message_count(), self.config.top_members)
            .into_iter()
            .enumerate()
        {
            writeln!(
                f,
                "{}. {member}: {count} messages ({:.1}%)",
                i + 1,
                percentage(count, total)
            )?;
        }
        writeln!(f)
    }

    fn write_media(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;
        let total_media = m.total_media();

        writeln!(f, "Total Media Messages: {total_media}")?;
        if total_media > 0 {
            writeln!(
                f,
                "Media Messages Percentage: {:.1}%",
                percentage(total_media, m.total_messages())
            )?;
            writeln!(f)?;
            writeln!(f, "Top {} Media Senders:", self.config.top_media_senders)?;
            for (i, (member, count)) in top_n(m.media_count(), self.config.top_media_senders)
                .into_iter()
                .enumerate()
            {
                writeln!(
                    f,
                    "{}. {member}: {count} media messages ({:.1}%)",
                    i + 1,
                    percentage(count, total_media)
                )?;
            }
        }
        writeln!(f)
    }

    fn write_activity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;

        if let Some((hour, _)) = m.hourly_activity().most_common() {
            writeln!(f, "Most Active Hour: {hour}:00 - {}:00", hour + 1)?;
        }
        if let Some((day, _)) = m.weekday_activity().most_common() {
            writeln!(f, "Most Active Day: {}", weekday_name(*day))?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_lengths(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // media-only senders have no lengths and stay out of the averages
        let averages: Vec<(&str, f64)> = self
            .metrics
            .average_message_lengths()
            .into_iter()
            .filter(|(sender, _)| !self.metrics.message_lengths(sender).is_empty())
            .collect();
        if averages.is_empty() {
            return Ok(());
        }

        let overall = averages.iter().map(|(_, avg)| avg).sum::<f64>() / averages.len() as f64;
        // first sender wins ties
        let longest = averages
            .iter()
            .fold(None, |best: Option<&(&str, f64)>, entry| match best {
                Some(b) if b.1 >= entry.1 => best,
                _ => Some(entry),
            });

        writeln!(f, "Overall Average Message Length: {overall:.1} words")?;
        if let Some((member, avg)) = longest {
            writeln!(
                f,
                "Member with Longest Messages: {member} ({avg:.1} words on average)"
            )?;
        }
        writeln!(f)
    }

    fn write_words(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.metrics.word_count();
        if !words.is_empty() {
            writeln!(f, "Total Words: {}", words.total())?;
            writeln!(f)?;
            writeln!(f, "Top {} Most Used Words:", self.config.top_words)?;

            let min_chars = self.config.min_word_chars;
            let ranked = words
                .ranked()
                .into_iter()
                .filter(|(word, _)| word.chars().count() >= min_chars)
                .take(self.config.top_words);
            for (i, (word, count)) in ranked.enumerate() {
                writeln!(f, "{}. {word}: {count} times", i + 1)?;
            }
        }
        writeln!(f)
    }

    fn write_emojis(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emojis = self.metrics.emoji_count();
        if emojis.is_empty() {
            return Ok(());
        }

        writeln!(f, "Total Emojis: {}", emojis.total())?;
        writeln!(f)?;
        writeln!(f, "Top {} Most Used Emojis:", self.config.top_emojis)?;
        for (i, (emoji, count)) in top_n(emojis, self.config.top_emojis)
            .into_iter()
            .enumerate()
        {
            writeln!(f, "{}. {emoji}: {count} times", i + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for StatisticsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== WhatsApp Chat Analysis Report =====")?;
        writeln!(f)?;
        self.write_members(f)?;
        self.write_media(f)?;
        self.write_activity(f)?;
        self.write_lengths(f)?;
        self.write_words(f)?;
        self.write_emojis(f)
    }
}

/// Message counts of every sender, most active first.
///
/// ```text
/// Message Count by Sender:
/// ------------------------
/// Alice: 2 messages (66.7%)
/// Bob: 1 messages (33.3%)
///
/// Total messages: 3
///
/// Most active member: Alice with 2 messages
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BasicSummary<'a> {
    metrics: &'a Metrics,
}

impl<'a> BasicSummary<'a> {
    /// Wraps a metrics bundle for rendering.
    pub fn new(metrics: &'a Metrics) -> Self {
        Self { metrics }
    }
}

impl fmt::Display for BasicSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.metrics.message_count();
        let total = counts.total();

        writeln!(f, "Message Count by Sender:")?;
        writeln!(f, "------------------------")?;
        for (sender, count) in counts.ranked() {
            writeln!(
                f,
                "{sender}: {count} messages ({:.1}%)",
                percentage(count, total)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Total messages: {total}")?;

        if let Some((sender, count)) = counts.most_common() {
            writeln!(f)?;
            writeln!(f, "Most active member: {sender} with {count} messages")?;
        }
        Ok(())
    }
}

/// Renders the [`BasicSummary`] of `metrics`.
pub fn basic_summary(metrics: &Metrics) -> String {
    BasicSummary::new(metrics).to_string()
}
