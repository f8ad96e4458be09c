//! The metrics bundle produced by the aggregator.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use super::frequency::FrequencyTable;

/// Weekdays in calendar order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday" .. "Sunday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Statistics gathered from one transcript.
///
/// Built once by [`aggregate`](super::aggregate) and read-only afterwards.
/// Every table keeps keys in the order they were first seen, which is the
/// tie-break order for all rankings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub(crate) message_count: FrequencyTable<String>,
    pub(crate) media_count: FrequencyTable<String>,
    pub(crate) hourly_activity: FrequencyTable<u32>,
    pub(crate) weekday_activity: FrequencyTable<Weekday>,
    pub(crate) date_activity: FrequencyTable<NaiveDate>,
    pub(crate) word_count: FrequencyTable<String>,
    pub(crate) emoji_count: FrequencyTable<char>,
    pub(crate) message_lengths: HashMap<String, Vec<usize>>,
    pub(crate) all_text: String,
}

impl Metrics {
    /// Messages per sender, media included.
    pub fn message_count(&self) -> &FrequencyTable<String> {
        &self.message_count
    }

    /// Media messages per sender.
    pub fn media_count(&self) -> &FrequencyTable<String> {
        &self.media_count
    }

    /// Messages per hour of day (0-23). Hours without messages are absent.
    pub fn hourly_activity(&self) -> &FrequencyTable<u32> {
        &self.hourly_activity
    }

    /// Messages per weekday.
    pub fn weekday_activity(&self) -> &FrequencyTable<Weekday> {
        &self.weekday_activity
    }

    /// Messages per calendar date.
    pub fn date_activity(&self) -> &FrequencyTable<NaiveDate> {
        &self.date_activity
    }

    /// Occurrences of each whitespace-delimited word in text messages.
    pub fn word_count(&self) -> &FrequencyTable<String> {
        &self.word_count
    }

    /// Occurrences of each single-character emoji in text messages.
    pub fn emoji_count(&self) -> &FrequencyTable<char> {
        &self.emoji_count
    }

    /// Word counts of a sender's text messages, in message order.
    pub fn message_lengths(&self, sender: &str) -> &[usize] {
        self.message_lengths
            .get(sender)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Bodies of all text messages joined with single spaces.
    pub fn all_text(&self) -> &str {
        &self.all_text
    }

    /// Mean words per text message for `sender`.
    ///
    /// `0.0` for senders with no text messages, `None` for unknown senders.
    pub fn average_message_length(&self, sender: &str) -> Option<f64> {
        if !self.message_count.contains_key(sender) {
            return None;
        }
        Some(mean(self.message_lengths(sender)))
    }

    /// Mean words per text message for every sender, in sender order.
    pub fn average_message_lengths(&self) -> Vec<(&str, f64)> {
        self.message_count
            .keys()
            .map(|sender| (sender.as_str(), mean(self.message_lengths(sender))))
            .collect()
    }

    /// Total number of messages.
    pub fn total_messages(&self) -> u64 {
        self.message_count.total()
    }

    /// Total number of media messages.
    pub fn total_media(&self) -> u64 {
        self.media_count.total()
    }

    /// Number of distinct senders.
    pub fn member_count(&self) -> usize {
        self.message_count.len()
    }

    /// Returns `true` if no messages were aggregated.
    pub fn is_empty(&self) -> bool {
        self.message_count.is_empty()
    }
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}
