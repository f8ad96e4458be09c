//! Chart data export.
//!
//! Every chart of the analysis is exported as a plain data table that a
//! plotting tool (spreadsheet, notebook, gnuplot, Vega) can draw directly:
//!
//! | File | Rows |
//! |------|------|
//! | `message_count.csv` | most active senders |
//! | `media_count.csv` | top media senders |
//! | `hourly_activity.csv` | all 24 hours, zero-filled |
//! | `weekday_activity.csv` | Monday..Sunday, zero-filled |
//! | `activity_timeline.csv` | dates ascending |
//! | `avg_message_length.csv` | senders by average words per message |
//! | `emoji_usage.csv` | most used emojis |
//! | `wordcloud.csv` | word-cloud weights |
//!
//! - [`write_csv_charts`] - one semicolon-delimited file per non-empty table - requires `csv-output` feature
//! - [`write_json_charts`] / [`to_json`] - a single `metrics.json` - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::{ChartConfig, WordCloudConfig};
//! use chatstats::core::aggregate;
//! use chatstats::core::output::{ChartData, write_csv_charts};
//! use chatstats::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse(std::path::Path::new("chat.txt"))?;
//! let metrics = aggregate(&outcome.messages);
//!
//! let charts = ChartData::from_metrics(&metrics, &ChartConfig::default(), &WordCloudConfig::default());
//! let written = write_csv_charts(&charts, std::path::Path::new("output"))?;
//! println!("{} tables written", written.len());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv_charts, write_table};
#[cfg(feature = "json-output")]
pub use json_writer::{METRICS_FILE, to_json, write_json_charts};

use chrono::NaiveDate;
use serde::Serialize;

use super::metrics::{Metrics, WEEKDAYS, weekday_name};
use super::wordcloud::word_cloud_weights;
use crate::config::{ChartConfig, WordCloudConfig};

/// Row of a per-sender count table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SenderCount {
    pub sender: String,
    pub messages: u64,
}

/// Row of the hourly activity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourCount {
    pub hour: u32,
    pub messages: u64,
}

/// Row of the weekday activity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayCount {
    pub day: &'static str,
    pub messages: u64,
}

/// Row of the activity timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateCount {
    pub date: NaiveDate,
    pub messages: u64,
}

/// Row of the average message length table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SenderAverage {
    pub sender: String,
    pub average_words: f64,
}

/// Row of the emoji usage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmojiCount {
    pub emoji: char,
    pub count: u64,
}

/// Row of the word-cloud table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WordWeight {
    pub word: String,
    pub weight: u64,
}

/// Headline numbers, included in the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_messages: u64,
    pub members: usize,
    pub total_media: u64,
    pub total_words: u64,
    pub total_emojis: u64,
}

/// All chart tables of one analysis, ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub summary: Summary,
    pub message_count: Vec<SenderCount>,
    pub media_count: Vec<SenderCount>,
    pub hourly_activity: Vec<HourCount>,
    pub weekday_activity: Vec<DayCount>,
    pub activity_timeline: Vec<DateCount>,
    pub avg_message_length: Vec<SenderAverage>,
    pub emoji_usage: Vec<EmojiCount>,
    pub wordcloud: Vec<WordWeight>,
}

impl ChartData {
    /// Builds every chart table from `metrics`.
    pub fn from_metrics(
        metrics: &Metrics,
        charts: &ChartConfig,
        wordcloud: &WordCloudConfig,
    ) -> Self {
        Self {
            summary: Summary {
                total_messages: metrics.total_messages(),
                members: metrics.member_count(),
                total_media: metrics.total_media(),
                total_words: metrics.word_count().total(),
                total_emojis: metrics.emoji_count().total(),
            },
            message_count: sender_counts(metrics.message_count().top(charts.top_members)),
            media_count: sender_counts(metrics.media_count().top(charts.top_media_senders)),
            hourly_activity: (0..24)
                .map(|hour| HourCount {
                    hour,
                    messages: metrics.hourly_activity().get(&hour),
                })
                .collect(),
            weekday_activity: WEEKDAYS
                .iter()
                .map(|day| DayCount {
                    day: weekday_name(*day),
                    messages: metrics.weekday_activity().get(day),
                })
                .collect(),
            activity_timeline: timeline(metrics),
            avg_message_length: averages(metrics, charts.top_average_lengths),
            emoji_usage: metrics
                .emoji_count()
                .top(charts.top_emojis)
                .into_iter()
                .map(|(emoji, count)| EmojiCount {
                    emoji: *emoji,
                    count,
                })
                .collect(),
            wordcloud: word_cloud_weights(metrics, wordcloud)
                .into_iter()
                .map(|(word, weight)| WordWeight { word, weight })
                .collect(),
        }
    }
}

fn sender_counts(ranked: Vec<(&String, u64)>) -> Vec<SenderCount> {
    ranked
        .into_iter()
        .map(|(sender, messages)| SenderCount {
            sender: sender.clone(),
            messages,
        })
        .collect()
}

fn timeline(metrics: &Metrics) -> Vec<DateCount> {
    let mut rows: Vec<DateCount> = metrics
        .date_activity()
        .iter()
        .map(|(date, messages)| DateCount {
            date: *date,
            messages,
        })
        .collect();
    rows.sort_by_key(|row| row.date);
    rows
}

fn averages(metrics: &Metrics, limit: usize) -> Vec<SenderAverage> {
    let mut rows: Vec<SenderAverage> = metrics
        .average_message_lengths()
        .into_iter()
        .map(|(sender, average_words)| SenderAverage {
            sender: sender.to_string(),
            average_words,
        })
        .collect();
    // stable: equal averages stay in sender order
    rows.sort_by(|a, b| b.average_words.total_cmp(&a.average_words));
    rows.truncate(limit);
    rows
}
