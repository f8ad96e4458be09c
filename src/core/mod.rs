//! Core analysis logic for chatstats.
//!
//! This module contains:
//! - [`frequency`] - Insertion-ordered counters
//! - [`metrics`] - The metrics bundle
//! - [`aggregator`] - Messages → metrics in one pass
//! - [`report`] - Rankings and the text reports
//! - [`wordcloud`] - Word-cloud input
//! - [`output`] - Chart data writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::config::ReportConfig;
//! use chatstats::core::{StatisticsReport, aggregate, basic_summary};
//! use chatstats::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse_str("01/02/23, 10:00 am - Alice: hi there");
//! let metrics = aggregate(&outcome.messages);
//!
//! println!("{}", basic_summary(&metrics));
//! println!("{}", StatisticsReport::render(&metrics, &ReportConfig::default()));
//! ```

pub mod aggregator;
pub mod frequency;
pub mod metrics;
pub mod output;
pub mod report;
pub mod wordcloud;

// Re-export main types for convenience
pub use aggregator::{aggregate, is_emoji};
pub use frequency::FrequencyTable;
pub use metrics::{Metrics, WEEKDAYS, weekday_name};
pub use report::{BasicSummary, StatisticsReport, basic_summary, percentage, top_n};
pub use wordcloud::{STOPWORDS, word_cloud_weights};

// Re-export Message from the crate root
pub use crate::Message;

pub use output::ChartData;
#[cfg(feature = "csv-output")]
pub use output::write_csv_charts;
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json_charts};
