//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into activity, word and
//! emoji statistics.
//!
//! ## Overview
//!
//! Chatstats reads the plain-text transcript WhatsApp produces with
//! *Export chat* (`DD/MM/YY, h:mm am - Sender: Message`) and computes:
//! - messages and media messages per sender
//! - activity by hour, weekday and date
//! - word and emoji frequencies, average message length per sender
//! - a plain-text statistics report and chart-ready data tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let outcome = TranscriptParser::new().parse(Path::new("WhatsApp Chat.txt"))?;
//!     let metrics = aggregate(&outcome.messages);
//!
//!     if metrics.is_empty() {
//!         println!("No messages found or incorrect file format.");
//!         return Ok(());
//!     }
//!
//!     println!("{}", StatisticsReport::render(&metrics, &ReportConfig::default()));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`ParseOutcome`](parser::ParseOutcome)
//! - [`parsing`] - encoding fallback and the transcript grammar
//! - [`message`] - the [`Message`] record
//! - [`core`] - aggregation, reports, word-cloud input and chart output
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`ReportConfig`](config::ReportConfig),
//!   [`ChartConfig`](config::ChartConfig), [`WordCloudConfig`](config::WordCloudConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) for chart data
//! - [`cli`] - CLI types (requires the `cli` feature)
//! - [`error`] - Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::parser::{ParseOutcome, TranscriptParser};
    pub use crate::parsing::Encoding;

    // Configuration
    pub use crate::config::{ChartConfig, ParserConfig, ReportConfig, WordCloudConfig};

    // Aggregation and reports
    pub use crate::core::{
        BasicSummary, FrequencyTable, Metrics, StatisticsReport, aggregate, basic_summary,
        word_cloud_weights,
    };

    // Chart output
    pub use crate::core::output::ChartData;
    pub use crate::format::{OutputFormat, write_charts};
}
