//! Output format types for chart data.
//!
//! These types don't depend on CLI frameworks and work the same from library
//! code.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::config::{ChartConfig, WordCloudConfig};
//! use chatstats::core::{aggregate, output::ChartData};
//! use chatstats::format::{OutputFormat, write_charts};
//! use chatstats::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse(std::path::Path::new("chat.txt"))?;
//! let metrics = aggregate(&outcome.messages);
//! let charts = ChartData::from_metrics(&metrics, &ChartConfig::default(), &WordCloudConfig::default());
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! write_charts(&charts, std::path::Path::new("output"), format)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::output::ChartData;
use crate::error::ChatstatsError;

/// Output format for chart data.
///
/// - [`Csv`](OutputFormat::Csv) - one semicolon-delimited table per chart
/// - [`Json`](OutputFormat::Json) - every table in a single `metrics.json`
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("JSON").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "JSON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Semicolon-delimited CSV, one file per chart (default)
    #[default]
    Csv,

    /// A single pretty-printed JSON document
    Json,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Name of the cargo feature that provides this format.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes chart data into `dir` in the specified format.
///
/// Returns the paths of the files written.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - A file cannot be written
#[allow(unused_variables)]
pub fn write_charts(
    charts: &ChartData,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv_charts(charts, dir),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json_charts(charts, dir).map(|p| vec![p]),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::invalid_format(
            "output",
            format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                format.feature()
            ),
        )),
    }
}
