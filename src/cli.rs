//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Command`] - The `basic`, `deep`, `list-samples` and `version` subcommands
//! - [`ChartFormat`] - Chart data format options
//! - [`find_samples`] - Sample transcript discovery for `list-samples`

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Extract activity, word and emoji statistics from WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats basic --file chat.txt
    chatstats basic -f chat.txt --plot
    chatstats deep --file chat.txt --output report
    chatstats deep -f chat.txt --format json
    chatstats list-samples")]
pub struct Args {
    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run basic message count analysis
    Basic(BasicArgs),

    /// Run comprehensive analysis and export chart data
    Deep(DeepArgs),

    /// List available sample chat files
    ListSamples,

    /// Show version information
    Version,
}

/// Options of `chatstats basic`.
#[derive(ClapArgs, Debug, Clone)]
pub struct BasicArgs {
    /// Path to WhatsApp chat export file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Also write message_count.csv (top 10 members) to the working directory
    #[arg(short, long)]
    pub plot: bool,
}

/// Options of `chatstats deep`.
#[derive(ClapArgs, Debug, Clone)]
pub struct DeepArgs {
    /// Path to WhatsApp chat export file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output directory for the report and chart data
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Chart data format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ChartFormat,

    /// Skip chart data, write only the statistics report
    #[arg(long)]
    pub no_plots: bool,
}

/// Chart data format options.
///
/// # Example
///
/// ```rust
/// use chatstats::cli::ChartFormat;
/// use chatstats::format::OutputFormat;
/// use clap::ValueEnum;
///
/// let format = ChartFormat::from_str("json", true).unwrap();
/// assert_eq!(OutputFormat::from(format), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// One semicolon-delimited CSV file per chart (default)
    #[default]
    Csv,

    /// All charts in a single metrics.json
    Json,
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartFormat::Csv => write!(f, "CSV"),
            ChartFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<ChartFormat> for crate::format::OutputFormat {
    fn from(format: ChartFormat) -> crate::format::OutputFormat {
        match format {
            ChartFormat::Csv => crate::format::OutputFormat::Csv,
            ChartFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

/// Sample transcripts available under `root`.
///
/// Lists `root/sample_chat.txt` if present, then every `.txt` file in
/// `root/samples/` sorted by name. Paths are relative to `root`.
pub fn find_samples(root: &Path) -> Vec<PathBuf> {
    let mut samples = Vec::new();

    if root.join("sample_chat.txt").is_file() {
        samples.push(PathBuf::from("sample_chat.txt"));
    }

    if let Ok(entries) = fs::read_dir(root.join("samples")) {
        let mut extra: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
            .filter_map(|path| path.file_name().map(|name| Path::new("samples").join(name)))
            .collect();
        extra.sort();
        samples.extend(extra);
    }

    samples
}
