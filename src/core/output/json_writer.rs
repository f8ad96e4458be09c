//! JSON chart writer.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ChartData;
use crate::error::Result;

/// File name of the JSON document inside the output directory.
pub const METRICS_FILE: &str = "metrics.json";

/// Writes all chart tables to `dir/metrics.json`.
///
/// # Format
/// ```json
/// {
///   "summary": {"total_messages": 2, "members": 2, ...},
///   "message_count": [{"Sender": "Alice", "Messages": 1}, ...],
///   "hourly_activity": [{"Hour": 0, "Messages": 0}, ...],
///   ...
/// }
/// ```
pub fn write_json_charts(charts: &ChartData, dir: &Path) -> Result<PathBuf> {
    let json = to_json(charts)?;
    let path = dir.join(METRICS_FILE);
    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;
    debug!(path = %path.display(), "wrote metrics document");
    Ok(path)
}

/// Converts all chart tables to a pretty-printed JSON string.
///
/// Same format as [`write_json_charts`], but returns a String instead of
/// writing to a file.
pub fn to_json(charts: &ChartData) -> Result<String> {
    Ok(serde_json::to_string_pretty(charts)?)
}
