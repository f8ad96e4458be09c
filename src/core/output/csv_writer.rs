//! CSV chart writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::ChartData;
use crate::error::Result;

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(b';');
    builder
}

/// Writes one table to `path`.
///
/// # Format
/// - Delimiter: `;`
/// - Header row from the row type's field names
/// - Encoding: UTF-8
pub fn write_table<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = builder().from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote chart table");
    Ok(())
}

/// Converts one table to a CSV string.
///
/// Same format as [`write_table`]. An empty table yields an empty string.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = builder().from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_into<T: Serialize>(
    dir: &Path,
    name: &str,
    rows: &[T],
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    if rows.is_empty() {
        debug!(table = name, "empty table, not written");
        return Ok(());
    }
    let path = dir.join(name);
    write_table(rows, &path)?;
    written.push(path);
    Ok(())
}

/// Writes every chart table into `dir`, one file each.
///
/// Empty tables are not written. Returns the written paths in table order.
/// `dir` must exist.
pub fn write_csv_charts(charts: &ChartData, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(8);

    write_into(dir, "message_count.csv", &charts.message_count, &mut written)?;
    write_into(dir, "media_count.csv", &charts.media_count, &mut written)?;
    write_into(dir, "hourly_activity.csv", &charts.hourly_activity, &mut written)?;
    write_into(dir, "weekday_activity.csv", &charts.weekday_activity, &mut written)?;
    write_into(dir, "activity_timeline.csv", &charts.activity_timeline, &mut written)?;
    write_into(dir, "avg_message_length.csv", &charts.avg_message_length, &mut written)?;
    write_into(dir, "emoji_usage.csv", &charts.emoji_usage, &mut written)?;
    write_into(dir, "wordcloud.csv", &charts.wordcloud, &mut written)?;

    Ok(written)
}
