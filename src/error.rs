//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # What is *not* an error
//!
//! - A block of transcript text that doesn't match the header grammar is
//!   silently dropped; the count is reported in
//!   [`ParseOutcome::skipped`](crate::parser::ParseOutcome::skipped).
//! - A transcript with no parseable messages yields an empty
//!   [`Metrics`](crate::core::Metrics) bundle. Check
//!   [`Metrics::is_empty`](crate::core::Metrics::is_empty) before reporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// The input transcript could not be opened or read.
    ///
    /// Fatal for the analysis of that file.
    #[error("Cannot read chat export '{}': {source}", path.display())]
    FileNotReadable {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// None of the candidate encodings could decode the input.
    #[error("Could not decode chat export; tried encodings: {}", attempted.join(", "))]
    Encoding {
        /// Names of every encoding that was attempted, in order
        attempted: Vec<&'static str>,
    },

    /// An I/O error occurred while writing output.
    ///
    /// This typically happens when:
    /// - The output directory cannot be created
    /// - Permission denied
    /// - Disk is full
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a file-not-readable error for `path`.
    pub fn file_not_readable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::FileNotReadable {
            path: path.into(),
            source,
        }
    }

    /// Creates an encoding error listing the attempted encodings.
    pub fn encoding(attempted: Vec<&'static str>) -> Self {
        ChatstatsError::Encoding { attempted }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the input file could not be read.
    pub fn is_file_not_readable(&self) -> bool {
        matches!(self, ChatstatsError::FileNotReadable { .. })
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ChatstatsError::Encoding { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
