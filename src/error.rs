//! Unified error types for whatsarchive.
//!
//! This module provides a single [`ArchiveError`] enum that covers all error
//! cases in the library.
//!
//! # Which errors abort a run
//!
//! - **Encoding failures** ([`ArchiveError::Utf8`]) are always fatal.
//! - **Timestamp failures** ([`ArchiveError::InvalidTimestamp`]) are fatal
//!   unless [`ArchiveConfig::skip_invalid_timestamps`](crate::config::ArchiveConfig)
//!   is enabled, in which case the record is logged and skipped.
//! - Unrecognized records are never errors; they are logged and dropped.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for whatsarchive operations.
///
/// # Example
///
/// ```rust
/// use whatsarchive::error::Result;
/// use whatsarchive::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// The error type for all whatsarchive operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArchiveError {
    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// A record carried date/time tokens that do not form a valid instant.
    #[error("Invalid timestamp '{date} {time}'{}", record.as_ref().map(|r| format!(" in record {r}")).unwrap_or_default())]
    InvalidTimestamp {
        /// The captured date token
        date: String,
        /// The captured time token
        time: String,
        /// 1-based record number, once known
        record: Option<usize>,
    },

    /// A built-in pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The requested format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
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

impl ArchiveError {
    /// Creates a timestamp error for a date/time token pair.
    pub fn invalid_timestamp(date: impl Into<String>, time: impl Into<String>) -> Self {
        ArchiveError::InvalidTimestamp {
            date: date.into(),
            time: time.into(),
            record: None,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ArchiveError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an encoding error for the given context.
    pub fn utf8(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ArchiveError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Attaches a 1-based record number to a timestamp error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_record(self, number: usize) -> Self {
        match self {
            ArchiveError::InvalidTimestamp { date, time, .. } => ArchiveError::InvalidTimestamp {
                date,
                time,
                record: Some(number),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ArchiveError::Io(_))
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ArchiveError::Utf8 { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ArchiveError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ArchiveError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
