//! Configuration types for the conversion pipeline.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use whatsarchive::config::ArchiveConfig;
//! use whatsarchive::parser::ArchiveParser;
//!
//! let config = ArchiveConfig::new()
//!     .with_skip_invalid_timestamps(true)
//!     .with_line_feed_fallback(true);
//!
//! let parser = ArchiveParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript conversion.
///
/// # Timestamp policy
///
/// A record whose date and time tokens match the grammar but do not form a
/// real instant (`31/02/2021`) aborts the run by default, naming the record.
/// With `skip_invalid_timestamps` the record is logged and dropped instead,
/// and the run continues.
///
/// # Line-feed fallback
///
/// Exports are split on CR LF. An export that went through line-ending
/// translation ends up as a single record. When `line_feed_fallback` is set,
/// such a file is re-split on LF and lines that do not start with a date are
/// glued back onto the previous record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Drop records with unparseable timestamps instead of failing (default: false)
    pub skip_invalid_timestamps: bool,

    /// Re-split single-record exports on bare line feeds (default: false)
    pub line_feed_fallback: bool,
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forgiving configuration: skip bad timestamps and recover
    /// translated line endings.
    pub fn lenient() -> Self {
        Self {
            skip_invalid_timestamps: true,
            line_feed_fallback: true,
        }
    }

    /// Sets whether records with invalid timestamps are skipped.
    #[must_use]
    pub fn with_skip_invalid_timestamps(mut self, skip: bool) -> Self {
        self.skip_invalid_timestamps = skip;
        self
    }

    /// Enables or disables line-feed fallback splitting.
    #[must_use]
    pub fn with_line_feed_fallback(mut self, enabled: bool) -> Self {
        self.line_feed_fallback = enabled;
        self
    }
}
