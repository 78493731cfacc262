//! Conversation-level data models.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Counters collected while assembling one transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Records fed to the assembler
    pub records: usize,
    /// Messages produced
    pub messages: usize,
    /// Records that matched no rule. A record that only announces a group
    /// name counts under `name_changes` instead.
    pub unrecognized: usize,
    /// Records dropped because their timestamp did not parse
    pub skipped_timestamps: usize,
    /// Group-name announcements observed
    pub name_changes: usize,
    /// The record split looked wrong (one record with bare line feeds)
    pub malformed: bool,
}

impl AssemblyStats {
    /// Records that did not become a message.
    pub fn dropped(&self) -> usize {
        self.records.saturating_sub(self.messages)
    }
}

/// A parsed transcript: the resolved name and its ordered messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Final conversation name (last group-name change, else the file name)
    pub name: String,
    /// Messages in record order
    pub messages: Vec<Message>,
    /// Run counters
    #[serde(skip)]
    pub stats: AssemblyStats,
}

impl Conversation {
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
            stats: AssemblyStats::default(),
        }
    }

    /// Builder-style method to attach run counters.
    #[must_use]
    pub fn with_stats(mut self, stats: AssemblyStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct authors in order of first appearance.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in &self.messages {
            if !seen.contains(&msg.author()) {
                seen.push(msg.author());
            }
        }
        seen
    }
}

/// Configuration for output format.
/// Controls which per-message fields the data writers include.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include author colors in output
    pub include_colors: bool,
    /// Include text direction in output
    pub include_direction: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional field enabled.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_colors: true,
            include_direction: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_colors(mut self) -> Self {
        self.include_colors = true;
        self
    }

    #[must_use]
    pub fn with_direction(mut self) -> Self {
        self.include_direction = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Direction;
    use chrono::{TimeZone, Utc};

    fn msg(author: &str, body: &str) -> Message {
        let ts = Utc.with_ymd_and_hms(2021, 8, 12, 14, 3, 0).unwrap();
        Message::new(ts, author, "hsl(0, 76%, 36%)", body, Direction::Ltr)
    }

    #[test]
    fn test_output_config_builders() {
        let config = OutputConfig::new().with_timestamps().with_direction();
        assert!(config.include_timestamps);
        assert!(!config.include_colors);
        assert!(config.include_direction);
        assert_eq!(OutputConfig::all(), config.with_colors());
    }

    #[test]
    fn test_authors_first_appearance() {
        let conv = Conversation::new(
            "chat",
            vec![msg("Bob", "a"), msg("Alice", "b"), msg("Bob", "c")],
        );
        assert_eq!(conv.authors(), vec!["Bob", "Alice"]);
        assert_eq!(conv.len(), 3);
    }

    #[test]
    fn test_stats_dropped() {
        let stats = AssemblyStats {
            records: 5,
            messages: 3,
            ..AssemblyStats::default()
        };
        assert_eq!(stats.dropped(), 2);
    }
}
