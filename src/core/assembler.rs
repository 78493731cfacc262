//! Turns records into a [`Conversation`].
//!
//! The assembler is a left fold over the records. For each record it
//!
//! - feeds group-name announcements to the [`GroupNameTracker`],
//! - classifies the record as a message, if it is one,
//! - sanitizes the body, detects its direction and colors its author.
//!
//! Messages keep record order. Nothing is re-sorted by timestamp.

use tracing::{debug, info, warn};

use crate::Message;
use crate::config::ArchiveConfig;
use crate::core::color::ColorTable;
use crate::core::direction::direction_of;
use crate::core::models::{AssemblyStats, Conversation};
use crate::core::sanitize::ContentSanitizer;
use crate::error::Result;
use crate::parsing::grammar::{ClassifiedRecord, LineClassifier};
use crate::parsing::group_name::GroupNameTracker;

/// Builds messages from records.
///
/// The color table lives as long as the assembler, so running it over
/// several transcripts keeps author colors shared between them. A table can
/// also be supplied up front with [`with_colors`](Self::with_colors) and
/// taken back with [`into_colors`](Self::into_colors).
///
/// # Example
///
/// ```rust
/// use whatsarchive::config::ArchiveConfig;
/// use whatsarchive::core::assembler::MessageAssembler;
///
/// let mut assembler = MessageAssembler::new(ArchiveConfig::default())?;
/// let conversation = assembler.assemble(
///     ["12/08/2021, 14:03 - Alice: Hello <there>"],
///     "chat.txt",
/// )?;
///
/// assert_eq!(conversation.name, "chat.txt");
/// assert_eq!(conversation.messages[0].body(), "Hello &lt;there&gt;");
/// # Ok::<(), whatsarchive::ArchiveError>(())
/// ```
pub struct MessageAssembler {
    classifier: LineClassifier,
    sanitizer: ContentSanitizer,
    colors: ColorTable,
    config: ArchiveConfig,
}

impl MessageAssembler {
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new()?,
            sanitizer: ContentSanitizer::new()?,
            colors: ColorTable::new(),
            config,
        })
    }

    /// Replaces the color table.
    #[must_use]
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Consumes the assembler and returns its color table.
    pub fn into_colors(self) -> ColorTable {
        self.colors
    }

    /// Folds `records` into a conversation named `initial_name` until a
    /// group-name announcement says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidTimestamp`](crate::ArchiveError::InvalidTimestamp)
    /// with the 1-based record number when a record's timestamp does not
    /// parse, unless the config skips such records.
    pub fn assemble<'r, I>(&mut self, records: I, initial_name: &str) -> Result<Conversation>
    where
        I: IntoIterator<Item = &'r str>,
    {
        let mut tracker = GroupNameTracker::new(initial_name);
        let mut messages = Vec::new();
        let mut stats = AssemblyStats::default();

        for (index, record) in records.into_iter().enumerate() {
            let number = index + 1;
            stats.records += 1;

            let changes = self.classifier.group_names(record)?;
            for change in &changes {
                tracker.observe(change);
            }

            match self.classifier.message(record) {
                Ok(Some(classified)) => {
                    if let Some(message) = self.build_message(&classified) {
                        debug!(record = number, author = message.author(), "message");
                        messages.push(message);
                    }
                }
                Ok(None) if changes.is_empty() => {
                    warn!(record = number, text = record, "unrecognized record skipped");
                    stats.unrecognized += 1;
                }
                Ok(None) => {
                    debug!(record = number, "group name record, no message");
                }
                Err(err) if err.is_invalid_timestamp() && self.config.skip_invalid_timestamps => {
                    warn!(error = %err.at_record(number), "record skipped");
                    stats.skipped_timestamps += 1;
                }
                Err(err) => return Err(err.at_record(number)),
            }
        }

        stats.messages = messages.len();
        stats.name_changes = tracker.changes();
        let name = tracker.into_name();
        info!(
            name = %name,
            records = stats.records,
            messages = stats.messages,
            "conversation assembled"
        );

        Ok(Conversation::new(name, messages).with_stats(stats))
    }

    /// Renders a classified message. Returns `None` for non-message records.
    fn build_message(&mut self, record: &ClassifiedRecord<'_>) -> Option<Message> {
        let (timestamp, body) = match *record {
            ClassifiedRecord::SenderMessage {
                timestamp, body, ..
            }
            | ClassifiedRecord::AnonymousMessage { timestamp, body } => (timestamp, body),
            _ => return None,
        };
        let author = record.author()?;
        let body = self.sanitizer.sanitize(body);
        let direction = direction_of(&body);
        let color = self.colors.color_for(author);

        Some(Message::new(timestamp, author, color, body, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Direction, NOBODY};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn assembler() -> MessageAssembler {
        MessageAssembler::new(ArchiveConfig::default()).unwrap()
    }

    #[test]
    fn test_sender_message() {
        let conv = assembler()
            .assemble(["12/08/2021, 14:03 - Alice: Hello <there>"], "chat.txt")
            .unwrap();

        assert_eq!(conv.messages.len(), 1);
        let msg = &conv.messages[0];
        assert_eq!(msg.author(), "Alice");
        assert_eq!(msg.body(), "Hello &lt;there&gt;");
        assert_eq!(msg.direction(), Direction::Ltr);
        assert_eq!(msg.color(), "hsl(288, 76%, 36%)");
        assert_eq!(
            msg.timestamp(),
            Utc.with_ymd_and_hms(2021, 8, 12, 14, 3, 0).unwrap()
        );
    }

    #[test]
    fn test_anonymous_first_line() {
        let conv = assembler()
            .assemble(
                ["12/08/2021, 14:00 - Messages and calls are end-to-end encrypted."],
                "chat.txt",
            )
            .unwrap();
        assert_eq!(conv.messages[0].author(), NOBODY);
        assert_eq!(conv.messages[0].color(), "hsl(8, 76%, 36%)");
    }

    #[test]
    fn test_group_name_without_message() {
        let conv = assembler()
            .assemble(
                [
                    "\u{200E}Alice created group \"Hiking Crew\"",
                    "12/08/2021, 14:03 - Alice: Hi",
                ],
                "chat.txt",
            )
            .unwrap();
        assert_eq!(conv.name, "Hiking Crew");
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.stats.name_changes, 1);
        assert_eq!(conv.stats.unrecognized, 0);
    }

    #[test]
    fn test_unrecognized_is_skipped() {
        let conv = assembler()
            .assemble(
                [
                    "12/08/2021, 14:03 - Alice: one",
                    "garbage without a date",
                    "12/08/2021, 14:04 - Bob: two",
                ],
                "chat.txt",
            )
            .unwrap();
        let bodies: Vec<&str> = conv.messages.iter().map(Message::body).collect();
        assert_eq!(bodies, vec!["one", "two"]);
        assert_eq!(conv.stats.unrecognized, 1);
        assert_eq!(conv.stats.records, 3);
    }

    #[test]
    fn test_invalid_timestamp_is_fatal_by_default() {
        let err = assembler()
            .assemble(
                ["12/08/2021, 14:03 - Alice: one", "31/02/2021, 10:00 - Bob: two"],
                "chat.txt",
            )
            .unwrap_err();
        assert!(err.is_invalid_timestamp());
        assert!(err.to_string().contains("record 2"));
    }

    #[test]
    fn test_invalid_timestamp_skipped_when_configured() {
        let mut assembler = MessageAssembler::new(
            ArchiveConfig::new().with_skip_invalid_timestamps(true),
        )
        .unwrap();
        let conv = assembler
            .assemble(
                ["31/02/2021, 10:00 - Bob: bad", "12/08/2021, 14:03 - Alice: ok"],
                "chat.txt",
            )
            .unwrap();
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.stats.skipped_timestamps, 1);
    }

    #[test]
    fn test_colors_shared_across_messages() {
        let mut assembler = assembler();
        let conv = assembler
            .assemble(
                [
                    "12/08/2021, 14:03 - Alice: one",
                    "12/08/2021, 14:04 - Alice: two",
                ],
                "chat.txt",
            )
            .unwrap();
        assert!(Arc::ptr_eq(
            &conv.messages[0].color,
            &conv.messages[1].color
        ));
        assert_eq!(assembler.colors().len(), 1);
    }

    #[test]
    fn test_supplied_color_table_is_returned() {
        let mut table = ColorTable::new();
        let alice = table.color_for("Alice");

        let mut assembler = assembler().with_colors(table);
        let conv = assembler
            .assemble(["12/08/2021, 14:03 - Alice: one"], "chat.txt")
            .unwrap();
        assert!(Arc::ptr_eq(&alice, &conv.messages[0].color));

        let table = assembler.into_colors();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rtl_body() {
        let conv = assembler()
            .assemble(["12/08/2021, 14:03 - Dana: שלום"], "chat.txt")
            .unwrap();
        assert!(conv.messages[0].is_rtl());
    }
}
