//! Entry point for converting an export file.
//!
//! [`ArchiveParser`] ties the pipeline together: decode the bytes, split
//! them into records, assemble the records into a [`Conversation`].
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> whatsarchive::Result<()> {
//! use whatsarchive::parser::ArchiveParser;
//!
//! let conversation = ArchiveParser::new().parse("WhatsApp Chat with Hiking Crew.txt")?;
//! for msg in &conversation.messages {
//!     println!("{}: {}", msg.author(), msg.body());
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::ArchiveConfig;
use crate::core::assembler::MessageAssembler;
use crate::core::color::ColorTable;
use crate::core::models::Conversation;
use crate::error::Result;
use crate::parsing::records::RecordSplitter;

/// Parser for WhatsApp text exports.
#[derive(Debug, Clone, Default)]
pub struct ArchiveParser {
    config: ArchiveConfig,
}

impl ArchiveParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ArchiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Reads and converts an export file. The conversation is named after
    /// the file's base name until the transcript names it.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Conversation> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!(path = %path.display(), bytes = bytes.len(), "read transcript");
        self.parse_bytes(&bytes, &name)
    }

    /// Converts raw export bytes.
    pub fn parse_bytes(&self, bytes: &[u8], name: &str) -> Result<Conversation> {
        let mut assembler = MessageAssembler::new(self.config.clone())?;
        self.run(&mut assembler, bytes, name)
    }

    /// Converts already-decoded export text.
    pub fn parse_str(&self, text: &str, name: &str) -> Result<Conversation> {
        self.parse_bytes(text.as_bytes(), name)
    }

    /// Converts several exports with one color table, so an author keeps
    /// the same color object across all of them.
    pub fn parse_many<'a, I>(&self, inputs: I) -> Result<(Vec<Conversation>, ColorTable)>
    where
        I: IntoIterator<Item = (&'a [u8], &'a str)>,
    {
        let mut assembler = MessageAssembler::new(self.config.clone())?;
        let mut conversations = Vec::new();
        for (bytes, name) in inputs {
            conversations.push(self.run(&mut assembler, bytes, name)?);
        }
        Ok((conversations, assembler.into_colors()))
    }

    fn run(&self, assembler: &mut MessageAssembler, bytes: &[u8], name: &str) -> Result<Conversation> {
        let splitter = RecordSplitter::new()?.with_line_feed_fallback(self.config.line_feed_fallback);
        let records = splitter.split_bytes(bytes)?;

        if records.is_malformed() {
            if records.is_recovered() {
                warn!(
                    records = records.len(),
                    "no CR LF record boundaries found; split on line feeds instead"
                );
            } else {
                warn!("transcript has a single record; its line endings may have been converted");
            }
        }

        let mut conversation = assembler.assemble(records.iter(), name)?;
        conversation.stats.malformed = records.is_malformed();
        Ok(conversation)
    }
}
