//! # whatsarchive
//!
//! Converts a WhatsApp chat export (`.txt`) into an ordered list of
//! rendered messages, and from there into a browsable HTML page or a data
//! format.
//!
//! ## Overview
//!
//! An export is a sequence of records separated by CR LF. A record is
//! either a message with an author, an author-less system line, or noise.
//! Message bodies can span several lines, joined by bare LF characters.
//!
//! For every message the library produces a [`Message`] with:
//! - a normalized timestamp (dates are read day-first)
//! - the author and a stable per-author color
//! - a sanitized body: escaped HTML, linked URLs, embedded attachments
//! - the body's text direction
//!
//! The conversation is named after the input file until a system message
//! (`created group "..."`) names it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whatsarchive::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conversation = ArchiveParser::new().parse("chat.txt")?;
//!
//!     for msg in &conversation.messages {
//!         println!("[{}] {}: {}", msg.timestamp(), msg.author(), msg.body());
//!     }
//!
//!     write_html(&conversation, "archive.html", &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ArchiveParser`](parser::ArchiveParser), file and byte entry points
//! - [`config`] - [`ArchiveConfig`](config::ArchiveConfig) policy switches
//! - [`parsing`] - record splitting, grammar, timestamps, conversation name
//! - [`core`] - assembler, colors, sanitizer, direction, output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`message`] - [`Message`] and [`Direction`](message::Direction)
//! - [`error`] - [`ArchiveError`] and [`Result`]
//! - `cli` - argument parsing for the binary (feature `cli`)
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `html-output` | HTML page writer | - |
//! | `json-output` | JSON and JSONL writers | `serde_json` |
//! | `csv-output` | CSV writer | `csv` |
//! | `cli` | `whatsarchive` binary | `clap`, `tracing-subscriber` |
//! | `full` | All of the above (default) | |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ArchiveError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use whatsarchive::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::message::{Direction, NOBODY};

    pub use crate::error::{ArchiveError, Result};

    pub use crate::config::ArchiveConfig;
    pub use crate::parser::ArchiveParser;

    pub use crate::core::assembler::MessageAssembler;
    pub use crate::core::color::ColorTable;
    pub use crate::core::models::{AssemblyStats, Conversation, OutputConfig};
    pub use crate::core::processor::{AuthorRun, group_by_author};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "html-output")]
    pub use crate::core::output::{to_html, write_html};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
