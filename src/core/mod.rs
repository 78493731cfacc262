//! Core processing: from classified records to rendered messages.
//!
//! This module contains:
//! - [`assembler`] - the record fold that produces a [`Conversation`]
//! - [`color`] - per-author colors
//! - [`sanitize`] - body escaping, links and attachments
//! - [`direction`] - left-to-right / right-to-left detection
//! - [`models`] - [`Conversation`], [`AssemblyStats`], [`OutputConfig`]
//! - [`processor`] - author runs for display
//! - [`output`] - format writers (HTML, JSON, JSONL, CSV)

pub mod assembler;
pub mod color;
pub mod direction;
pub mod models;
pub mod output;
pub mod processor;
pub mod sanitize;

pub use assembler::MessageAssembler;
pub use color::ColorTable;
pub use direction::direction_of;
pub use models::{AssemblyStats, Conversation, OutputConfig};
pub use processor::{AuthorRun, group_by_author};
pub use sanitize::ContentSanitizer;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use output::{to_html, write_html};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
