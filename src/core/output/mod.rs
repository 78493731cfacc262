//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_html`] / [`to_html`] - standalone browsable page - requires `html-output` feature
//! - [`write_json`] / [`to_json`] - name plus message array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one message per line - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//!
//! Every writer takes a whole [`Conversation`](crate::core::models::Conversation).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "html-output", feature = "json-output"))]
//! # fn main() -> whatsarchive::Result<()> {
//! use whatsarchive::core::output::{write_html, write_json};
//! use whatsarchive::core::models::OutputConfig;
//! use whatsarchive::parser::ArchiveParser;
//!
//! let conversation = ArchiveParser::new().parse("chat.txt")?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_html(&conversation, "archive.html", &config)?;
//! write_json(&conversation, "archive.json", &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "html-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "html-output")]
mod html_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "html-output")]
pub use html_writer::{to_html, write_html};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
