//! Transcript parsing: record splitting, grammar, timestamps, and the
//! conversation name.
//!
//! - [`records`] - CR LF record splitting and UTF-8 decoding
//! - [`grammar`] - ordered record matchers and [`ClassifiedRecord`](grammar::ClassifiedRecord)
//! - [`timestamp`] - day-first date/time normalization
//! - [`group_name`] - conversation name accumulator

pub mod grammar;
pub mod group_name;
pub mod records;
pub mod timestamp;

pub use grammar::{ClassifiedRecord, LineClassifier, RecordMatcher};
pub use group_name::GroupNameTracker;
pub use records::{RecordSplitter, Records};
