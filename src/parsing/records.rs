//! Splitting a transcript into records.
//!
//! WhatsApp terminates each record with CR LF. A message body that spans
//! several lines keeps bare LF characters between its lines, so only the
//! two-byte sequence is a boundary.

use std::borrow::Cow;

use regex::Regex;

use crate::error::{ArchiveError, Result};
use crate::parsing::grammar::{DATE, DIRECTIONAL_MARK};

/// Record boundary.
pub const RECORD_DELIMITER: &str = "\r\n";

/// UTF-8 byte-order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes transcript bytes as UTF-8, dropping a leading byte-order mark.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|e| ArchiveError::utf8("transcript", e))
}

/// Records of one transcript, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records<'a> {
    records: Vec<Cow<'a, str>>,
    malformed: bool,
    recovered: bool,
}

impl<'a> Records<'a> {
    /// Returns the records.
    pub fn as_slice(&self) -> &[Cow<'a, str>] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` when the CR LF split produced a single record from text
    /// that contains bare line feeds. That is what an export looks like after
    /// its line endings were translated.
    ///
    /// A single record with no line feed at all is a one-message export, not
    /// a broken split, so it is not flagged.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Returns `true` when the records were rebuilt by line-feed fallback.
    pub fn is_recovered(&self) -> bool {
        self.recovered
    }

    /// Iterates over the records as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.as_ref())
    }
}

/// Splits decoded transcript text into records.
///
/// # Example
///
/// ```rust
/// use whatsarchive::parsing::records::RecordSplitter;
///
/// let splitter = RecordSplitter::new()?;
/// let records = splitter.split("1/1/21, 10:00 - A: one\ntwo\r\n1/1/21, 10:01 - B: three\r\n");
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records.as_slice()[0], "1/1/21, 10:00 - A: one\ntwo");
/// # Ok::<(), whatsarchive::ArchiveError>(())
/// ```
pub struct RecordSplitter {
    line_feed_fallback: bool,
    record_start: Regex,
}

impl RecordSplitter {
    /// Creates a splitter that only ever splits on CR LF.
    pub fn new() -> Result<Self> {
        Ok(Self {
            line_feed_fallback: false,
            record_start: Regex::new(&[r"^", DIRECTIONAL_MARK, r"\[?", DATE].concat())?,
        })
    }

    /// Enables re-splitting malformed transcripts on bare line feeds.
    #[must_use]
    pub fn with_line_feed_fallback(mut self, enabled: bool) -> Self {
        self.line_feed_fallback = enabled;
        self
    }

    /// Decodes `bytes` and splits them.
    pub fn split_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Records<'a>> {
        Ok(self.split(decode(bytes)?))
    }

    /// Splits text on CR LF. Empty records, such as the tail after a final
    /// CR LF, are dropped.
    pub fn split<'a>(&self, text: &'a str) -> Records<'a> {
        let records: Vec<Cow<'a, str>> = text
            .split(RECORD_DELIMITER)
            .filter(|r| !r.is_empty())
            .map(Cow::Borrowed)
            .collect();
        let malformed = records.len() == 1 && text.contains('\n');

        if malformed && self.line_feed_fallback {
            return Records {
                records: self.rejoin_lines(text),
                malformed,
                recovered: true,
            };
        }

        Records {
            records,
            malformed,
            recovered: false,
        }
    }

    /// Splits on LF and appends every line that does not start with a date
    /// to the record before it.
    fn rejoin_lines<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        let mut records: Vec<Cow<'a, str>> = Vec::new();

        for line in text.lines() {
            let continues = !records.is_empty() && !self.record_start.is_match(line);
            if continues {
                if let Some(last) = records.last_mut() {
                    let joined = last.to_mut();
                    joined.push('\n');
                    joined.push_str(line);
                }
            } else if !line.is_empty() {
                records.push(Cow::Borrowed(line));
            }
        }

        records
    }
}
