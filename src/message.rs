//! The rendered message type produced by the assembler.
//!
//! A [`Message`] is the durable output unit of a conversion run. Unlike the
//! raw record it came from, its body is already sanitized markup, and it
//! carries the presentation details a renderer needs: the author's color and
//! the body's text direction.
//!
//! # Examples
//!
//! ```
//! use whatsarchive::message::{Direction, Message};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2021, 8, 12, 14, 3, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "hsl(288, 76%, 36%)", "Hello", Direction::Ltr);
//!
//! assert_eq!(msg.author(), "Alice");
//! assert!(!msg.is_rtl());
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded for records that carry no author field, such as the
/// encryption notice at the top of an export.
pub const NOBODY: &str = "nobody";

/// Rendering direction of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (Latin, Cyrillic, CJK, ...)
    #[default]
    Ltr,
    /// Right-to-left (Hebrew, Arabic, ...)
    Rtl,
}

impl Direction {
    /// Returns the value used for an HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified, sanitized chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Wall-clock time from the export (no zone is recorded) |
/// | `author` | `String` | Display name, or [`NOBODY`] for author-less records |
/// | `color` | `Arc<str>` | `hsl(...)` color shared by every message of the author |
/// | `body` | `String` | Sanitized HTML markup |
/// | `direction` | [`Direction`] | Inferred from the first character of `body` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name of the author.
    pub author: String,

    /// Display color, shared with every other message by the same author.
    pub color: Arc<str>,

    /// Sanitized body markup.
    ///
    /// HTML-significant characters are escaped, URLs are anchors, attachment
    /// markers are inline previews, and line breaks are `<br>`.
    pub body: String,

    /// Text direction of the body.
    pub direction: Direction,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        author: impl Into<String>,
        color: impl Into<Arc<str>>,
        body: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            color: color.into(),
            body: body.into(),
            direction,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the author's display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the sanitized body markup.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the body direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the body renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }

    /// Returns `true` if the message has no author field in the export.
    pub fn is_anonymous(&self) -> bool {
        self.author == NOBODY
    }
}
