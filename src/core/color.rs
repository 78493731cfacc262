//! Per-author display colors.
//!
//! Each author gets a hue derived from the MD5 digest of their display name,
//! so the same name has the same color in every archive. Two authors may
//! share a hue; no attempt is made to avoid that.

use std::collections::HashMap;
use std::sync::Arc;

use md5::{Digest, Md5};

/// Saturation and lightness shared by every author color.
const SATURATION: u8 = 76;
const LIGHTNESS: u8 = 36;

/// Returns the hue in `0..360` for an author name.
///
/// The 128-bit digest is read as a big-endian unsigned integer and reduced
/// modulo 360.
pub fn hue_for(author: &str) -> u16 {
    let digest = Md5::digest(author.as_bytes());
    let hue = digest
        .iter()
        .fold(0u32, |acc, &byte| (acc * 256 + u32::from(byte)) % 360);
    hue as u16
}

/// Formats the display color for an author.
pub fn color_for(author: &str) -> String {
    format!("hsl({}, {SATURATION}%, {LIGHTNESS}%)", hue_for(author))
}

/// Memoized author colors for one conversion run.
///
/// Entries are never removed. A repeated lookup returns the same shared
/// string without hashing again.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use whatsarchive::core::color::ColorTable;
///
/// let mut colors = ColorTable::new();
/// let first = colors.color_for("Alice");
/// let second = colors.color_for("Alice");
///
/// assert_eq!(&*first, "hsl(288, 76%, 36%)");
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: HashMap<String, Arc<str>>,
}

impl ColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the author's color, computing it on first use.
    pub fn color_for(&mut self, author: &str) -> Arc<str> {
        if let Some(color) = self.colors.get(author) {
            return Arc::clone(color);
        }
        let color: Arc<str> = color_for(author).into();
        self.colors.insert(author.to_string(), Arc::clone(&color));
        color
    }

    /// Returns a previously computed color.
    pub fn get(&self, author: &str) -> Option<&str> {
        self.colors.get(author).map(|c| c.as_ref())
    }

    /// Number of authors seen.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no color has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
