//! Text direction from the first character of a body.

use unicode_bidi::{BidiClass, bidi_class};

use crate::message::Direction;

/// Returns [`Direction::Rtl`] when the first character is strong
/// right-to-left (bidi class `R` or `AL`).
///
/// Only the first character is looked at. A Hebrew message that starts
/// with a Latin word is reported as left-to-right, and an empty body is
/// left-to-right.
///
/// ```rust
/// use whatsarchive::core::direction::direction_of;
/// use whatsarchive::message::Direction;
///
/// assert_eq!(direction_of("שלום"), Direction::Rtl);
/// assert_eq!(direction_of("hello"), Direction::Ltr);
/// ```
pub fn direction_of(body: &str) -> Direction {
    match body.chars().next().map(bidi_class) {
        Some(BidiClass::R | BidiClass::AL) => Direction::Rtl,
        _ => Direction::Ltr,
    }
}
