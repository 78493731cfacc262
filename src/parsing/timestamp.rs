//! Date and time token normalization.
//!
//! WhatsApp writes timestamps in the exporting phone's locale. The grammar
//! captures the date and the time as two separate tokens; this module turns
//! the pair into one instant.
//!
//! # Day-first
//!
//! Ambiguous numeric dates are read **day first**: `03/04/2021` is 3 April,
//! not 4 March. This silently disagrees with month-first (US) locales. When
//! the day-first reading is impossible (`12/25/2021`) the month-first reading
//! is used instead. A date whose first field has four digits is year-first
//! (`2016-06-27`).
//!
//! Two-digit years follow POSIX `strptime`: `00`–`68` map to 20xx and
//! `69`–`99` to 19xx. The pivot is fixed rather than a sliding window
//! around the current date, so a given export always yields the same dates
//! no matter when it is converted.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{ArchiveError, Result};

/// Time formats tried in order, after the token has been normalized.
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Parses a date token and a time token into a single instant.
///
/// The export carries no time zone, so wall-clock values are stored as UTC.
///
/// # Example
///
/// ```rust
/// use whatsarchive::parsing::timestamp::normalize;
///
/// let ts = normalize("03/04/2021", "8:04 PM")?;
/// assert_eq!(ts.to_rfc3339(), "2021-04-03T20:04:00+00:00");
/// # Ok::<(), whatsarchive::ArchiveError>(())
/// ```
pub fn normalize(date: &str, time: &str) -> Result<DateTime<Utc>> {
    let day = parse_date(date).ok_or_else(|| ArchiveError::invalid_timestamp(date, time))?;
    let clock = parse_time(time).ok_or_else(|| ArchiveError::invalid_timestamp(date, time))?;
    Ok(day.and_time(clock).and_utc())
}

/// Parses a numeric date with `/`, `-` or `.` separators.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = token.trim().split(['/', '-', '.']).collect();
    let [first, second, third] = fields.as_slice() else {
        return None;
    };

    let a: u32 = first.parse().ok()?;
    let b: u32 = second.parse().ok()?;
    let c: u32 = third.parse().ok()?;

    if first.len() == 4 {
        return NaiveDate::from_ymd_opt(i32::try_from(a).ok()?, b, c);
    }

    let year = expand_year(c, third.len())?;
    NaiveDate::from_ymd_opt(year, b, a).or_else(|| NaiveDate::from_ymd_opt(year, a, b))
}

/// Parses a 24-hour or 12-hour time, with or without seconds.
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    let normalized = normalize_time_token(token);
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
}

fn expand_year(value: u32, digits: usize) -> Option<i32> {
    let value = i32::try_from(value).ok()?;
    match digits {
        1 | 2 if value < 69 => Some(2000 + value),
        1 | 2 => Some(1900 + value),
        _ => Some(value),
    }
}

/// Rewrites `10.30`, `8:04PM` and `8:04\u{202f}PM` into forms chrono accepts.
fn normalize_time_token(token: &str) -> String {
    let mut clock = String::with_capacity(token.len());
    let mut suffix = String::new();

    for ch in token.trim().chars() {
        match ch {
            '.' if suffix.is_empty() => clock.push(':'),
            '.' => {}
            c if c.is_ascii_digit() || c == ':' => clock.push(c),
            c if c.is_alphabetic() => suffix.push(c.to_ascii_uppercase()),
            _ => {}
        }
    }

    if suffix.is_empty() {
        clock
    } else {
        format!("{clock} {suffix}")
    }
}
