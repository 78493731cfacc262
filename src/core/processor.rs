//! Grouping messages into author runs for display.

use chrono::{DateTime, Utc};

use crate::Message;

/// A maximal sequence of consecutive messages by one author.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRun<'a> {
    pub author: &'a str,
    pub color: &'a str,
    pub messages: &'a [Message],
}

impl AuthorRun<'_> {
    /// Timestamp of the run's first message.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.messages.first().map(Message::timestamp)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Splits messages into runs of consecutive messages from the same author.
///
/// Messages are not merged or reordered; each run borrows a slice.
///
/// # Example
/// Input:  `[Alice "Hi", Alice "How are you?", Bob "Fine"]`
/// Output: `[Alice x2, Bob x1]`
pub fn group_by_author(messages: &[Message]) -> Vec<AuthorRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for end in 1..=messages.len() {
        let boundary = end == messages.len() || messages[end].author != messages[start].author;
        if boundary {
            let first = &messages[start];
            runs.push(AuthorRun {
                author: first.author(),
                color: first.color(),
                messages: &messages[start..end],
            });
            start = end;
        }
    }

    runs
}
