//! Conversation name tracking.
//!
//! The conversation name starts as the input file's base name and is
//! replaced every time a record announces a group name. The last
//! announcement wins; names are never applied retroactively.

use tracing::info;

use crate::parsing::grammar::ClassifiedRecord;

/// Returns the conversation name after observing `record`.
///
/// Only [`ClassifiedRecord::GroupNameChange`] changes the value.
pub fn apply(current: String, record: &ClassifiedRecord<'_>) -> String {
    match record {
        ClassifiedRecord::GroupNameChange { new_name } => {
            info!(from = %current, to = %new_name, "conversation renamed");
            (*new_name).to_string()
        }
        _ => current,
    }
}

/// Accumulator that folds [`apply`] over a record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNameTracker {
    name: String,
    changes: usize,
}

impl GroupNameTracker {
    /// Starts tracking from the input identifier.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            name: initial.into(),
            changes: 0,
        }
    }

    /// Observes one classified record.
    pub fn observe(&mut self, record: &ClassifiedRecord<'_>) {
        if matches!(record, ClassifiedRecord::GroupNameChange { .. }) {
            self.changes += 1;
        }
        self.name = apply(std::mem::take(&mut self.name), record);
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of group-name records observed so far.
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// Consumes the tracker and returns the final name.
    pub fn into_name(self) -> String {
        self.name
    }
}
