//! Bounded emotional history.
//!
//! A FIFO ring of post-transition snapshots. The ring never grows past
//! its configured capacity; the oldest entry is evicted first.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::AffectState;

/// Retained prefix of the triggering message, in chars (not bytes), so
/// multibyte text truncates cleanly.
pub const INPUT_SNIPPET_CHARS: usize = 100;

/// One recorded interaction: when it happened, the affect state right
/// after the transition, and a prefix of the message that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub state: AffectState,
    pub input: String,
}

impl HistoryEntry {
    /// Build an entry, truncating `input` to [`INPUT_SNIPPET_CHARS`].
    pub fn new(timestamp: DateTime<Utc>, state: AffectState, input: &str) -> Self {
        let input = match input.char_indices().nth(INPUT_SNIPPET_CHARS) {
            Some((byte_idx, _)) => input[..byte_idx].to_string(),
            None => input.to_string(),
        };
        Self {
            timestamp,
            state,
            input,
        }
    }
}

/// FIFO ring buffer of [`HistoryEntry`] values.
#[derive(Debug, Clone)]
pub struct EmotionalHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl EmotionalHistory {
    /// Create an empty history. `capacity` must be at least 1, which
    /// engine construction guarantees via config validation.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(128)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest once past capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}

// ============================================================================
// Tests
// ============================================================================
