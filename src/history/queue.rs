//! Fixed-capacity FIFO window over one conversation's messages.

use std::collections::VecDeque;

use crate::error::QueueError;

/// A message observed on the platform, reduced to what deletion
/// correlation needs.
///
/// `id` is the platform-assigned snowflake: time-ordered and monotonically
/// increasing within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u64,
    pub author_id: u64,
}

/// The retained window for one conversation: up to `capacity` entries,
/// oldest first.
///
/// Eviction is explicit and caller-driven. A push on a full queue is an
/// error rather than a silent overwrite, so that the store's
/// evict-then-push sequencing stays visible and mis-sequencing is caught
/// instead of corrupting the window.
///
/// Entries stay in non-decreasing `id` order because insertion order
/// coincides with arrival order and snowflakes are monotonic per
/// conversation.
#[derive(Debug)]
pub struct BoundedHistoryQueue {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl BoundedHistoryQueue {
    /// Create an empty queue. `capacity` must be positive; the store
    /// validates this via config before any queue exists.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append at the tail.
    pub fn push(&mut self, entry: HistoryEntry) -> Result<(), QueueError> {
        if self.entries.len() >= self.capacity {
            return Err(QueueError::CapacityExceeded { capacity: self.capacity });
        }
        self.entries.push_back(entry);
        Ok(())
    }

    /// Remove and return the oldest entry.
    pub fn evict_oldest(&mut self) -> Result<HistoryEntry, QueueError> {
        self.entries.pop_front().ok_or(QueueError::Empty)
    }

    /// The oldest retained entry, if any.
    pub fn peek_oldest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Drop every entry whose id matches the removal predicate, preserving
    /// the relative order of the rest.
    ///
    /// Deletions are rare next to inserts and the window is small, so a
    /// linear rebuild keeps the ordering invariant trivially intact.
    /// Returns how many entries were removed.
    pub fn remove_where(&mut self, doomed: impl Fn(u64) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !doomed(entry.id));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate the retained entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
