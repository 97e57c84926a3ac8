//! Shared store of per-conversation history windows.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::CoreConfig;
use crate::error::{ConfigError, QueueError};

use super::queue::{BoundedHistoryQueue, HistoryEntry};

/// A consistent point-in-time view of the store, for administrative
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Conversations with at least one retained message.
    pub conversations: usize,
    /// Sum of all window sizes.
    pub total_messages: usize,
}

/// All per-conversation windows, keyed by conversation id.
///
/// One exclusive lock guards the whole map. Every operation holds it for
/// its full duration, so mutations never interleave mid-rebuild and
/// [`stats`](HistoryStore::stats) always observes a single logical point
/// in time. Per-conversation ordering of notifications is the caller's
/// contract; the store does not reorder.
pub struct HistoryStore {
    capacity: usize,
    queues: Mutex<HashMap<u64, BoundedHistoryQueue>>,
}

impl HistoryStore {
    /// Create an empty store whose windows hold `capacity` messages each.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queues: Mutex::new(HashMap::new()),
        }
    }

    /// Create a store from validated config.
    pub fn from_config(config: &CoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.history_capacity))
    }

    /// The configured per-conversation window size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record an observed message, creating the conversation's window on
    /// first sight and evicting its oldest entry when full.
    ///
    /// An error here means an internal sequencing invariant broke and
    /// should be surfaced as a programming-error-level failure, not
    /// retried.
    pub fn record_message(&self, conversation: u64, entry: HistoryEntry) -> Result<(), QueueError> {
        let mut queues = self.queues.lock();
        let queue = queues.entry(conversation).or_insert_with(|| {
            debug!(conversation, capacity = self.capacity, "tracking new conversation");
            BoundedHistoryQueue::new(self.capacity)
        });
        if queue.is_full() {
            let evicted = queue.evict_oldest()?;
            trace!(conversation, id = evicted.id, "evicted oldest retained message");
        }
        queue.push(entry)?;
        trace!(conversation, id = entry.id, author = entry.author_id, "recorded message");
        Ok(())
    }

    /// Apply a single-message-delete notification. No-op when the
    /// conversation is untracked, its window is empty, or the id was never
    /// retained.
    ///
    /// Fast path: snowflakes are monotonic per conversation, so an id
    /// below the oldest retained one left the window long ago and the
    /// rebuild is skipped outright. If the platform ever stops
    /// guaranteeing monotonic ids this early return must go and every
    /// delete falls through to the rebuild.
    pub fn remove_message(&self, conversation: u64, id: u64) {
        let mut queues = self.queues.lock();
        let Some(queue) = queues.get_mut(&conversation) else {
            return;
        };
        let Some(oldest) = queue.peek_oldest().map(|e| e.id) else {
            return;
        };
        if id < oldest {
            trace!(conversation, id, "delete target already outside window");
            return;
        }
        let removed = queue.remove_where(|retained| retained == id);
        if removed > 0 {
            debug!(conversation, id, "removed deleted message from window");
        }
    }

    /// Apply a bulk-delete notification: drop every retained entry whose
    /// id is in `ids`. Same no-op conditions as [`remove_message`](Self::remove_message).
    pub fn remove_messages(&self, conversation: u64, ids: &HashSet<u64>) {
        let mut queues = self.queues.lock();
        let Some(queue) = queues.get_mut(&conversation) else {
            return;
        };
        if queue.is_empty() {
            return;
        }
        let removed = queue.remove_where(|retained| ids.contains(&retained));
        if removed > 0 {
            debug!(conversation, removed, "removed bulk-deleted messages from window");
        }
    }

    /// Forget a conversation entirely, discarding its window.
    ///
    /// Called on conversation-deletion notifications. For a container
    /// (guild/workspace) deletion the caller enumerates the contained
    /// conversations and calls this once per key. Returns whether the
    /// conversation was tracked.
    pub fn drop_conversation(&self, conversation: u64) -> bool {
        let dropped = self.queues.lock().remove(&conversation);
        if let Some(queue) = &dropped {
            debug!(conversation, discarded = queue.len(), "dropped conversation");
        }
        dropped.is_some()
    }

    /// Aggregate counts across all windows, consistent at one logical
    /// point in time.
    pub fn stats(&self) -> StoreStats {
        let queues = self.queues.lock();
        StoreStats {
            conversations: queues.len(),
            total_messages: queues.values().map(BoundedHistoryQueue::len).sum(),
        }
    }

    /// Ids of retained messages by `author`, oldest first. Empty when the
    /// conversation is untracked.
    ///
    /// This is how the agent finds its own previous messages to build a
    /// moderated-cleanup deletion batch.
    pub fn messages_by_author(&self, conversation: u64, author: u64) -> Vec<u64> {
        let queues = self.queues.lock();
        match queues.get(&conversation) {
            Some(queue) => queue
                .iter()
                .filter(|e| e.author_id == author)
                .map(|e| e.id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// All retained ids for one conversation, oldest first.
    pub fn retained_ids(&self, conversation: u64) -> Vec<u64> {
        let queues = self.queues.lock();
        match queues.get(&conversation) {
            Some(queue) => queue.iter().map(|e| e.id).collect(),
            None => Vec::new(),
        }
    }
}
