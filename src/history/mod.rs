//! Bounded per-conversation message history.

mod queue;
mod store;

pub use queue::{BoundedHistoryQueue, HistoryEntry};
pub use store::{HistoryStore, StoreStats};
