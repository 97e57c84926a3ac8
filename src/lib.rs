//! chanwatch - in-memory state tracking for chat automation agents.
//!
//! Two independent components, wired together by the hosting agent:
//!
//! - [`HistoryStore`]: a bounded window of recently observed messages per
//!   conversation, so later deletion and moderation events can be correlated
//!   against what was actually seen.
//! - [`EventCounter`]: occurrence counts for named platform events, with
//!   top-N ranking and exact lookup.
//!
//! Both are synchronous, in-memory, and safe to share across threads behind
//! an `Arc`. Nothing here persists across restarts or touches the network;
//! the hosting agent owns the platform connection and feeds notifications in.

pub mod config;
pub mod error;
pub mod events;
pub mod history;

pub use config::CoreConfig;
pub use error::{ConfigError, QueueError};
pub use events::EventCounter;
pub use history::{BoundedHistoryQueue, HistoryEntry, HistoryStore, StoreStats};
