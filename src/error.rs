//! Error types for the tracking core.
//!
//! Absent conversations and never-seen event names are not errors: those
//! queries return empty/zero defaults. The errors here are caller-contract
//! violations (mis-sequenced queue operations) and config validation
//! failures, and both should be surfaced loudly rather than swallowed.

use thiserror::Error;

/// Errors from bounded-queue operations.
///
/// Both variants indicate the caller broke the eviction contract: eviction
/// is explicit and caller-driven, so an evict on an empty queue or a push
/// on a full one means the coordinating layer is misusing the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("cannot evict from an empty queue")]
    Empty,

    #[error("queue is at capacity ({capacity}); evict before pushing")]
    CapacityExceeded { capacity: usize },
}

impl QueueError {
    /// Static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_queue",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("history_capacity must be greater than zero")]
    ZeroCapacity,

    #[error("top_events must be greater than zero")]
    ZeroTopEvents,
}
