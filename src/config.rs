//! Core tuning knobs.
//!
//! The hosting agent owns config file loading; this struct only needs to
//! deserialize from whatever table the host embeds it in.

use serde::Deserialize;

use crate::error::ConfigError;

/// Tuning for the tracking core.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// How many messages to retain per conversation.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Default `n` for event ranking queries when the caller gives none.
    #[serde(default = "default_top_events")]
    pub top_events: usize,
}

impl CoreConfig {
    /// Check invariants the types cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.top_events == 0 {
            return Err(ConfigError::ZeroTopEvents);
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            top_events: default_top_events(),
        }
    }
}

fn default_history_capacity() -> usize {
    100
}

fn default_top_events() -> usize {
    5
}
