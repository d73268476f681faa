//! State access errors

use thiserror::Error;

/// Failures while reading or updating shared state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to lock {what}: {reason}")]
    LockPoisoned { what: &'static str, reason: String },
}

impl StateError {
    pub(crate) fn poisoned(what: &'static str, err: impl std::fmt::Display) -> Self {
        StateError::LockPoisoned {
            what,
            reason: err.to_string(),
        }
    }
}
