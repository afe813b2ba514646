//! Errors raised by state lifecycle hooks.

use std::error::Error as StdError;
use thiserror::Error;

/// Result returned by [`State::on_enter`](super::State::on_enter) and
/// [`State::on_exit`](super::State::on_exit).
pub type HookResult = Result<(), HookError>;

/// Failure reported by a state's enter or exit hook.
///
/// The machine never inspects or wraps these; whatever a hook returns is
/// handed back to the caller of the operation that fired it.
#[derive(Debug, Error)]
pub enum HookError {
    /// Hook rejected with a plain reason
    #[error("{0}")]
    Message(String),

    /// Hook failed because of an underlying error
    #[error("hook failed: {0}")]
    Source(#[source] Box<dyn StdError + Send + Sync>),
}

impl HookError {
    /// Create an error from a plain reason.
    pub fn msg(reason: impl Into<String>) -> Self {
        Self::Message(reason.into())
    }

    /// Create an error carrying an underlying cause.
    pub fn from_source<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Source(Box::new(source))
    }
}
