//! Error types for playback.
//!
//! Most of what can go wrong during playback is a degraded state rather than
//! an error: a missing start flag falls back, an empty graph renders as
//! empty content, a dangling edge becomes a transient notice. Only calls
//! that violate the session's own contract surface here.

use loom_core::ChoiceId;
use thiserror::Error;

/// Result type for playback operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur when driving a play session.
#[derive(Debug, Error)]
pub enum PlayError {
    /// `choose` was called while not at a location (not started, ended, or
    /// empty content).
    #[error("no choice can be made right now")]
    NotAtLocation,

    /// The selected choice is not in the currently offered list — it does
    /// not exist at the current location or its item gate is unmet.
    #[error("choice not offered: {0}")]
    ChoiceNotOffered(ChoiceId),
}
