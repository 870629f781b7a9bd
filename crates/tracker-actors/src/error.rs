//! # Runtime Errors
//!
//! Errors produced by the actor runtime itself. Failures raised by an entity's own
//! hooks travel inside [`FrameworkError::Entity`] with their concrete type intact,
//! so callers can match on them instead of parsing strings.

/// Errors that can occur while talking to a `ResourceActor`.
///
/// `E` is the entity's error type (`ActorEntity::Error`).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Another stored item already owns the same unique key.
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error(transparent)]
    Entity(E),
}

impl<E> FrameworkError<E> {
    /// Returns `true` for failures of the channel plumbing rather than of the request.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
