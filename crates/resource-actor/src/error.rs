//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor runtime.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`] so that
//! domain clients can recover their own typed error with
//! [`FrameworkError::downcast_entity`].

use std::error::Error;

/// Errors that can occur within the actor runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Any other variant, or an entity error of a different type, is handed back
    /// unchanged in `Err` so the caller can map it as a transport failure.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
