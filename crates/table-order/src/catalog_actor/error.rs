//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested item was not found.
    #[error("Catalog item not found: {0}")]
    NotFound(String),

    /// A field was missing or malformed. Nothing was changed.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
