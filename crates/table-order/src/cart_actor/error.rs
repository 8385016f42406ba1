//! Error types for the Cart actor.

use thiserror::Error;

use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart does not exist, or was already submitted or abandoned.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// Remove was asked for an item that has no line in the cart.
    #[error("No line for {0} in cart")]
    LineNotFound(String),

    /// The catalog has no item with this id.
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    /// The catalog lookup itself failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Checkout was refused: the cart was empty or the feed rejected the order.
    #[error(transparent)]
    Checkout(Box<OrderError>),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<OrderError> for CartError {
    fn from(err: OrderError) -> Self {
        CartError::Checkout(Box::new(err))
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
