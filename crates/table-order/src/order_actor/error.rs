//! Error types for the Order actor.

use thiserror::Error;

use crate::cart_actor::CartError;
use crate::model::OrderStatus;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order is not on the feed: it never existed or was evicted.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Submission was attempted with no lines. No order was created.
    #[error("Cannot submit an empty cart")]
    EmptyCart,

    /// The requested status change is not a lifecycle step from the current status.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The cart being submitted could not be checked out.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
