//! Custom actions for the Order actor.
//!
//! Kitchen staff can only move an order along its lifecycle. There is no update DTO, so
//! this is the only way a stored order changes.

use crate::model::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves the order to the given status.
    ///
    /// # Errors
    /// Fails with `InvalidTransition` unless the target is the next lifecycle step.
    Transition(OrderStatus),
}
