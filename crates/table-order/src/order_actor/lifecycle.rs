//! Status rules for orders.
//!
//! `Pending -> Preparing -> Ready`, one step at a time, forwards only. `Ready` is terminal.
//! The rules are stateless; the order actor applies them to the order it owns.

use super::error::OrderError;
use crate::model::OrderStatus;

impl OrderStatus {
    /// The single status reachable from this one, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }

    /// Validates a move to `target` and returns it.
    pub fn transition(self, target: OrderStatus) -> Result<OrderStatus, OrderError> {
        match self.next() {
            Some(next) if next == target => Ok(target),
            _ => Err(OrderError::InvalidTransition {
                from: self,
                to: target,
            }),
        }
    }

    /// Label of the button the kitchen offers for this status.
    pub fn staff_action(self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}
