//! ActorEntity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`resource_actor::ResourceActor`].
//!
//! See the trait implementation on [`Order`] for method documentation.

use std::convert::Infallible;

use async_trait::async_trait;
use chrono::Local;
use resource_actor::ActorEntity;
use tracing::info;

use super::actions::OrderAction;
use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Order;
    type Filter = ();
    type Context = ();
    type Error = OrderError;

    /// Creates a `Pending` order stamped with the current local time.
    ///
    /// Fails with `EmptyCart` when there are no lines.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(Self {
            id,
            customer_name: params.customer_name,
            table: params.table,
            lines: params.lines,
            status: OrderStatus::Pending,
            created_at: Local::now(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    /// Applies a lifecycle transition and returns the order as it now stands.
    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Transition(target) => {
                let from = self.status;
                self.status = from.transition(target)?;
                info!(order = %self.id, %from, to = %self.status, "Status changed");
                Ok(self.clone())
            }
        }
    }
}
