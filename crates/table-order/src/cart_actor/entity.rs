//! ActorEntity trait implementation for the Cart domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Cart`] to be managed by the generic [`resource_actor::ResourceActor`].
//!
//! The cart actor runs with a [`CartContext`]. [`CartAction::AddFromCatalog`] reads the
//! catalog through it to take the item snapshot, and [`CartAction::Checkout`] submits to
//! the order feed through it.

use std::convert::Infallible;

use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::{debug, info};

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::{CatalogClient, OrderFeedClient};
use crate::model::{Cart, CartCreate, CartId, OrderCreate};
use crate::order_actor::OrderError;

/// What the cart actor reaches outside itself.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: CatalogClient,
    pub orders: OrderFeedClient,
}

/// Customer shown when a cart is opened without a name.
pub const WALK_IN_CUSTOMER: &str = "Table Guest";

/// Table used when a cart is opened without one.
pub const DEFAULT_TABLE: &str = "1";

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Filter = ();
    type Context = CartContext;
    type Error = CartError;

    /// Opens an empty cart for the session.
    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(
            id,
            or_default(&params.customer_name, WALK_IN_CUSTOMER),
            or_default(&params.table, DEFAULT_TABLE),
        ))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &CartContext) -> Result<(), Self::Error> {
        match update {}
    }

    /// Handles custom actions for the Cart entity.
    ///
    /// # Actions
    /// - `AddItem` / `AddFromCatalog`: merge one unit into the cart
    /// - `Remove`: drop a whole line
    /// - `Total`, `ItemCount`, `Lines`: reads, computed fresh on every call
    /// - `Checkout`: submits the lines as an order; the actor then closes the cart
    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem(item) => Ok(CartActionResult::AddItem(self.add(&item).clone())),
            CartAction::AddFromCatalog(item_id) => {
                let item = ctx
                    .catalog
                    .get(item_id)
                    .await?
                    .ok_or_else(|| CartError::ItemNotFound(item_id.to_string()))?;
                debug!(cart = %self.id, item = %item.id, price = %item.price, "Snapshot taken");
                Ok(CartActionResult::AddFromCatalog(self.add(&item).clone()))
            }
            CartAction::Remove(item_id) => self
                .remove(item_id)
                .map(CartActionResult::Remove)
                .ok_or_else(|| CartError::LineNotFound(item_id.to_string())),
            CartAction::Total => Ok(CartActionResult::Total(self.total())),
            CartAction::ItemCount => Ok(CartActionResult::ItemCount(self.item_count())),
            CartAction::Lines => Ok(CartActionResult::Lines(self.lines().to_vec())),
            CartAction::Checkout => {
                if self.is_empty() {
                    return Err(OrderError::EmptyCart.into());
                }
                let order = ctx.orders.submit(OrderCreate::from_cart(self)).await?;
                info!(cart = %self.id, order = %order.id, total = %order.total(), "Checked out");
                Ok(CartActionResult::Checkout(order))
            }
        }
    }

    fn action_mutates(action: &CartAction) -> bool {
        action.mutates()
    }

    fn action_retires(action: &CartAction) -> bool {
        action.closes_cart()
    }
}
