//! # Cart Client
//!
//! Provides a high‑level API for interacting with the cart actor.
//! It wraps a `ResourceClient<Cart>` and turns each [`CartAction`] into a typed method.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, CartLine, CatalogItem, ItemId, Order};
use resource_actor::{ActorClient, FrameworkError, ResourceClient, ResourceEvent};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Starts a session for a customer at a table. Empty fields fall back to the walk-in
    /// defaults.
    #[instrument(skip(self))]
    pub async fn open_cart(
        &self,
        customer_name: &str,
        table: &str,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        let params = CartCreate {
            customer_name: customer_name.to_string(),
            table: table.to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Adds one unit of an item the caller already fetched.
    ///
    /// Returns the line after the merge.
    #[instrument(skip(self, item), fields(item = %item.id))]
    pub async fn add_item(&self, id: CartId, item: CatalogItem) -> Result<CartLine, CartError> {
        match self.act(id, CartAction::AddItem(item)).await? {
            CartActionResult::AddItem(line) => Ok(line),
            _ => unreachable!("AddItem action must return AddItem result"),
        }
    }

    /// Adds one unit of a catalog item, read from the catalog by the cart actor.
    #[instrument(skip(self))]
    pub async fn add_from_catalog(&self, id: CartId, item_id: ItemId) -> Result<CartLine, CartError> {
        match self.act(id, CartAction::AddFromCatalog(item_id)).await? {
            CartActionResult::AddFromCatalog(line) => Ok(line),
            _ => unreachable!("AddFromCatalog action must return AddFromCatalog result"),
        }
    }

    /// Drops the whole line for `item_id`. Fails with `LineNotFound` if there is none.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, item_id: ItemId) -> Result<CartLine, CartError> {
        match self.act(id, CartAction::Remove(item_id)).await? {
            CartActionResult::Remove(line) => Ok(line),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn total(&self, id: CartId) -> Result<Decimal, CartError> {
        match self.act(id, CartAction::Total).await? {
            CartActionResult::Total(total) => Ok(total),
            _ => unreachable!("Total action must return Total result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn item_count(&self, id: CartId) -> Result<u32, CartError> {
        match self.act(id, CartAction::ItemCount).await? {
            CartActionResult::ItemCount(count) => Ok(count),
            _ => unreachable!("ItemCount action must return ItemCount result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn lines(&self, id: CartId) -> Result<Vec<CartLine>, CartError> {
        match self.act(id, CartAction::Lines).await? {
            CartActionResult::Lines(lines) => Ok(lines),
            _ => unreachable!("Lines action must return Lines result"),
        }
    }

    /// Submits the cart to the order feed and closes it.
    ///
    /// Runs as one step of the cart's queue. On any failure the cart stays open with its
    /// lines; on success every later request for it fails with `NotFound`.
    #[instrument(skip(self))]
    pub async fn checkout(&self, id: CartId) -> Result<Order, CartError> {
        match self.act(id, CartAction::Checkout).await? {
            CartActionResult::Checkout(order) => Ok(order),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }

    /// Ends the session without ordering.
    #[instrument(skip(self))]
    pub async fn abandon(&self, id: CartId) -> Result<(), CartError> {
        self.delete(id).await
    }

    /// Change notifications for every cart.
    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<CartId>> {
        self.inner.subscribe()
    }
}
