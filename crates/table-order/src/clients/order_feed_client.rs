//! # Order Feed Client
//!
//! Provides a high‑level API for the kitchen feed. Customer orders enter through
//! [`OrderFeedClient::submit`] and may evict the oldest order; simulated arrivals enter
//! through [`OrderFeedClient::submit_if_room`] and never do.
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{CartId, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use resource_actor::{ActorClient, FrameworkError, ListOrder, ResourceClient, ResourceEvent};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderFeedClient {
    inner: ResourceClient<Order>,
    capacity: usize,
}

impl OrderFeedClient {
    /// Wraps the client of an order actor started with `capacity`.
    pub fn new(inner: ResourceClient<Order>, capacity: usize) -> Self {
        Self { inner, capacity }
    }

    /// Most orders the feed shows at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl ActorClient<Order> for OrderFeedClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderFeedClient {
    /// Puts a new `Pending` order at the top of the feed, evicting the oldest if the feed
    /// is full. Fails with `EmptyCart` if there are no lines.
    #[instrument(skip(self, order), fields(customer = %order.customer_name, table = %order.table))]
    pub async fn submit(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Like [`submit`](Self::submit), but only while the feed is below capacity. A full
    /// feed answers `Ok(None)` and nothing is evicted. The room check and the insert are
    /// one actor step.
    #[instrument(skip(self, order), fields(customer = %order.customer_name, table = %order.table))]
    pub async fn submit_if_room(&self, order: OrderCreate) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.inner.create_if_room(order).await.map_err(Self::map_error)
    }

    /// Turns a cart into an order and discards the cart.
    ///
    /// The cart actor does the submission through its own feed client, in the same step
    /// that closes the cart, so a cart becomes at most one order. An empty cart fails
    /// with `EmptyCart` before the feed is touched, and the cart is kept so the customer
    /// can carry on.
    #[instrument(skip(self, carts))]
    pub async fn submit_cart(&self, carts: &CartClient, cart_id: CartId) -> Result<Order, OrderError> {
        let order = carts.checkout(cart_id).await.map_err(|e| match e {
            CartError::Checkout(err) => *err,
            other => OrderError::Cart(other),
        })?;
        debug!(order = %order.id, cart = %cart_id, "Cart submitted");
        Ok(order)
    }

    /// Moves an order to `target`. Fails with `NotFound` if the order is no longer on the
    /// feed and `InvalidTransition` if `target` is not its next status.
    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, target: OrderStatus) -> Result<Order, OrderError> {
        self.inner
            .perform_action(id, OrderAction::Transition(target))
            .await
            .map_err(Self::map_error)
    }

    /// "Start Preparing".
    pub async fn start_preparing(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderStatus::Preparing).await
    }

    /// "Mark Ready".
    pub async fn mark_ready(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderStatus::Ready).await
    }

    /// The visible orders, most recent first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list((), ListOrder::MostRecentFirst)
            .await
            .map_err(Self::map_error)
    }

    /// Change notifications for the feed, evictions included.
    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<OrderId>> {
        self.inner.subscribe()
    }
}
