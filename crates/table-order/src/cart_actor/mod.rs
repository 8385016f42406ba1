//! # Cart Actor
//!
//! One actor holds every open cart, keyed by [`CartId`](crate::model::CartId). Each cart
//! is one customer session; nothing is shared between carts.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor is started with a [`CartContext`] holding the catalog and order feed clients:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(CartContext { catalog, orders }));
//! ```
//!
//! The catalog is only read, once per add, to copy the item into the cart line. Later
//! catalog edits do not reach lines that are already in a cart.
//!
//! Checkout submits to the feed from inside the cart's queue and closes the cart in the
//! same step, so an add racing a checkout either makes it into the order or fails with
//! `NotFound`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{CartContext, DEFAULT_TABLE, WALK_IN_CUSTOMER};
pub use error::*;

use crate::model::Cart;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
