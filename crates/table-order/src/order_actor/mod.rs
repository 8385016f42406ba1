//! # Order Actor
//!
//! The kitchen's order feed: a capacity-bounded actor holding the orders currently on
//! display, newest first.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`], the status transition
//! - [`lifecycle`] - the `Pending -> Preparing -> Ready` rules on [`OrderStatus`](crate::model::OrderStatus)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Capacity
//!
//! The feed shows at most [`FEED_CAPACITY`] orders. Submitting one more evicts the oldest
//! without archiving it; an evicted order can no longer be transitioned. Submissions from
//! customers and from the [arrival simulator](crate::simulator) share the same create
//! request, so both are held to the same rules.

pub mod actions;
pub mod entity;
pub mod error;
pub mod lifecycle;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Orders visible on the kitchen feed at once.
pub const FEED_CAPACITY: usize = 5;

/// Creates a new Order actor and its client, holding at most `capacity` orders.
pub fn new(buffer_size: usize, capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::with_capacity(buffer_size, capacity)
}
