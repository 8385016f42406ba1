//! # Domain Clients
//!
//! Typed wrappers around each actor's `ResourceClient`. They turn actions into plain
//! methods and map [`FrameworkError`](resource_actor::FrameworkError) back into the
//! actor's own error enum.

pub mod cart_client;
pub mod catalog_client;
pub mod order_feed_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use order_feed_client::OrderFeedClient;
