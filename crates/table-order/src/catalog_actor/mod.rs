//! # Catalog Actor
//!
//! This module implements the catalog resource actor: the menu the diners browse and the
//! staff curate.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`CatalogItem`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`seed`] - the house menu
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use table_order::catalog_actor;
//! use table_order::clients::CatalogClient;
//! use table_order::model::{CatalogFilter, CatalogItemCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(32);
//!     let client = CatalogClient::new(generic_client);
//!
//!     // The catalog has no dependencies
//!     tokio::spawn(actor.run(()));
//!
//!     let tart = client
//!         .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
//!         .await?;
//!     let found = client.list(CatalogFilter::query("tart")).await?;
//!     assert_eq!(found[0].id, tart.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Validated forms**: price text is parsed into a `Decimal`, empty fields are rejected
//! - **Stable ids**: a deleted item's id is never handed out again
//! - **Filtering in the actor**: [`CatalogFilter`](crate::model::CatalogFilter) is applied
//!   by the list request, in insertion order

pub mod entity;
pub mod error;
pub mod seed;

pub use entity::parse_price;
pub use error::*;
pub use seed::seed_menu;

use crate::model::CatalogItem;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CatalogItem>, ResourceClient<CatalogItem>) {
    ResourceActor::new(buffer_size)
}
