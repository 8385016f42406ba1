//! # Table Order
//!
//! The order and cart engine of a table-ordering app: diners browse a catalog and fill a
//! cart, the cart becomes an immutable order, and kitchen staff move orders through
//! `Pending -> Preparing -> Ready` on a feed that also receives simulated arrivals.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`CatalogItem`](model::CatalogItem), [`Cart`](model::Cart), [`Order`](model::Order)) that implement the `ActorEntity` trait.
//! - **[catalog_actor], [cart_actor], [order_actor]**: the entity implementations, errors and actions per resource.
//! - **[clients]**: Type-safe wrappers (e.g., [`CartClient`](clients::CartClient)) that hide the message passing.
//! - **[simulator]**: the cancellable arrival generator behind the kitchen view.
//! - **[lifecycle]**: [`TableOrderSystem`](lifecycle::TableOrderSystem), which starts and stops everything.
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning full actors.

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod display;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod simulator;
