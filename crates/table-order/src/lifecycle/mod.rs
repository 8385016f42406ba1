//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors behind the ordering system.
//!
//! ## Wiring
//!
//! ```text
//! CatalogItem actor  <--reads--  Cart actor
//!                                   |
//!                          checkout (inside the cart's queue)
//!                                   v
//!                              Order actor  <--submit_if_room--  ArrivalSimulator
//! ```
//!
//! Actors are created first and receive their dependencies through `run(context)`. Only
//! the cart actor has any: a [`CartContext`](crate::cart_actor::CartContext) with the
//! catalog client, used to snapshot items at add time, and the order feed client, used by
//! checkout. The order actor never calls back into carts, so it needs no context.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - dependents first, since the cart actor's context keeps the
//!    catalog and order actors alive until the cart actor exits
//!
//! ## Observability
//!
//! The binary calls [`resource_actor::tracing::setup_tracing`] once; every actor and
//! client logs through `tracing`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod table_system;

pub use table_system::*;
