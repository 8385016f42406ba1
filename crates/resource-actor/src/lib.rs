//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent actor systems on Tokio. Each actor owns one
//! collection of resources and serves standard CRUD requests, resource-specific actions,
//! and collection queries through a single queue.
//!
//! ## Why one actor per resource collection?
//!
//! - Isolated state: the store is owned by one task, so there are no locks
//! - Message passing: callers hold a cheap, cloneable client
//! - Sequential processing: every mutation on a collection is mutually exclusive with every
//!   other one, including mutations coming from timers or background tasks
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your business rules and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, id assignment, capacity,
//!    change notification
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! An actor whose entities need to read another actor gets that actor's client as its
//! `Context`:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog) = ResourceActor::<CatalogItem>::new(32);
//! let (cart_actor, carts) = ResourceActor::<Cart>::new(32);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(cart_actor.run(catalog.clone()));
//! ```
//!
//! ## Change Notification
//!
//! Every committed mutation is published as a [`ResourceEvent`] on a broadcast channel.
//! Presentation code subscribes with [`ResourceClient::subscribe`] and re-reads whatever it
//! displays; it never needs to poll.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from scripted expectations so you can test
//! a client wrapper, or an actor whose context holds another client, without spawning the
//! dependency.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ListOrder, ResourceEvent, ResourceRequest, Response};
