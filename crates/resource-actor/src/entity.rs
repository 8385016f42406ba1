//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (catalog item, cart,
//! order, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, DTOs, actions, list filters, context, and errors, and provides
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]
//! - [`ActorEntity::action_mutates`]
//! - [`ActorEntity::action_retires`]
//!
//! You do **not** need to implement these unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource that a [`ResourceActor`](crate::ResourceActor) can own.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling
/// other actors). The `Context` type is injected into every hook, so dependencies are passed
/// to `run()` instead of `new()`.
///
/// # Atomicity
/// `on_update` and `handle_action` run against a draft copy of the entity. The draft only
/// replaces the stored value when the hook returns `Ok`, so a hook may bail out halfway
/// through without leaving a partial mutation behind.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Ids are minted from a counter that starts at 1 and never goes backwards. `Ord` must
    /// agree with the counter, because the store iterates in id order to give insertion
    /// order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Edit payload. Use `std::convert::Infallible` for resources that are never edited.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// What an action hands back to the caller.
    type ActionResult: Send + Sync + Debug;

    /// Criteria accepted by list requests. Use `()` when the resource is never filtered.
    type Filter: Send + Sync + Debug;

    /// Dependencies handed to `run()`, typically other actors' clients. `()` when there are none.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor, not one per message. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity for a freshly minted id, or rejects the payload.
    ///
    /// Runs before `on_create`. A rejection does not consume the id.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs once the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an edit to the draft copy.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal. An error keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Runs a resource-specific action against the draft copy.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Queries ---

    /// Whether this entity should appear in a list request carrying `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Whether `action` changes state. Read-only actions publish no change event.
    fn action_mutates(_action: &Self::Action) -> bool {
        true
    }

    /// Whether a successful `action` ends the entity's life.
    ///
    /// The actor removes a retired entity in the same step that ran the action and
    /// publishes `Deleted`, so later requests for it fail with `NotFound`. A failed action
    /// retires nothing.
    fn action_retires(_action: &Self::Action) -> bool {
        false
    }
}
