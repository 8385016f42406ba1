//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `delete`
//! and `len` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply [`ActorClient::map_error`], which turns a transport-level
/// [`FrameworkError`] into the resource's own error type. The usual shape is to
/// [`downcast_entity`](FrameworkError::downcast_entity) first, so that a validation error
/// raised inside the entity reaches the caller unchanged.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Seat { id: u64 }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug)] struct SeatUpdate;
/// #[derive(Debug)] enum SeatAction {}
/// #[derive(Debug)] struct SeatError(String);
///
/// impl std::fmt::Display for SeatError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for SeatError {}
///
/// impl From<String> for SeatError {
///     fn from(s: String) -> Self { SeatError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u64;
///     type Create = SeatCreate;
///     type Update = SeatUpdate;
///     type Action = SeatAction;
///     type ActionResult = ();
///     type Filter = ();
///     type Context = ();
///     type Error = SeatError;
///
///     fn from_create_params(id: u64, _: SeatCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SeatClient {
///     inner: ResourceClient<Seat>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///
///     fn inner(&self) -> &ResourceClient<Seat> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.downcast_entity::<SeatError>()
///             .unwrap_or_else(|other| SeatError(other.to_string()))
///     }
/// }
///
/// async fn usage(client: SeatClient) {
///     // get(), delete() and len() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
///     let _ = client.len().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Number of entities currently held by the actor.
    #[tracing::instrument(skip(self))]
    async fn len(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }
}
