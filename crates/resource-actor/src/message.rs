//! # Generic Messages
//!
//! This module defines the request and event types exchanged between the
//! `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Iteration order for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest entity first (the order in which they were created).
    Insertion,
    /// Newest entity first.
    MostRecentFirst,
}

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto CRUD operations plus `Action` for resource-specific logic,
/// and two read-only queries over the whole collection (`List`, `Len`).
///
/// This type is generic over `T: ActorEntity`, so a catalog `Create` payload can never be
/// sent to the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Like `Create`, but answers `None` instead of evicting when the actor is at capacity.
    CreateIfRoom {
        params: T::Create,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        filter: T::Filter,
        order: ListOrder,
        respond_to: Response<Vec<T>>,
    },
    Len {
        respond_to: Response<usize>,
    },
}

/// Change notification published by a `ResourceActor` after a successful mutation.
///
/// Subscribers get these through [`ResourceClient::subscribe`](crate::ResourceClient::subscribe).
/// Rejected operations publish nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent<Id> {
    Created(Id),
    Updated(Id),
    Deleted(Id),
    /// Dropped to stay within the actor's capacity.
    Evicted(Id),
    ActionApplied(Id),
}

impl<Id> ResourceEvent<Id> {
    /// The id of the entity this event is about.
    pub fn id(&self) -> &Id {
        match self {
            ResourceEvent::Created(id)
            | ResourceEvent::Updated(id)
            | ResourceEvent::Deleted(id)
            | ResourceEvent::Evicted(id)
            | ResourceEvent::ActionApplied(id) => id,
        }
    }
}
