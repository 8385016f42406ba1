//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ListOrder, ResourceEvent, ResourceRequest};
use tokio::sync::{broadcast, mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a
/// `ResourceActor<T>`. It forwards requests over a Tokio mpsc channel and returns results via
/// oneshot channels. The client is cheap to clone and can be shared across tasks.
///
/// * **Cloneable** – holds only channel senders.
/// * **Async API** – all methods resolve to `Result<…, FrameworkError>`.
/// * **Observable** – [`ResourceClient::subscribe`] yields the actor's change events.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    events: broadcast::Sender<ResourceEvent<T::Id>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        events: broadcast::Sender<ResourceEvent<T::Id>>,
    ) -> Self {
        Self { sender, events }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates an entity and returns it as stored, id included.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Creates an entity only if the actor has room for it. `Ok(None)` means the store
    /// was full and nothing was created or evicted.
    pub async fn create_if_room(&self, params: T::Create) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::CreateIfRoom { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn list(&self, filter: T::Filter, order: ListOrder) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter,
            order,
            respond_to,
        })
        .await
    }

    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Len { respond_to })
            .await
    }

    /// Registers for change notifications. Only events published after this call are seen.
    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<T::Id>> {
        self.events.subscribe()
    }
}
