//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of a
//! collection of entities. It implements the "Server" side of the Actor Model: one task,
//! one queue, messages processed strictly one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ListOrder, ResourceEvent, ResourceRequest};
use std::collections::BTreeMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Capacity of the change-notification channel. Slow subscribers see
/// `RecvError::Lagged` instead of blocking the actor.
const EVENT_BUFFER: usize = 64;

/// The generic actor that manages a collection of entities.
///
/// `ResourceActor<T>` owns the in‑memory store for an entity type `T: ActorEntity` and
/// processes all incoming `ResourceRequest<T>` messages sequentially. Since nothing else can
/// touch `store`, no `Mutex` or `RwLock` is needed: every mutation is mutually exclusive with
/// every other one by construction.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug)] struct NoteError;
///
/// impl std::fmt::Display for NoteError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
/// }
/// impl std::error::Error for NoteError {}
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Filter = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// * **Ids** come from a `u64` counter that starts at 1 and is never rewound, so an id
///   that was deleted or evicted is never handed out again.
/// * **Store** is a `BTreeMap` keyed by id. Because ids only grow, id order is creation
///   order; `ListOrder::MostRecentFirst` simply walks it backwards.
/// * **Capacity** (optional) bounds the store. After a create pushes it over the limit the
///   oldest entries are evicted silently and an `Evicted` event is published.
/// * **Drafts**: `Update` and `Action` run the entity hook on a clone and commit it only on
///   success, so a failed hook leaves the stored entity untouched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    events: broadcast::Sender<ResourceEvent<T::Id>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
    capacity: Option<usize>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new unbounded `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        let actor = Self {
            receiver,
            events: events.clone(),
            store: BTreeMap::new(),
            next_id: 1,
            capacity: None,
        };
        let client = ResourceClient::new(sender, events);
        (actor, client)
    }

    /// Creates a `ResourceActor` that holds at most `capacity` entities, evicting the
    /// oldest when a create would exceed it.
    pub fn with_capacity(buffer_size: usize, capacity: usize) -> (Self, ResourceClient<T>) {
        let (mut actor, client) = Self::new(buffer_size);
        actor.capacity = Some(capacity);
        (actor, client)
    }

    fn publish(&self, event: ResourceEvent<T::Id>) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    fn evict_overflow(&mut self, entity_type: &str) {
        let Some(capacity) = self.capacity else {
            return;
        };
        while self.store.len() > capacity {
            let Some((id, _)) = self.store.pop_first() else {
                break;
            };
            info!(entity_type, %id, capacity, "Evicted");
            self.publish(ResourceEvent::Evicted(id));
        }
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.store.len() >= capacity)
    }

    /// Builds, stores and announces a new entity. Both create requests go through here.
    async fn insert_new(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        // Only a committed create consumes an id.
        self.next_id += 1;
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        self.publish(ResourceEvent::Created(id));
        self.evict_overflow(entity_type);
        Ok(item)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "table_order::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, capacity = ?self.capacity, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let created = self.insert_new(params, &context, entity_type).await;
                    let _ = respond_to.send(created);
                }
                ResourceRequest::CreateIfRoom { params, respond_to } => {
                    debug!(entity_type, ?params, "CreateIfRoom");
                    if self.is_full() {
                        debug!(entity_type, size = self.store.len(), "Full, nothing created");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    }
                    let created = self.insert_new(params, &context, entity_type).await;
                    let _ = respond_to.send(created.map(Some));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = item.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = draft.clone();
                    info!(entity_type, %id, "Updated");
                    self.publish(ResourceEvent::Updated(id));
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish(ResourceEvent::Deleted(id));
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mutates = T::action_mutates(&action);
                    let retires = T::action_retires(&action);
                    let mut draft = item.clone();
                    match draft.handle_action(action, &context).await {
                        Ok(result) => {
                            if retires {
                                self.store.remove(&id);
                                info!(entity_type, %id, size = self.store.len(), "Retired");
                                self.publish(ResourceEvent::Deleted(id));
                            } else if mutates {
                                *item = draft;
                                info!(entity_type, %id, "Action ok");
                                self.publish(ResourceEvent::ActionApplied(id));
                            } else {
                                debug!(entity_type, %id, "Query ok");
                            }
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List {
                    filter,
                    order,
                    respond_to,
                } => {
                    let matching = self.store.values().filter(|item| item.matches(&filter));
                    let items: Vec<T> = match order {
                        ListOrder::Insertion => matching.cloned().collect(),
                        ListOrder::MostRecentFirst => matching.rev().cloned().collect(),
                    };
                    debug!(entity_type, ?filter, ?order, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u64,
        label: String,
        punched: u32,
    }

    #[derive(Debug)]
    struct TicketCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TicketUpdate {
        label: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Punch,
        /// Punches, then fails: the punch must not stick.
        PunchThenFail,
        Peek,
        /// Punches and uses the ticket up. Refused before the first punch.
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("ticket error: {0}")]
    struct TicketError(String);

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = u64;
        type Create = TicketCreate;
        type Update = TicketUpdate;
        type Action = TicketAction;
        type ActionResult = u32;
        type Filter = Option<String>;
        type Context = ();
        type Error = TicketError;

        fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
            if params.label.is_empty() {
                return Err(TicketError("empty label".into()));
            }
            Ok(Self {
                id,
                label: params.label,
                punched: 0,
            })
        }

        async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
            self.label = update.label;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: TicketAction,
            _ctx: &(),
        ) -> Result<u32, Self::Error> {
            match action {
                TicketAction::Punch => {
                    self.punched += 1;
                    Ok(self.punched)
                }
                TicketAction::PunchThenFail => {
                    self.punched += 1;
                    Err(TicketError("jammed".into()))
                }
                TicketAction::Peek => Ok(self.punched),
                TicketAction::Redeem if self.punched == 0 => Err(TicketError("unpunched".into())),
                TicketAction::Redeem => {
                    self.punched += 1;
                    Ok(self.punched)
                }
            }
        }

        fn matches(&self, filter: &Option<String>) -> bool {
            filter.as_ref().map_or(true, |label| &self.label == label)
        }

        fn action_mutates(action: &TicketAction) -> bool {
            !matches!(action, TicketAction::Peek)
        }

        fn action_retires(action: &TicketAction) -> bool {
            matches!(action, TicketAction::Redeem)
        }
    }

    fn create(label: &str) -> TicketCreate {
        TicketCreate {
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));

        let first = client.create(create("a")).await.unwrap();
        let second = client.create(create("b")).await.unwrap();
        client.delete(second.id).await.unwrap();

        // A rejected create does not burn an id either.
        assert!(client.create(create("")).await.is_err());

        let third = client.create(create("c")).await.unwrap();
        assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest_first() {
        let (actor, client) = ResourceActor::<Ticket>::with_capacity(10, 2);
        tokio::spawn(actor.run(()));
        let mut events = client.subscribe();

        for label in ["a", "b", "c"] {
            client.create(create(label)).await.unwrap();
        }

        let recent: Vec<u64> = client
            .list(None, ListOrder::MostRecentFirst)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(recent, vec![3, 2]);
        assert_eq!(client.len().await.unwrap(), 2);
        assert!(client.get(1).await.unwrap().is_none());

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![
                ResourceEvent::Created(1),
                ResourceEvent::Created(2),
                ResourceEvent::Created(3),
                ResourceEvent::Evicted(1),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_action_leaves_state_untouched() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));
        let ticket = client.create(create("a")).await.unwrap();

        assert_eq!(client.perform_action(ticket.id, TicketAction::Punch).await.unwrap(), 1);
        let err = client
            .perform_action(ticket.id, TicketAction::PunchThenFail)
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(client.perform_action(ticket.id, TicketAction::Peek).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_queries_publish_no_events() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));
        let ticket = client.create(create("a")).await.unwrap();

        let mut events = client.subscribe();
        client.perform_action(ticket.id, TicketAction::Peek).await.unwrap();
        client
            .update(ticket.id, TicketUpdate { label: "b".into() })
            .await
            .unwrap();

        assert_eq!(events.try_recv().unwrap(), ResourceEvent::Updated(ticket.id));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_list_filters_in_insertion_order() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));
        for label in ["x", "y", "x"] {
            client.create(create(label)).await.unwrap();
        }

        let xs: Vec<u64> = client
            .list(Some("x".into()), ListOrder::Insertion)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(xs, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));

        assert!(matches!(client.delete(9).await, Err(FrameworkError::NotFound(id)) if id == "9"));
        assert!(matches!(
            client.perform_action(9, TicketAction::Punch).await,
            Err(FrameworkError::NotFound(_))
        ));
        assert!(matches!(
            client.update(9, TicketUpdate { label: "z".into() }).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_if_room_refuses_instead_of_evicting() {
        let (actor, client) = ResourceActor::<Ticket>::with_capacity(10, 2);
        tokio::spawn(actor.run(()));

        assert!(client.create_if_room(create("a")).await.unwrap().is_some());
        client.create(create("b")).await.unwrap();

        let mut events = client.subscribe();
        assert!(client.create_if_room(create("c")).await.unwrap().is_none());
        assert!(events.try_recv().is_err());
        assert!(client.get(1).await.unwrap().is_some());

        // Validation still applies below the limit, and a refusal burns no id.
        client.delete(1).await.unwrap();
        assert!(client.create_if_room(create("")).await.is_err());
        let next = client.create_if_room(create("d")).await.unwrap().unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_create_if_room_is_unbounded_without_capacity() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));
        for label in ["a", "b", "c"] {
            assert!(client.create_if_room(create(label)).await.unwrap().is_some());
        }
        assert_eq!(client.len().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_retiring_action_removes_entity() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));
        let ticket = client.create(create("a")).await.unwrap();

        // A failed retiring action keeps the entity.
        assert!(client.perform_action(ticket.id, TicketAction::Redeem).await.is_err());
        assert!(client.get(ticket.id).await.unwrap().is_some());

        client.perform_action(ticket.id, TicketAction::Punch).await.unwrap();
        let mut events = client.subscribe();
        assert_eq!(client.perform_action(ticket.id, TicketAction::Redeem).await.unwrap(), 2);

        assert_eq!(events.try_recv().unwrap(), ResourceEvent::Deleted(ticket.id));
        assert!(client.get(ticket.id).await.unwrap().is_none());
        assert!(matches!(
            client.perform_action(ticket.id, TicketAction::Punch).await,
            Err(FrameworkError::NotFound(_))
        ));
    }
}
