//! # Resource Actor
//!
//! The server half of the runtime. A `ResourceActor<T>` owns one collection of `T`
//! and processes its requests one at a time, which makes every request an atomic
//! read-modify-write over that collection without any locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns a collection of entities and serves `ResourceRequest<T>` messages.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its `ResourceClient`.
/// 2. **Wire**: pass the entity's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the future returned by `run` on the Tokio runtime.
///
/// ```rust
/// use tracker_actors::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tally { id: u32, count: u64 }
/// #[derive(Debug)] struct TallyCreate;
/// #[derive(Debug)] enum TallyAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl ActorEntity for Tally {
///     type Id = u32;
///     type Create = TallyCreate;
///     type Update = ();
///     type Action = TallyAction;
///     type ActionResult = u64;
///     type Context = ();
///     type Error = TallyError;
///
///     fn from_create_params(id: u32, _: TallyCreate) -> Result<Self, TallyError> {
///         Ok(Self { id, count: 0 })
///     }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), TallyError> { Ok(()) }
///     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<u64, TallyError> {
///         self.count += 1;
///         Ok(self.count)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tally>::new(8);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(TallyCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; senders wait once it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the message loop until every client has been dropped.
    ///
    /// `context` is lent to every hook for the lifetime of the loop.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError<T::Error>> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Entity)?;
        self.ensure_unique(&id, &item)?;
        item.on_create(context).await.map_err(FrameworkError::Entity)?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError<T::Error>> {
        let mut draft = self.draft(id)?;
        draft
            .on_update(update, context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.ensure_unique(id, &draft)?;
        self.store.insert(id.clone(), draft.clone());
        Ok(draft)
    }

    async fn delete(
        &mut self,
        id: &T::Id,
        context: &T::Context,
    ) -> Result<(), FrameworkError<T::Error>> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(FrameworkError::Entity)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        let mut draft = self.draft(id)?;
        let result = draft
            .handle_action(action, context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.ensure_unique(id, &draft)?;
        self.store.insert(id.clone(), draft);
        Ok(result)
    }

    /// Copy of a stored item for a hook to work on; committed only on success.
    fn draft(&self, id: &T::Id) -> Result<T, FrameworkError<T::Error>> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    fn ensure_unique(&self, id: &T::Id, candidate: &T) -> Result<(), FrameworkError<T::Error>> {
        let Some(key) = candidate.unique_key() else {
            return Ok(());
        };
        let taken = self
            .store
            .iter()
            .any(|(other_id, other)| other_id != id && other.unique_key().as_ref() == Some(&key));
        if taken {
            Err(FrameworkError::Conflict(key))
        } else {
            Ok(())
        }
    }
}
