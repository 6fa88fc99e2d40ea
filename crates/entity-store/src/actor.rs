//! # Store Actor
//!
//! This module defines the `StoreActor`, the in-memory storage engine. It implements the
//! "Server" side of the Actor Model, processing requests sequentially and owning the
//! record map exclusively.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that owns every record of one entity type.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state (`records`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store processes its own requests *sequentially* in a loop, so the map needs no
/// `Mutex` or `RwLock`. Two callers saving the same id race only in the order their
/// requests reach the channel: the last write wins.
///
/// # Usage Pattern
///
/// ```rust
/// use entity_store::{Repository, StoreActor, StoredEntity};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: Option<u32>, label: String }
///
/// impl StoredEntity for Tag {
///     type Id = u32;
///     fn id(&self) -> Option<u32> { self.id }
///     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = StoreActor::<Tag>::new(10);
///
///     // 2. Run
///     tokio::spawn(actor.run());
///
///     // 3. Use
///     let saved = client.save(Tag { id: None, label: "sale".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Operations
///
/// * **Save**: assigns the next free id when the record has none, then inserts or replaces.
/// * **FindById**: returns a clone of the record, or `None`.
/// * **FindAll**: returns clones of every record in ascending id order.
/// * **Remove**: removes the record and returns it, or `None` if it was absent.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: BTreeMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    fn allocate_id(&mut self) -> T::Id {
        loop {
            let candidate = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.records.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Runs the store's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::FindAll { respond_to } => {
                    let items: Vec<T> = self.records.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Save {
                    mut entity,
                    respond_to,
                } => {
                    debug!(entity_type, ?entity, "Save");
                    let id = match entity.id() {
                        Some(id) => id,
                        None => {
                            let id = self.allocate_id();
                            entity.assign_id(id.clone());
                            id
                        }
                    };
                    let replaced = self.records.insert(id.clone(), entity.clone()).is_some();
                    info!(entity_type, %id, replaced, size = self.records.len(), "Saved");
                    let _ = respond_to.send(Ok(entity));
                }
                StoreRequest::Remove { id, respond_to } => {
                    let removed = self.records.remove(&id);
                    info!(
                        entity_type,
                        %id,
                        found = removed.is_some(),
                        size = self.records.len(),
                        "Removed"
                    );
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
