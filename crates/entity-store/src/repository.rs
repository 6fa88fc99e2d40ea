//! # Repository Trait
//!
//! The storage capability consumed by domain services. Any engine that can find, list, save and
//! remove records of one type implements it; the bundled [`StoreClient`](crate::StoreClient) and
//! [`MockStore`](crate::mock::MockStore) clients are two such engines.
use crate::{StoreError, StoredEntity};
use async_trait::async_trait;

/// Persistence capability for one entity type.
///
/// Services hold it as `Arc<dyn Repository<T>>`, so a test can swap the engine without touching
/// the service.
///
/// # Example
///
/// ```rust
/// use entity_store::{Repository, StoreActor, StoredEntity};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: Option<u32> }
///
/// impl StoredEntity for Tag {
///     type Id = u32;
///     fn id(&self) -> Option<u32> { self.id }
///     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
/// }
///
/// async fn count(tags: Arc<dyn Repository<Tag>>) -> usize {
///     tags.find_all().await.map(|all| all.len()).unwrap_or(0)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///     client.save(Tag { id: None }).await.unwrap();
///     assert_eq!(count(Arc::new(client)).await, 1);
/// }
/// ```
#[async_trait]
pub trait Repository<T: StoredEntity>: Send + Sync {
    /// Fetch a record by ID.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Fetch every record, in the order the engine provides.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// Insert-or-update. Records whose id is `None` get one assigned; the stored record is returned.
    async fn save(&self, entity: T) -> Result<T, StoreError>;

    /// Delete a record by ID, returning what was removed.
    async fn remove(&self, id: T::Id) -> Result<Option<T>, StoreError>;
}
