//! # StoredEntity Trait
//!
//! The `StoredEntity` trait defines the contract that every record (Product, Category, User, …)
//! must implement to be held by a [`StoreActor`](crate::StoreActor). It fixes the identifier type
//! and tells the store how to read and assign that identifier.
//!
//! # Architecture Note
//! By defining a contract (`StoredEntity`) that all our record types must satisfy, we write the
//! storage loop *once* and reuse it for every entity type.
//!
//! Identity is assigned by storage: a freshly built entity carries `None` until the first
//! `save`, at which point the store hands out the next free id.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be persisted by a [`StoreActor`](crate::StoreActor).
pub trait StoredEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// `find_all` can return records in a stable order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The identifier, or `None` if the entity has never been saved.
    fn id(&self) -> Option<Self::Id>;

    /// Called by the store when it assigns an identifier on first save.
    fn assign_id(&mut self, id: Self::Id);
}
