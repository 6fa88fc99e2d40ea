//! # Entity Store
//!
//! This crate provides the storage building blocks the catalog services are written against.
//! It pairs a narrow **capability trait** ([`Repository`]) with an in-memory engine built on the
//! **Actor Model** ([`StoreActor`] + [`StoreClient`]).
//!
//! ## Why a Capability Trait?
//!
//! Services never name a concrete engine. They receive `Arc<dyn Repository<T>>` at construction:
//!
//! - **No hidden globals**: every process or test builds its own stores and passes them in.
//! - **Substitutable engines**: the actor-backed store, the [`mock`] store, or a database adapter
//!   all satisfy the same four operations.
//!
//! ## Why an Actor?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each store eliminates data races on the record map
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoredEntity`]) - identity contract for records
//! 2. **Runtime Layer** ([`StoreActor`]) - request processing and record ownership
//! 3. **Interface Layer** ([`StoreClient`], [`Repository`]) - type-safe communication
//!
//! ```rust
//! use entity_store::{Repository, StoreActor, StoredEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Category { id: Option<u32>, name: String }
//!
//! impl StoredEntity for Category {
//!     type Id = u32;
//!     fn id(&self) -> Option<u32> { self.id }
//!     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Category>::new(10);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let saved = client.save(Category { id: None, name: "Office".into() }).await.unwrap();
//!     let found = client.find_by_id(saved.id.unwrap()).await.unwrap();
//!     assert_eq!(found.unwrap().name, "Office");
//!
//!     // Dropping the last client stops the store.
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockStore`] hands out a real `StoreClient` whose requests are answered from scripted
//! expectations. See the [`mock`] module for the API.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use repository::Repository;
