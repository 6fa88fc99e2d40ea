//! # System Lifecycle & Wiring
//!
//! This module builds the running catalog: it starts one store per entity type, hands each
//! service the storage handles it needs, and tears everything down again.
//!
//! ## Startup
//!
//! 1. **Stores** - spawn a [`StoreActor`](entity_store::StoreActor) for products, categories
//!    and users, each with the configured channel buffer.
//! 2. **Services** - inject the store clients as `Arc<dyn Repository<_>>`.
//! 3. **Seed** - save the configured categories (ids `1..`, in order).
//! 4. **Observers** - attach [`LoggingObserver`](crate::observer::LoggingObserver) and
//!    [`NotificationObserver`](crate::observer::NotificationObserver).
//!
//! [`CatalogSystem::start`] runs all four; [`CatalogSystem::new`] stops after step 2 so tests can
//! seed and attach by hand.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - services, facade and clients, which closes the store channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None` and the loop exits
//! 3. **Await completion** - wait for every store task to finish
//!
//! ## Configuration
//!
//! [`CatalogConfig`] is parsed with `clap`, from flags or `CATALOG_*` environment variables.

pub mod catalog_system;
pub mod config;

pub use catalog_system::CatalogSystem;
pub use config::CatalogConfig;
