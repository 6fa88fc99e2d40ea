//! # Catalog
//!
//! Business core of a product/category/user backend.
//!
//! - **[model]**: [`Product`](model::Product), [`Category`](model::Category),
//!   [`User`](model::User) and the unvalidated candidates the services accept.
//! - **[validation]**: pluggable [`ValidationStrategy`](validation::ValidationStrategy) policies.
//! - **[observer]**: product change notifications ([`ProductSubject`](observer::ProductSubject)
//!   and the shipped observers).
//! - **[service]**: [`ProductService`](service::ProductService) and
//!   [`UserService`](service::UserService), the only place rules are enforced.
//! - **[adapter]** / **[facade]**: JSON DTOs in, views out.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem) wiring and shutdown.
//!
//! Storage comes from the `entity_store` crate and is always injected.

pub mod adapter;
pub mod facade;
pub mod lifecycle;
pub mod model;
pub mod observer;
pub mod service;
pub mod validation;
