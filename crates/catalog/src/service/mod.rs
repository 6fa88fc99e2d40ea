//! # Services
//!
//! The services own the business rules: validate the candidate with the active strategy, talk to
//! storage through a [`Repository`](entity_store::Repository), and (for products) notify the
//! attached observers once a write has succeeded.

pub mod error;
pub mod product;
pub mod user;

pub use error::ServiceError;
pub use product::ProductService;
pub use user::UserService;
