//! Pure data structures implementing the [`StoredEntity`](entity_store::StoredEntity) trait,
//! plus the unvalidated candidates the services accept.

pub mod category;
pub mod product;
pub mod user;

pub use category::*;
pub use product::*;
pub use user::*;
