//! # Product Notifications
//!
//! Product mutations are broadcast through a [`ProductSubject`]. Anything that wants to react to
//! "a product was created/updated/deleted" implements [`ProductObserver`] and is attached to the
//! subject owned by a [`ProductService`](crate::service::ProductService).
//!
//! ## Dispatch rules
//!
//! - Observers are called synchronously, in attachment order, with the same product and action.
//! - Identity is the `Arc` allocation: attaching the same handle twice keeps one entry, while two
//!   separately allocated observers of the same type are two entries.
//! - A failing observer is logged and skipped. The remaining observers still run and the
//!   operation that triggered the notification still succeeds.

pub mod logging;
pub mod notification;
pub mod subject;

pub use logging::LoggingObserver;
pub use notification::NotificationObserver;
pub use subject::ProductSubject;

use crate::model::Product;
use serde::Serialize;
use std::fmt::{self, Display};

/// What happened to the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductAction {
    Created,
    Updated,
    Deleted,
}

impl ProductAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductAction::Created => "created",
            ProductAction::Updated => "updated",
            ProductAction::Deleted => "deleted",
        }
    }
}

impl Display for ProductAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by an observer. It never reaches the service caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A handler invoked after a product mutation has been persisted.
pub trait ProductObserver: Send + Sync {
    /// Name used in diagnostics. Defaults to the bare type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    fn update(&self, product: &Product, action: ProductAction) -> Result<(), ObserverError>;
}
