//! # Store Errors
//!
//! This module defines the error type shared by every storage engine. Domain crates wrap it
//! (usually with `#[from]`) so that storage failures travel through their own error enums.

/// Errors that can occur while talking to a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
