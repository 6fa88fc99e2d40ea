//! Error types for the catalog services.

use crate::model::CategoryId;
use entity_store::StoreError;
use std::fmt::Display;
use thiserror::Error;

/// Errors returned by [`ProductService`](super::ProductService) and
/// [`UserService`](super::UserService).
///
/// None of them are retried internally. The transport layer maps them with
/// [`ServiceError::status_code`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// One or more field-level violations. Raised before any write.
    #[error("Invalid data: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    /// The requested entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The candidate references a category that does not exist.
    #[error("Category with id {id} not found")]
    CategoryNotFound { id: CategoryId },

    /// The inbound payload could not be decoded.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// HTTP-style status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation { .. } | ServiceError::Malformed(_) => 400,
            ServiceError::NotFound { .. } | ServiceError::CategoryNotFound { .. } => 404,
            ServiceError::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_errors() {
        let err = ServiceError::Validation {
            messages: vec!["Email must have a valid format".into(), "Password is required".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid data: Email must have a valid format, Password is required"
        );
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_not_found_variants() {
        let err = ServiceError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found: 42");
        assert_eq!(err.status_code(), 404);

        let err = ServiceError::CategoryNotFound { id: CategoryId(9) };
        assert_eq!(err.to_string(), "Category with id 9 not found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_storage_errors_convert() {
        let err: ServiceError = StoreError::Closed.into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Store closed");
    }
}
