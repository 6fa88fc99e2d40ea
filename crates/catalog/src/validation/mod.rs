//! # Validation Strategies
//!
//! Validation is a pluggable policy. A service holds its active policy as
//! `Arc<dyn ValidationStrategy<C>>` and can swap it at runtime; the new policy applies to the
//! calls that start after the swap.
//!
//! Strategies are pure: same candidate, same [`ValidationResult`], no side effects.
//!
//! ## Shipped strategies
//!
//! - [`ProductValidationStrategy`] - name, price and category checks, accumulated.
//! - [`UserValidationStrategy`] - email presence/format and password presence/length.
//!
//! Any `Fn(&C) -> ValidationResult` closure is also a strategy:
//!
//! ```rust
//! use catalog::model::ProductInput;
//! use catalog::validation::{ValidationResult, ValidationStrategy};
//!
//! let reject_all = |_: &ProductInput| ValidationResult::from_errors(vec!["closed for stocktake".into()]);
//! let result = reject_all.validate(&ProductInput::default());
//! assert!(!result.is_valid());
//! ```

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;

/// Outcome of a validation pass: valid exactly when no errors were collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    pub(crate) fn push(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// A validation policy for candidates of type `C`.
pub trait ValidationStrategy<C>: Send + Sync {
    fn validate(&self, candidate: &C) -> ValidationResult;
}

impl<C, F> ValidationStrategy<C> for F
where
    F: Fn(&C) -> ValidationResult + Send + Sync,
{
    fn validate(&self, candidate: &C) -> ValidationResult {
        self(candidate)
    }
}
