use super::{ValidationResult, ValidationStrategy};
use crate::model::UserInput;
use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email must have a valid format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

pub const MIN_PASSWORD_LEN: usize = 6;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true if `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Default user policy.
///
/// Produces at most one email message and one password message: the format and length checks
/// only run once the presence check has passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidationStrategy;

impl ValidationStrategy<UserInput> for UserValidationStrategy {
    fn validate(&self, candidate: &UserInput) -> ValidationResult {
        let mut result = ValidationResult::valid();

        match candidate.email.as_deref() {
            Some(email) if !email.trim().is_empty() => {
                if !is_valid_email(email) {
                    result.push(EMAIL_INVALID);
                }
            }
            _ => result.push(EMAIL_REQUIRED),
        }

        match candidate.password.as_deref() {
            Some(password) if !password.trim().is_empty() => {
                if password.chars().count() < MIN_PASSWORD_LEN {
                    result.push(PASSWORD_TOO_SHORT);
                }
            }
            _ => result.push(PASSWORD_REQUIRED),
        }

        result
    }
}
