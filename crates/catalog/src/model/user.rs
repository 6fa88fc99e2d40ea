use entity_store::StoredEntity;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// The password is stored as given. `Debug` redacts it so that store logs never carry it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates a new, unsaved User instance.
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password, stored as given
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl StoredEntity for User {
    type Id = UserId;

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }
}

/// Payload for creating a new user. `None` marks a missing field.
#[derive(Clone, PartialEq, Default)]
pub struct UserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInput")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new("a@b.com", "hunter22");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter22"));

        let input = UserInput::new("a@b.com", "hunter22");
        assert!(!format!("{input:?}").contains("hunter22"));
    }
}
