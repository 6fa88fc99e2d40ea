use super::ServiceError;
use crate::model::{User, UserId, UserInput};
use crate::validation::{UserValidationStrategy, ValidationStrategy};
use entity_store::Repository;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, instrument, warn};

/// Validates and persists users. Users have no observers.
pub struct UserService {
    users: Arc<dyn Repository<User>>,
    strategy: RwLock<Arc<dyn ValidationStrategy<UserInput>>>,
}

impl UserService {
    /// Creates a service using [`UserValidationStrategy`].
    pub fn new(users: Arc<dyn Repository<User>>) -> Self {
        Self {
            users,
            strategy: RwLock::new(Arc::new(UserValidationStrategy)),
        }
    }

    pub fn set_validation_strategy(&self, strategy: Arc<dyn ValidationStrategy<UserInput>>) {
        *self.strategy.write().unwrap_or_else(PoisonError::into_inner) = strategy;
        info!("User validation strategy replaced");
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, candidate: UserInput) -> Result<User, ServiceError> {
        let strategy = self
            .strategy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let result = strategy.validate(&candidate);
        if !result.is_valid() {
            let messages = result.into_errors();
            warn!(?messages, "User rejected");
            return Err(ServiceError::Validation { messages });
        }

        let UserInput { email, password } = candidate;
        let saved = self
            .users
            .save(User::new(
                email.unwrap_or_default(),
                password.unwrap_or_default(),
            ))
            .await?;
        info!(email = %saved.email, "User inserted");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: UserId) -> Result<User, ServiceError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationResult, EMAIL_INVALID, PASSWORD_REQUIRED};
    use entity_store::mock::MockStore;
    use entity_store::{StoreActor, StoreError};

    fn real_service() -> UserService {
        let (actor, client) = StoreActor::<User>::new(10);
        tokio::spawn(actor.run());
        UserService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_insert_then_list_and_get() {
        let service = real_service();

        let saved = service
            .insert(UserInput::new("a@b.com", "123456"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(UserId(1)));
        assert_eq!(service.list().await.unwrap(), vec![saved.clone()]);
        assert_eq!(service.get_by_id(UserId(1)).await.unwrap(), saved);
        assert_eq!(
            service.get_by_id(UserId(2)).await.unwrap_err(),
            ServiceError::not_found("User", 2)
        );
    }

    #[tokio::test]
    async fn test_invalid_user_never_reaches_storage() {
        let mock = MockStore::<User>::new();
        let service = UserService::new(Arc::new(mock.client()));

        let err = service
            .insert(UserInput {
                email: Some("invalid".into()),
                password: None,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Invalid data: {EMAIL_INVALID}, {PASSWORD_REQUIRED}")
        );
        assert_eq!(mock.request_count(), 0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let mut mock = MockStore::<User>::new();
        mock.expect_save().return_err(StoreError::backend("disk full"));
        let service = UserService::new(Arc::new(mock.client()));

        let err = service
            .insert(UserInput::new("a@b.com", "123456"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(mock.saved()[0].email, "a@b.com");
        mock.verify();
    }

    #[tokio::test]
    async fn test_swapped_strategy() {
        let service = real_service();
        service.set_validation_strategy(Arc::new(|input: &UserInput| {
            match input.email.as_deref() {
                Some(email) if email.ends_with("@corp.example") => ValidationResult::valid(),
                _ => ValidationResult::from_errors(vec!["Corporate email required".into()]),
            }
        }));

        assert!(service
            .insert(UserInput::new("a@b.com", "123456"))
            .await
            .is_err());
        // the replacement strategy does not check password length
        let saved = service
            .insert(UserInput::new("dev@corp.example", "x"))
            .await
            .unwrap();
        assert_eq!(saved.password, "x");
    }
}
