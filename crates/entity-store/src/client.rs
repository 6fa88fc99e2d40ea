//! # Store Client
//!
//! This module defines the handle used to talk to a [`StoreActor`](crate::StoreActor).

use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::repository::Repository;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

/// ## StoreClient
///
/// The `StoreClient<T>` forwards [`Repository`] calls over a Tokio mpsc channel and receives
/// results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Shutdown** – the store task exits once every clone has been dropped.
#[derive(Clone)]
pub struct StoreClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoredEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl<T: StoredEntity> Repository<T> for StoreClient<T> {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        tracing::debug!("Sending request");
        self.request(|respond_to| StoreRequest::FindAll { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn save(&self, entity: T) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        self.request(|respond_to| StoreRequest::Save { entity, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        self.request(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }
}
