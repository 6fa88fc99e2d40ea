//! # Store Messages
//!
//! This module defines the message types used for communication between
//! the [`StoreClient`](crate::StoreClient) and the [`StoreActor`](crate::StoreActor).

use crate::entity::StoredEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the store task.
///
/// The variants map one-to-one onto the [`Repository`](crate::Repository) capability:
///
/// - **FindById**: Fetches a single record, `None` if absent.
/// - **FindAll**: Fetches every record in id order.
/// - **Save**: Insert-or-update. Records without an id get one assigned.
/// - **Remove**: Deletes a record and hands back the removed snapshot.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}
