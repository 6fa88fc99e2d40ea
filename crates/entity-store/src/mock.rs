//! # Mock Store & Testing Guide
//!
//! The `MockStore<T>` type hands out a real [`StoreClient<T>`], but the requests it receives are
//! answered from a queue of expectations instead of a record map. It lets you script exactly what
//! storage returns, inject failures, and check which requests a service issued.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | No real state (expectations) | Real records |
//! | **Order checks** | Every request must match the next expectation | None |
//! | **Use Case** | Unit testing logic *around* storage | Testing the full flow |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//!
//! ## Example
//!
//! ```rust
//! use entity_store::mock::MockStore;
//! use entity_store::{Repository, StoreError, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: Option<u32>, label: String }
//!
//! impl StoredEntity for Tag {
//!     type Id = u32;
//!     fn id(&self) -> Option<u32> { self.id }
//!     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Tag>::new();
//!     mock.expect_find_by_id(1).return_ok(None);
//!     mock.expect_save().return_err(StoreError::backend("disk full"));
//!
//!     let client = mock.client();
//!     assert_eq!(client.find_by_id(1).await.unwrap(), None);
//!
//!     let result = client.save(Tag { id: None, label: "x".into() }).await;
//!     assert!(matches!(result, Err(StoreError::Backend(_))));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level Helpers
//!
//! Use [`create_mock_store`] to get a client and the raw receiver when a test needs to hold a
//! request open (e.g., to inspect it before answering).

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum SaveResponse<T: StoredEntity> {
    Fixed(Result<T, StoreError>),
    /// Reply with the incoming entity, assigning this id if it has none.
    Echo(T::Id),
}

enum Expectation<T: StoredEntity> {
    FindById {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindAll {
        response: Result<Vec<T>, StoreError>,
    },
    Save {
        response: SaveResponse<T>,
    },
    Remove {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
}

impl<T: StoredEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::FindById { .. } => "find_by_id",
            Expectation::FindAll { .. } => "find_all",
            Expectation::Save { .. } => "save",
            Expectation::Remove { .. } => "remove",
        }
    }
}

struct MockState<T: StoredEntity> {
    expectations: VecDeque<Expectation<T>>,
    received: usize,
    saved: Vec<T>,
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: StoredEntity>(shared: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does not match the
/// next expectation is recorded as a mismatch and its response channel is dropped, so the caller
/// sees [`StoreError::Dropped`]. [`MockStore::verify`] reports mismatches and leftovers.
pub struct MockStore<T: StoredEntity> {
    client: StoreClient<T>,
    shared: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let shared: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: 0,
            saved: Vec::new(),
            mismatches: Vec::new(),
        }));
        let task_state = shared.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                state.received += 1;
                let expectation = state.expectations.pop_front();
                Self::answer(&mut state, request, expectation);
            }
        });

        Self {
            client: StoreClient::new(sender),
            shared,
            _handle: handle,
        }
    }

    fn answer(
        state: &mut MockState<T>,
        request: StoreRequest<T>,
        expectation: Option<Expectation<T>>,
    ) {
        match (request, expectation) {
            (
                StoreRequest::FindById { id, respond_to },
                Some(Expectation::FindById {
                    id: expected,
                    response,
                }),
            ) => {
                if id != expected {
                    state
                        .mismatches
                        .push(format!("find_by_id: expected id {expected}, got {id}"));
                }
                let _ = respond_to.send(response);
            }
            (StoreRequest::FindAll { respond_to }, Some(Expectation::FindAll { response })) => {
                let _ = respond_to.send(response);
            }
            (StoreRequest::Save { entity, respond_to }, Some(Expectation::Save { response })) => {
                state.saved.push(entity.clone());
                let reply = match response {
                    SaveResponse::Fixed(result) => result,
                    SaveResponse::Echo(id) => {
                        let mut stored = entity;
                        if stored.id().is_none() {
                            stored.assign_id(id);
                        }
                        Ok(stored)
                    }
                };
                let _ = respond_to.send(reply);
            }
            (
                StoreRequest::Remove { id, respond_to },
                Some(Expectation::Remove {
                    id: expected,
                    response,
                }),
            ) => {
                if id != expected {
                    state
                        .mismatches
                        .push(format!("remove: expected id {expected}, got {id}"));
                }
                let _ = respond_to.send(response);
            }
            (request, expectation) => {
                let expected = expectation.as_ref().map_or("nothing", Expectation::kind);
                state
                    .mismatches
                    .push(format!("unexpected request {request:?}, expected {expected}"));
            }
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Number of requests the mock has received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.shared).received
    }

    /// Entities that arrived in `save` requests, in arrival order.
    pub fn saved(&self) -> Vec<T> {
        lock(&self.shared).saved.clone()
    }

    /// Expects a `find_by_id` request.
    pub fn expect_find_by_id(&mut self, id: T::Id) -> FindByIdExpectationBuilder<T> {
        FindByIdExpectationBuilder {
            id,
            shared: self.shared.clone(),
        }
    }

    /// Expects a `find_all` request.
    pub fn expect_find_all(&mut self) -> FindAllExpectationBuilder<T> {
        FindAllExpectationBuilder {
            shared: self.shared.clone(),
        }
    }

    /// Expects a `save` request.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            shared: self.shared.clone(),
        }
    }

    /// Expects a `remove` request.
    pub fn expect_remove(&mut self, id: T::Id) -> RemoveExpectationBuilder<T> {
        RemoveExpectationBuilder {
            id,
            shared: self.shared.clone(),
        }
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = lock(&self.shared);
        if !state.mismatches.is_empty() {
            panic!("Mock store mismatches: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<_> = state.expectations.iter().map(Expectation::kind).collect();
            panic!("Not all expectations were met. Remaining: {remaining:?}");
        }
    }
}

/// Builder for `find_by_id` expectations.
pub struct FindByIdExpectationBuilder<T: StoredEntity> {
    id: T::Id,
    shared: Shared<T>,
}

impl<T: StoredEntity> FindByIdExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        lock(&self.shared).expectations.push_back(Expectation::FindById {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.shared).expectations.push_back(Expectation::FindById {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `find_all` expectations.
pub struct FindAllExpectationBuilder<T: StoredEntity> {
    shared: Shared<T>,
}

impl<T: StoredEntity> FindAllExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, values: Vec<T>) {
        lock(&self.shared)
            .expectations
            .push_back(Expectation::FindAll {
                response: Ok(values),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.shared)
            .expectations
            .push_back(Expectation::FindAll {
                response: Err(error),
            });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: StoredEntity> {
    shared: Shared<T>,
}

impl<T: StoredEntity> SaveExpectationBuilder<T> {
    /// Sets the expectation to return this exact entity.
    pub fn return_ok(self, value: T) {
        lock(&self.shared).expectations.push_back(Expectation::Save {
            response: SaveResponse::Fixed(Ok(value)),
        });
    }

    /// Sets the expectation to return the saved entity, assigning `id` if it has none.
    pub fn echo_with_id(self, id: T::Id) {
        lock(&self.shared).expectations.push_back(Expectation::Save {
            response: SaveResponse::Echo(id),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.shared).expectations.push_back(Expectation::Save {
            response: SaveResponse::Fixed(Err(error)),
        });
    }
}

/// Builder for `remove` expectations.
pub struct RemoveExpectationBuilder<T: StoredEntity> {
    id: T::Id,
    shared: Shared<T>,
}

impl<T: StoredEntity> RemoveExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        lock(&self.shared).expectations.push_back(Expectation::Remove {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.shared).expectations.push_back(Expectation::Remove {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test drives the "store" side by hand: pull a request with one of the `expect_*`
/// helpers, assert on it, then answer through the returned responder.
pub fn create_mock_store<T: StoredEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FindById request
pub async fn expect_find_by_id<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Repository;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: Option<u32>,
        label: String,
    }

    impl StoredEntity for Tag {
        type Id = u32;

        fn id(&self) -> Option<u32> {
            self.id
        }

        fn assign_id(&mut self, id: u32) {
            self.id = Some(id);
        }
    }

    fn tag(label: &str) -> Tag {
        Tag {
            id: None,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_store_low_level() {
        let (client, mut receiver) = create_mock_store::<Tag>(10);

        let save_task = tokio::spawn(async move { client.save(tag("new")).await });

        let (entity, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(entity.label, "new");
        responder
            .send(Ok(Tag {
                id: Some(9),
                ..entity
            }))
            .unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(9));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Tag>::new();
        mock.expect_save().echo_with_id(3);
        mock.expect_find_all().return_ok(vec![tag("a"), tag("b")]);
        mock.expect_remove(3).return_ok(None);

        let client = mock.client();
        let saved = client.save(tag("echo")).await.unwrap();
        assert_eq!(saved.id, Some(3));
        assert_eq!(client.find_all().await.unwrap().len(), 2);
        assert_eq!(client.remove(3).await.unwrap(), None);

        assert_eq!(mock.request_count(), 3);
        assert_eq!(mock.saved(), vec![tag("echo")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_responder() {
        let mock = MockStore::<Tag>::new();
        let client = mock.client();

        let result = client.find_all().await;

        assert_eq!(result, Err(StoreError::Dropped));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    #[should_panic(expected = "Remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockStore::<Tag>::new();
        mock.expect_find_by_id(1).return_ok(None);
        mock.verify();
    }
}
