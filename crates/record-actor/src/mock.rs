//! # Mock Records & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`RecordClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Code that
//! takes a `RecordClient` (or a wrapper around one) can be tested without
//! spawning actors, and failures that are hard to provoke with a real store
//! (closed channels, rejected writes) are one `return_err` away.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Receiver helpers | Real Actor |
//! |---------|------------|------------------|------------|
//! | **State** | None, scripted replies | None, you reply by hand | Real rows |
//! | **Timing control** | Replies immediately | You decide when to reply | Scheduler |
//! | **Use Case** | Scripted success/failure | Observing state *while* a request is outstanding | End-to-end |
//!
//! ## Scripted replies
//!
//! ```rust
//! use record_actor::mock::MockClient;
//! use record_actor::{Record, StoreError};
//!
//! #[derive(Clone, Debug)] struct Tag { label: String }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl Record for Tag {
//!     type Id = u32; type Create = TagCreate; type Action = TagAction;
//!     type ActionResult = (); type Error = TagError;
//!     fn from_create_params(_: u32, _: TagCreate) -> Result<Self, TagError> {
//!         Ok(Self { label: String::new() })
//!     }
//!     fn apply(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_list().return_ok(vec![Tag { label: "urgent".into() }]);
//!     mock.expect_list().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(matches!(client.list().await, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Replying by hand
//!
//! [`create_mock_client`] returns a client plus the receiving end of its
//! channel. Pull requests off with [`expect_action`], [`expect_list`], ... and
//! answer them whenever the test is ready. Between receiving and answering, the
//! caller is suspended on its request, which is exactly the window an
//! optimistic update has to be observable in.

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
enum Expectation<T: Record> {
    Create {
        response: Result<T::Id, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock record store answering from queued expectations, in order.
///
/// A request that does not match the next expectation (wrong kind or wrong id)
/// panics the background task; the caller then observes
/// [`StoreError::ActorDropped`] and [`MockClient::verify`] reports the leftover.
pub struct MockClient<T: Record> {
    client: RecordClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        RecordRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Record> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: Record> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> ListExpectationBuilder<T> {
    pub fn return_ok(self, rows: Vec<T>) {
        self.push(Ok(rows));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: Record> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: Record> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Nothing answers the requests until the test pulls them off the receiver
/// with one of the `expect_*` helpers below and replies.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request.
pub async fn expect_list<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(RecordRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(RecordRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TagAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    impl Record for Tag {
        type Id = u32;
        type Create = TagCreate;
        type Action = TagAction;
        type ActionResult = ();
        type Error = TagError;

        fn from_create_params(_id: u32, params: TagCreate) -> Result<Self, TagError> {
            Ok(Self {
                label: params.label,
            })
        }

        fn apply(&mut self, action: TagAction) -> Result<(), TagError> {
            match action {
                TagAction::Rename(label) => self.label = label,
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TagCreate {
                    label: "urgent".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.label, "urgent");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_action_reply_is_held_until_sent() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let action_task = tokio::spawn(async move {
            client
                .perform_action(3, TagAction::Rename("later".to_string()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, TagAction::Rename(ref label) if label == "later"));
        assert!(!action_task.is_finished());

        responder.send(Err(StoreError::NotFound("3".into()))).unwrap();
        let result = action_task.await.unwrap();
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Tag {
            label: "urgent".to_string(),
        }));
        mock.expect_list().return_err(StoreError::ActorClosed);

        let client = mock.client();

        let id = client
            .create(TagCreate {
                label: "urgent".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "urgent");

        assert!(matches!(client.list().await, Err(StoreError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let result = client.get(2).await;
        assert!(matches!(result, Err(StoreError::ActorDropped)));
    }
}
