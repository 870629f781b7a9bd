//! # Mocks
//!
//! Test doubles for code that talks to an actor through a [`ResourceClient`].
//!
//! Two styles are supported:
//!
//! - [`MockClient`]: queue scripted replies up front, hand out `client()`, and call
//!   `verify()` at the end. Requests are answered strictly in queue order.
//! - [`create_mock_client`] plus the `expect_*` helpers: receive the raw request,
//!   inspect its payload (for instance the delta inside a stock action), then reply
//!   by hand.
//!
//! ```rust
//! use tracker_actors::mock::MockClient;
//! use tracker_actors::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Note { id: u32, text: String }
//! #[derive(Debug)] struct NoteCreate(String);
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: p.0 })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(7).return_ok(Some(Note { id: 7, text: "hi".into() }));
//!
//!     let note = mock.client().get(7).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hi");
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

type Reply<R, E> = Result<R, FrameworkError<E>>;

enum Scripted<T: ActorEntity> {
    Create(Reply<T::Id, T::Error>),
    Get(Reply<Option<T>, T::Error>),
    List(Reply<Vec<T>, T::Error>),
    Update(Reply<T, T::Error>),
    Delete(Reply<(), T::Error>),
    Action(Reply<T::ActionResult, T::Error>),
}

struct Expectation<T: ActorEntity> {
    id: Option<T::Id>,
    reply: Scripted<T>,
}

struct Queue<T: ActorEntity>(Arc<Mutex<VecDeque<Expectation<T>>>>);

impl<T: ActorEntity> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ActorEntity> Queue<T> {
    fn lock(&self) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Scripted stand-in for a resource actor.
///
/// Each incoming request pops the next expectation. A request of the wrong kind, or
/// for a different id than the one expected, panics the mock task; the caller then
/// sees [`FrameworkError::ActorDropped`] and `verify()` reports the leftover entries.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Spawns the mock task. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Queue(Arc::new(Mutex::new(VecDeque::new())));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().pop_front();
                let Some(Expectation { id, reply }) = next else {
                    panic!("Unexpected request: no expectations left");
                };
                answer(request, id, reply);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, Scripted::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Scripted::Get)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Scripted::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Scripted::Update)
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Scripted::Delete)
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Scripted::Action)
    }

    /// Panics if any scripted reply was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &mut self,
        id: Option<T::Id>,
        wrap: fn(Reply<R, T::Error>) -> Scripted<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expected: Option<T::Id>,
    reply: Scripted<T>,
) {
    fn check<I: PartialEq + std::fmt::Debug>(expected: Option<I>, actual: &I) {
        if let Some(expected) = expected {
            assert_eq!(&expected, actual, "request for an unexpected id");
        }
    }
    fn send<R, E>(respond_to: Response<R, E>, reply: Reply<R, E>) {
        let _ = respond_to.send(reply);
    }

    match (request, reply) {
        (ResourceRequest::Create { respond_to, .. }, Scripted::Create(r)) => send(respond_to, r),
        (ResourceRequest::Get { id, respond_to }, Scripted::Get(r)) => {
            check(expected, &id);
            send(respond_to, r)
        }
        (ResourceRequest::List { respond_to }, Scripted::List(r)) => send(respond_to, r),
        (ResourceRequest::Update { id, respond_to, .. }, Scripted::Update(r)) => {
            check(expected, &id);
            send(respond_to, r)
        }
        (ResourceRequest::Delete { id, respond_to }, Scripted::Delete(r)) => {
            check(expected, &id);
            send(respond_to, r)
        }
        (ResourceRequest::Action { id, respond_to, .. }, Scripted::Action(r)) => {
            check(expected, &id);
            send(respond_to, r)
        }
        _ => panic!("Unexpected request or expectation mismatch"),
    }
}

/// Finishes one expectation with either a value or an error.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Reply<R, T::Error>) -> Scripted<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, reply: Reply<R, T::Error>) {
        let reply = (self.wrap)(reply);
        self.expectations.lock().push_back(Expectation { id: self.id, reply });
    }
}

/// A bare client whose requests land on the returned receiver.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
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
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Badge {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct BadgeCreate {
        label: String,
    }

    #[derive(Debug)]
    enum BadgeAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("badge error")]
    struct BadgeError;

    #[async_trait]
    impl ActorEntity for Badge {
        type Id = u32;
        type Create = BadgeCreate;
        type Update = ();
        type Action = BadgeAction;
        type ActionResult = String;
        type Context = ();
        type Error = BadgeError;

        fn from_create_params(id: u32, params: BadgeCreate) -> Result<Self, BadgeError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), BadgeError> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: BadgeAction,
            _: &(),
        ) -> Result<String, BadgeError> {
            let BadgeAction::Rename(label) = action;
            self.label = label.clone();
            Ok(label)
        }
    }

    fn badge(id: u32, label: &str) -> Badge {
        Badge {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn raw_client_exposes_action_payload() {
        let (client, mut receiver) = create_mock_client::<Badge>(4);

        let task = tokio::spawn(async move {
            client
                .perform_action(3, BadgeAction::Rename("gold".into()))
                .await
        });

        let (id, action, respond_to) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        let BadgeAction::Rename(label) = action;
        assert_eq!(label, "gold");
        respond_to.send(Ok(label)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "gold");
    }

    #[tokio::test]
    async fn scripted_replies_are_served_in_order() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![badge(1, "a"), badge(2, "b")]);
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();
        let id = client
            .create(BadgeCreate { label: "a".into() })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert!(matches!(
            client.delete(2).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn wrong_request_kind_drops_reply() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_get(1).return_ok(Some(badge(1, "a")));

        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
