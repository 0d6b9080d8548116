//! Test doubles for the identity provider seam.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::listeners::{ListenerRegistry, Subscription};
use super::provider::{IdentityProvider, ProviderError};
use super::types::{AuthEvent, Session, User};

pub(crate) type FetchResult = Result<Option<Session>, ProviderError>;

/// Provider double whose initial fetch resolves only when the test says so.
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub(crate) listeners: ListenerRegistry,
    pub(crate) pending: RefCell<Option<oneshot::Receiver<FetchResult>>>,
    pub(crate) sign_out_result: RefCell<Option<ProviderError>>,
    pub(crate) get_calls: Cell<u32>,
    pub(crate) sign_out_calls: Cell<u32>,
}

impl FakeProvider {
    pub(crate) fn with_pending_fetch() -> (Rc<Self>, oneshot::Sender<FetchResult>) {
        let (tx, rx) = oneshot::channel();
        let provider = Self::default();
        *provider.pending.borrow_mut() = Some(rx);
        (Rc::new(provider), tx)
    }

    pub(crate) fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        self.listeners.emit(event, session);
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn get_session(&self) -> FetchResult {
        self.get_calls.set(self.get_calls.get() + 1);
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(rx) => rx.await.unwrap_or(Ok(None)),
            None => Ok(None),
        }
    }

    fn on_auth_state_change(&self, callback: Box<dyn Fn(AuthEvent, Option<Session>)>) -> Subscription {
        self.listeners.register(callback)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        let result = self.sign_out_result.borrow_mut().take();
        match result {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Session for `user_id` with an `{user_id}@example.com` email.
pub(crate) fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("at-{user_id}"),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: User {
            id: user_id.to_owned(),
            email: Some(format!("{user_id}@example.com")),
            role: None,
            user_metadata: serde_json::Value::Null,
            created_at: None,
        },
    }
}
