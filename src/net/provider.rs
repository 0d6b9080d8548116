//! Identity provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store only needs three capabilities from the hosted identity
//! service: read the current session, subscribe to auth transitions, and sign
//! out. Keeping them behind a trait lets the store run against a fake in
//! native tests and against the hosted client in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are reported but never retried here; callers decide what to do.

use async_trait::async_trait;

use super::listeners::Subscription;
use super::types::{AuthEvent, Session};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),
    #[error("identity provider returned {status}: {message}")]
    Http { status: u16, message: String },
}

/// External identity service used by the auth store.
///
/// Implementations are single-threaded (browser event loop), hence `?Send`.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Current session, or `None` when signed out.
    async fn get_session(&self) -> Result<Option<Session>, ProviderError>;

    /// Register `callback` for every auth transition until the returned
    /// handle is released.
    fn on_auth_state_change(&self, callback: Box<dyn Fn(AuthEvent, Option<Session>)>) -> Subscription;

    /// End the current session. Listeners observe the resulting transition.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
