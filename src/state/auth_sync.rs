//! Keeps `AuthState` consistent with the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` activates one `AuthSync` per mount. Activation registers a
//! single auth-change subscription and hands back the initial session fetch
//! for the caller to spawn on the local executor.
//!
//! ORDERING
//! ========
//! The fetch continuation and the first notification may arrive in either
//! order. Both overwrite the session and both mark loading complete; the
//! latter is idempotent, so whichever lands first ends the loading phase and
//! the last session write wins.
//!
//! Teardown clears the `active` flag and releases the subscription. A fetch
//! that resolves afterwards is dropped instead of writing into a destroyed
//! owner.

#[cfg(test)]
#[path = "auth_sync_test.rs"]
mod auth_sync_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::logging::log;
use leptos::prelude::{RwSignal, Update};

use super::auth::AuthState;
use crate::net::listeners::Subscription;
use crate::net::provider::{IdentityProvider, ProviderError};
use crate::net::types::Session;

/// Initial session fetch, to be driven by the caller's executor.
pub type InitialFetch = LocalBoxFuture<'static, Result<(), ProviderError>>;

/// Writable home of an `AuthState`.
///
/// Implemented for the reactive signal used by components and for a plain
/// `Rc<RefCell<_>>` used off the reactive runtime.
pub trait AuthCell: Clone + 'static {
    fn update_auth(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthCell for RwSignal<AuthState> {
    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}

impl AuthCell for Rc<RefCell<AuthState>> {
    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

/// Overwrite the session and end the loading phase.
fn settle<C: AuthCell>(state: &C, session: Option<Session>) {
    state.update_auth(|s| {
        s.apply_session(session);
        s.finish_loading();
    });
}

/// Live binding between one mounted auth subtree and the provider.
pub struct AuthSync {
    provider: Option<Rc<dyn IdentityProvider>>,
    subscription: Option<Subscription>,
    active: Rc<Cell<bool>>,
}

impl AuthSync {
    /// Binding for a subtree with auth turned off: settled, signed out, and
    /// without a provider.
    pub fn disabled<C: AuthCell>(state: C) -> Self {
        log!("auth: disabled by configuration");
        settle(&state, None);
        Self { provider: None, subscription: None, active: Rc::new(Cell::new(true)) }
    }

    /// Start synchronizing `state` with `provider`.
    ///
    /// With auth disabled the state is settled immediately and the provider
    /// is never contacted; no fetch is returned.
    pub fn activate<C: AuthCell>(
        provider: Rc<dyn IdentityProvider>,
        state: C,
        auth_disabled: bool,
    ) -> (Self, Option<InitialFetch>) {
        if auth_disabled {
            return (Self::disabled(state), None);
        }

        let active = Rc::new(Cell::new(true));

        let subscription = {
            let state = state.clone();
            let active = Rc::clone(&active);
            provider.on_auth_state_change(Box::new(move |event, session| {
                if !active.get() {
                    return;
                }
                log!("auth: {event:?} (signed_in={})", session.is_some());
                settle(&state, session);
            }))
        };

        let fetch = {
            let provider = Rc::clone(&provider);
            let active = Rc::clone(&active);
            async move {
                let session = provider.get_session().await?;
                if !active.get() {
                    log!("auth: initial session resolved after teardown; dropped");
                    return Ok(());
                }
                settle(&state, session);
                Ok(())
            }
            .boxed_local()
        };

        (Self { provider: Some(provider), subscription: Some(subscription), active }, Some(fetch))
    }

    /// Whether this binding still writes provider updates into its state.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    #[must_use]
    pub fn has_subscription(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Provider client, `None` when auth is disabled.
    #[must_use]
    pub fn provider(&self) -> Option<Rc<dyn IdentityProvider>> {
        self.provider.clone()
    }

    /// Ask the provider to end the session.
    ///
    /// Local state is left untouched; the provider's `SignedOut` notification
    /// updates it. A no-op when auth is disabled.
    #[must_use]
    pub fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), ProviderError>> {
        let provider = self.provider.clone();
        async move {
            match provider {
                Some(provider) => provider.sign_out().await,
                None => Ok(()),
            }
        }
        .boxed_local()
    }

    /// Stop writing into the state and release the subscription.
    pub fn teardown(&mut self) {
        self.active.set(false);
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for AuthSync {
    fn drop(&mut self) {
        self.teardown();
    }
}
