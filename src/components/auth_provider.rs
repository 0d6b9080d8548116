//! Auth context provider and accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` owns the subtree's `AuthState` signal and its `AuthSync`
//! binding. Descendants read auth through `use_auth`, which fails loudly when
//! no provider is mounted above them instead of handing back empty state.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures (initial fetch, sign-out) are not retried or
//! translated. Spawned tasks log them; `AuthContext::sign_out` returns them.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use std::rc::Rc;

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::provider::{IdentityProvider, ProviderError};
use crate::net::types::{Session, User};
use crate::state::auth::AuthState;
use crate::state::auth_sync::{AuthSync, InitialFetch};

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthUsageError {
    #[error("use_auth must be used within an AuthProvider")]
    OutsideProvider,
}

/// Handle to the nearest `AuthProvider`'s state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    sync: StoredValue<Option<AuthSync>, LocalStorage>,
}

impl AuthContext {
    /// Read-only view of the whole auth state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session().cloned())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    /// The identity provider client, `None` when auth is disabled or the
    /// binding has not been activated (server render).
    pub fn client(&self) -> Option<Rc<dyn IdentityProvider>> {
        self.sync
            .try_with_value(|binding| binding.as_ref().and_then(AuthSync::provider))
            .flatten()
    }

    /// Sign out through the provider. Local state changes when the provider
    /// reports the transition.
    pub async fn sign_out(&self) -> Result<(), ProviderError> {
        let Some(pending) = self.sync.try_with_value(|binding| binding.as_ref().map(AuthSync::sign_out)) else {
            log!("auth: sign_out after provider teardown ignored");
            return Ok(());
        };
        match pending {
            Some(fut) => fut.await,
            None => Ok(()),
        }
    }
}

/// `None`-check behind `use_auth`.
pub fn require_auth(context: Option<AuthContext>) -> Result<AuthContext, AuthUsageError> {
    context.ok_or(AuthUsageError::OutsideProvider)
}

/// Auth context of the nearest `AuthProvider`.
///
/// # Errors
///
/// Returns `AuthUsageError::OutsideProvider` when called outside an
/// `AuthProvider` subtree.
pub fn try_use_auth() -> Result<AuthContext, AuthUsageError> {
    require_auth(use_context::<AuthContext>())
}

/// Auth context of the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree. That is a component
/// wiring mistake, not a runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

/// Explicit config wins; otherwise use build-time values. A broken build
/// config runs the app signed out rather than refusing to render.
fn resolve_config(config: Option<AuthConfig>) -> AuthConfig {
    config.unwrap_or_else(|| {
        AuthConfig::from_build_env().unwrap_or_else(|err| {
            error!("auth: {err}; running with auth disabled");
            AuthConfig::disabled()
        })
    })
}

/// Hosted client for `config`, browser builds only.
fn hosted_client(config: &AuthConfig) -> Option<Rc<dyn IdentityProvider>> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::supabase::SupabaseClient;

        if config.disable_auth {
            return None;
        }
        let endpoint = config.endpoint.clone()?;
        Some(Rc::new(SupabaseClient::new(endpoint)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Activate the subtree's binding and tie its teardown to the current owner.
///
/// Without a provider the binding is settled as disabled. Returns the initial
/// session fetch when one is needed.
fn bind(
    state: RwSignal<AuthState>,
    sync: StoredValue<Option<AuthSync>, LocalStorage>,
    provider: Option<Rc<dyn IdentityProvider>>,
    auth_disabled: bool,
) -> Option<InitialFetch> {
    let (binding, fetch) = match provider {
        Some(provider) => AuthSync::activate(provider, state, auth_disabled),
        None => (AuthSync::disabled(state), None),
    };
    sync.set_value(Some(binding));

    on_cleanup(move || {
        sync.try_update_value(|binding| {
            if let Some(mut binding) = binding.take() {
                binding.teardown();
            }
        });
    });

    fetch
}

/// Provides `AuthContext` to `children` and keeps it in sync with the
/// identity provider while mounted.
///
/// `provider` replaces the hosted client. Server renders without one keep the
/// initial state and never contact the identity service.
#[component]
pub fn AuthProvider(
    #[prop(optional)] config: Option<AuthConfig>,
    #[prop(optional)] provider: Option<Rc<dyn IdentityProvider>>,
    children: Children,
) -> impl IntoView {
    let config = resolve_config(config);
    let state = RwSignal::new(AuthState::initial(config.disable_auth));
    let sync = StoredValue::new_local(None::<AuthSync>);
    provide_context(AuthContext { state, sync });

    let provider = provider.or_else(|| hosted_client(&config));
    if provider.is_some() || config.disable_auth || cfg!(feature = "hydrate") {
        if let Some(fetch) = bind(state, sync, provider, config.disable_auth) {
            leptos::task::spawn_local(async move {
                if let Err(err) = fetch.await {
                    error!("auth: initial session fetch failed: {err}");
                }
            });
        }
    }

    children()
}
