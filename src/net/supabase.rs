//! Hosted identity provider client.
//!
//! Client-side (hydrate): the session is persisted in `localStorage` under the
//! provider SDK's key and sign-out calls `POST /auth/v1/logout` via
//! `gloo-net`. Server-side and native builds keep the session in memory only.
//!
//! TRADE-OFFS
//! ==========
//! Token refresh is not implemented. An expired session reads as signed out
//! and is discarded; the user signs in again.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::cell::RefCell;

use async_trait::async_trait;
use leptos::logging::log;

use super::listeners::{ListenerRegistry, Subscription};
use super::provider::{IdentityProvider, ProviderError};
use super::types::{AuthEvent, Session};
use crate::config::ProviderEndpoint;
use crate::util::storage;

/// Identity provider backed by the hosted auth REST API.
pub struct SupabaseClient {
    endpoint: ProviderEndpoint,
    storage_key: String,
    current: RefCell<Option<Session>>,
    listeners: ListenerRegistry,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(endpoint: ProviderEndpoint) -> Self {
        let storage_key = format!("sb-{}-auth-token", endpoint.project_ref());
        Self { endpoint, storage_key, current: RefCell::new(None), listeners: ListenerRegistry::new() }
    }

    /// `localStorage` key holding the persisted session.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn endpoint(&self) -> &ProviderEndpoint {
        &self.endpoint
    }

    /// Persist `session` as if the sign-in flow had just stored it, and notify
    /// listeners.
    #[cfg(test)]
    pub(crate) fn set_session(&self, session: Session) {
        storage::save_json(&self.storage_key, &session);
        *self.current.borrow_mut() = Some(session.clone());
        log!("auth: session set for user {}", session.user.id);
        self.listeners.emit(AuthEvent::SignedIn, Some(&session));
    }

    fn restore(&self) -> Option<Session> {
        if let Some(session) = self.current.borrow().clone() {
            return Some(session);
        }
        let restored = storage::load_json::<Session>(&self.storage_key)?;
        *self.current.borrow_mut() = Some(restored.clone());
        Some(restored)
    }

    fn clear(&self) {
        storage::remove(&self.storage_key);
        self.current.borrow_mut().take();
    }

    #[cfg(feature = "hydrate")]
    async fn revoke(&self, session: &Session) -> Result<(), ProviderError> {
        let url = format!("{}/auth/v1/logout", self.endpoint.url);
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", &self.endpoint.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        // 401/404 mean the token is already gone server-side.
        if resp.ok() || matches!(resp.status(), 401 | 404) {
            return Ok(());
        }
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        Err(ProviderError::Http { status, message })
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    async fn revoke(&self, session: &Session) -> Result<(), ProviderError> {
        let _ = session;
        Ok(())
    }
}

#[async_trait(?Send)]
impl IdentityProvider for SupabaseClient {
    async fn get_session(&self) -> Result<Option<Session>, ProviderError> {
        let Some(session) = self.restore() else {
            return Ok(None);
        };
        if session.is_expired_at(now_secs()) {
            log!("auth: discarding expired session for user {}", session.user.id);
            self.clear();
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn on_auth_state_change(&self, callback: Box<dyn Fn(AuthEvent, Option<Session>)>) -> Subscription {
        self.listeners.register(callback)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let session = self.restore();
        if let Some(session) = &session {
            self.revoke(session).await?;
        }
        self.clear();
        self.listeners.emit(AuthEvent::SignedOut, None);
        Ok(())
    }
}

fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
