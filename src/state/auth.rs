//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by user-aware components through `AuthContext`; written only by
//! `AuthSync` when the provider reports a session.
//!
//! DESIGN
//! ======
//! The user is not stored separately. It is read out of the session, so a
//! user without a session (or the reverse) cannot be represented.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    session: Option<Session>,
    loading: bool,
}

impl AuthState {
    /// State at mount time. Loading until the provider answers, unless auth
    /// is disabled.
    #[must_use]
    pub fn initial(auth_disabled: bool) -> Self {
        Self { session: None, loading: !auth_disabled }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Identity of the current session, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Replace the session (and therefore the user).
    pub(crate) fn apply_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Mark loading complete. Returns `true` only on the first call.
    pub(crate) fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }
}
