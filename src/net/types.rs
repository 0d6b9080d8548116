//! Identity-provider DTOs shared by the auth store and the provider client.
//!
//! DESIGN
//! ======
//! Field names follow the hosted provider's JSON so sessions persisted by the
//! provider's own SDK can be restored without translation. Unknown fields are
//! ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated identity record as issued by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier (UUID string).
    pub id: String,
    /// Primary email, absent for phone/anonymous identities.
    #[serde(default)]
    pub email: Option<String>,
    /// Database role claimed by the access token (e.g. `"authenticated"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Free-form profile data set at sign-up.
    #[serde(default)]
    pub user_metadata: serde_json::Value,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Best human-readable label for this user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Opaque credential bundle for an authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds at issue time.
    #[serde(default)]
    pub expires_in: u64,
    /// Absolute expiry in unix seconds.
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub user: User,
}

impl Session {
    /// Whether the access token has passed its absolute expiry.
    ///
    /// Sessions without `expires_at` are never considered expired here; the
    /// provider rejects them on use instead.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Kind of auth transition reported by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}
