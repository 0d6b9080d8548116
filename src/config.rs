//! Auth configuration parsed from environment-style key/value lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds have no process environment, so values are baked in at
//! compile time through `option_env!`. SSR and native tests read the process
//! environment instead. Both paths share `from_lookup` so parsing stays in one
//! place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DISABLE_AUTH_VAR: &str = "DISABLE_AUTH";
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required config var: {var}")]
    MissingVar { var: &'static str },
}

/// Connection settings for the hosted identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub url: String,
    pub anon_key: String,
}

impl ProviderEndpoint {
    /// Project ref used to namespace the persisted session key.
    ///
    /// `https://abcd.supabase.co` yields `abcd`; anything without a host
    /// segment falls back to `local`.
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let host = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or_default();
        match host.split('.').next() {
            Some(first) if !first.is_empty() => first,
            _ => "local",
        }
    }
}

/// Typed auth configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// When set, the auth store never contacts the provider.
    pub disable_auth: bool,
    /// `None` only when auth is disabled.
    pub endpoint: Option<ProviderEndpoint>,
}

impl AuthConfig {
    /// Config for local development without a backend.
    #[must_use]
    pub fn disabled() -> Self {
        Self { disable_auth: true, endpoint: None }
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Required unless auth is disabled:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `DISABLE_AUTH`: only the exact string `true` disables auth
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let disable_auth = parse_disable_auth(lookup(DISABLE_AUTH_VAR).as_deref());
        if disable_auth {
            return Ok(Self::disabled());
        }

        let url = lookup(SUPABASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar { var: SUPABASE_URL_VAR })?;
        let anon_key = lookup(SUPABASE_ANON_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar { var: SUPABASE_ANON_KEY_VAR })?;

        Ok(Self {
            disable_auth,
            endpoint: Some(ProviderEndpoint {
                url: url.trim().trim_end_matches('/').to_owned(),
                anon_key: anon_key.trim().to_owned(),
            }),
        })
    }

    /// Build config from the process environment (SSR / native).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from values captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                DISABLE_AUTH_VAR => option_env!("DISABLE_AUTH"),
                SUPABASE_URL_VAR => option_env!("SUPABASE_URL"),
                SUPABASE_ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

fn parse_disable_auth(raw: Option<&str>) -> bool {
    raw == Some("true")
}
