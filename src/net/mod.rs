//! Identity-provider plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the seam the auth store depends on, `supabase` is the
//! hosted implementation, `listeners` backs auth-change subscriptions, and
//! `types` defines the session/user schema.

pub mod listeners;
pub mod provider;
pub mod supabase;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
