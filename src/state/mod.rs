//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`) so components depend on small
//! focused models. `auth_sync` is the only writer of `auth`.

pub mod auth;
pub mod auth_sync;
pub mod theme;
