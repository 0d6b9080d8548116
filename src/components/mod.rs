//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_provider` owns auth state for its subtree, `user_menu` consumes it,
//! and `logo` depends only on the theme context.

pub mod auth_provider;
pub mod logo;
pub mod user_menu;
