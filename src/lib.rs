//! # frontend-auth
//!
//! Leptos + WASM presentation layer for a hosted identity service.
//!
//! The crate mirrors the identity provider's auth state into a reactive
//! context (`components::auth_provider`) and renders a theme-aware logo
//! (`components::logo`). Provider access goes through the
//! `net::provider::IdentityProvider` seam so the sync lifecycle in
//! `state::auth_sync` runs unchanged against fakes in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("frontend-auth: hydrating");
    leptos::mount::hydrate_body(app::App);
}
