//! Theme signal from the display environment.
//!
//! Reads the explicit preference from `localStorage` (`theme` key holding
//! `light`, `dark` or `system`) and the system theme from the
//! `prefers-color-scheme` media query. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Off-browser builds report the default preference and an unknown system
//! theme, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "theme_env_test.rs"]
mod theme_env_test;

use leptos::prelude::*;

use crate::state::theme::{SystemTheme, ThemePreference, ThemeState};
use crate::util::storage;

const STORAGE_KEY: &str = "theme";

/// Read the explicit theme preference, falling back to `System`.
pub fn read_preference() -> ThemePreference {
    storage::load_string(STORAGE_KEY)
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or_default()
}

/// Read the system theme, `None` when no display environment is available.
pub fn read_system_theme() -> Option<SystemTheme> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let query = window.match_media("(prefers-color-scheme: dark)").ok().flatten()?;
        Some(if query.matches() { SystemTheme::Dark } else { SystemTheme::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Snapshot both theme inputs.
pub fn read_theme_state() -> ThemeState {
    ThemeState { preference: read_preference(), system: read_system_theme() }
}

/// Theme inputs shared with the component tree.
#[derive(Clone, Copy)]
pub struct ThemeContext(pub RwSignal<ThemeState>);

/// Provide a `ThemeContext` that picks up the environment once mounted.
///
/// Before mount (and on the server) it holds the default state.
pub fn provide_theme() -> ThemeContext {
    let theme = RwSignal::new(ThemeState::default());
    Effect::new(move || theme.set(read_theme_state()));
    let context = ThemeContext(theme);
    provide_context(context);
    context
}
