//! Theme-aware logo.
//!
//! The first render pass (server render, then hydration) never inverts, so
//! both sides produce identical markup. Once mounted the logo follows the
//! effective theme.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::theme_env::ThemeContext;

pub const LOGO_SRC: &str = "/logo.svg";

/// Whether the logo should render inverted.
pub fn should_invert(mounted: bool, theme: &ThemeState) -> bool {
    mounted && theme.is_dark()
}

/// CSS classes for the logo image.
pub fn logo_class(invert: bool) -> &'static str {
    if invert { "invert flex-shrink-0" } else { "flex-shrink-0" }
}

/// Logo classes tracking `theme` once `mounted` is set. Without a theme
/// context the logo stays uninverted.
pub fn reactive_logo_class(
    theme: Option<ThemeContext>,
    mounted: ReadSignal<bool>,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || {
        let theme = theme.map_or_else(ThemeState::default, |ctx| ctx.0.get());
        logo_class(should_invert(mounted.get(), &theme))
    }
}

/// Square logo image, `size` units wide and high.
#[component]
pub fn Logo(#[prop(default = 24)] size: u32) -> impl IntoView {
    let (mounted, set_mounted) = signal(false);

    // Effects only run in the browser, after the initial render.
    Effect::new(move || set_mounted.set(true));

    let class = reactive_logo_class(use_context::<ThemeContext>(), mounted);

    view! { <img src=LOGO_SRC alt="Logo" width=size height=size class=class/> }
}
