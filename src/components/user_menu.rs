//! Signed-in user label and sign-out button.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use leptos::prelude::*;

use super::auth_provider::use_auth;
use crate::net::types::User;

/// Label shown in place of the user while auth state is unresolved.
pub const LOADING_LABEL: &str = "Loading\u{2026}";
pub const SIGNED_OUT_LABEL: &str = "Not signed in";

/// Text for the user slot.
pub fn user_label(loading: bool, user: Option<&User>) -> String {
    if loading {
        return LOADING_LABEL.to_owned();
    }
    user.map_or_else(|| SIGNED_OUT_LABEL.to_owned(), |u| u.display_name().to_owned())
}

/// User slot for the sidebar. Must be rendered inside an `AuthProvider`.
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth();

    let label = move || user_label(auth.is_loading(), auth.user().as_ref());
    let signed_in = move || !auth.is_loading() && auth.user().is_some();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = auth.sign_out().await {
                leptos::logging::error!("auth: sign-out failed: {err}");
            }
        });
    };

    view! {
        <div class="user-menu">
            <span class="user-menu__label">{label}</span>
            <Show when=signed_in>
                <button class="btn user-menu__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
