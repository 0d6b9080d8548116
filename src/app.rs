//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::auth_provider::AuthProvider;
use crate::components::logo::Logo;
use crate::components::user_menu::UserMenu;
use crate::util::theme_env::provide_theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme and auth contexts, then renders the sidebar header.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/frontend-auth.css"/>
        <Title text="Workspace"/>

        <AuthProvider>
            <aside class="sidebar">
                <div class="sidebar__header">
                    <Logo/>
                    <span class="sidebar__title">"Workspace"</span>
                </div>
                <UserMenu/>
            </aside>
        </AuthProvider>
    }
}
