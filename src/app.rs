//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::net::api::ApiClient;
use crate::pages::{login::LoginPage, posts::PostsPage, register::RegisterPage};
use crate::state::session::{SessionTokens, browser_session};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

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
/// Initializes the session from persistent storage exactly once, wires the
/// API client to it, and provides both (plus toast and modal state) as
/// contexts for every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(browser_session());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let api = ApiClient::new(SessionTokens(session));

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-admin.css"/>
        <Title text="Blog admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PostsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("posts")) view=PostsPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
