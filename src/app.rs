//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{books::BooksPage, login::LoginPage};
use crate::session::BrowserSession;
use crate::state::{books::BooksState, session::SessionState};

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
/// Provides the session store and shared state contexts, then mounts the
/// router: `/` redirects to `/login`, `/login` is public, `/app` is guarded.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session storage and state-store contexts, constructed once at mount.
    provide_context(BrowserSession);
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(BooksState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/booklog-ui.css"/>
        <Title text="Booklog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("app") view=BooksPage/>
            </Routes>
        </Router>
    }
}

/// The bare root path always forwards to the login route.
#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path="/login"/> }
}
