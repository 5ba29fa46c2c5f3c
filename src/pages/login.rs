//! Login page: exchanges credentials for a token and seeds session storage.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::{self, LoginRequest};
use crate::session::{BrowserSession, LOGIN_FLAG_KEY, SessionStore, TOKEN_KEY};
use crate::state::session::SessionState;
use crate::util::guard::REDIRECT_PARAM;

/// Login page — on success stores the token and login flag, then navigates
/// to the `redirect` query parameter when present, else `/app`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<BrowserSession>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let req = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&req).await {
                Ok(resp) => {
                    store.set(TOKEN_KEY, &resp.access_token);
                    store.set(LOGIN_FLAG_KEY, "true");
                    session.update(|s| s.authenticated = true);
                    let target = query
                        .get_untracked()
                        .get(REDIRECT_PARAM)
                        .unwrap_or_else(|| "/app".to_owned());
                    navigate(&target, NavigateOptions::default());
                }
                Err(msg) => {
                    log::warn!("login failed: {msg}");
                    error.set(Some(msg));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Booklog"</h1>
            <p>"Track what you are reading"</p>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=username
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=pending>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            {move || {
                error
                    .get()
                    .map(|msg| view! { <p class="login-page__error">{msg}</p> })
            }}
        </div>
    }
}
