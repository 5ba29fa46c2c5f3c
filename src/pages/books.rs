//! Guarded book-list page rendered at `/app`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::{BrowserSession, LOGIN_FLAG_KEY, SessionStore, TOKEN_KEY};
use crate::state::books::BooksState;
use crate::state::session::SessionState;
use crate::util::guard::{LOGIN_PATH, install_auth_guard, now_secs, session_is_authenticated};

/// Book list page — requires a live session; otherwise the guard redirects
/// to `/login` with the intended path attached.
#[component]
pub fn BooksPage() -> impl IntoView {
    let store = expect_context::<BrowserSession>();
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();

    install_auth_guard(store, use_navigate());

    // Fetch only when the stored session passes the check; otherwise the
    // guard is about to redirect and the request would be wasted.
    if session_is_authenticated(&store, now_secs()) {
        books.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::fetch_books().await {
                Ok(items) => {
                    books.update(|s| {
                        s.items = items;
                        s.loading = false;
                    });
                }
                Err(msg) => {
                    books.update(|s| {
                        s.loading = false;
                        s.error = Some(msg);
                    });
                }
            }
        });
    }

    let navigate = use_navigate();
    let on_logout = move |_| {
        store.remove(TOKEN_KEY);
        store.remove(LOGIN_FLAG_KEY);
        session.update(|s| s.authenticated = false);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="books-page">
            <header class="books-page__header">
                <h1>"My Books"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            {move || {
                let state = books.get();
                if state.loading {
                    view! { <p>"Loading books..."</p> }.into_any()
                } else if let Some(msg) = state.error {
                    view! { <p class="books-page__error">{msg}</p> }.into_any()
                } else if state.items.is_empty() {
                    view! { <p>"No books yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="books-page__list">
                            {state
                                .items
                                .into_iter()
                                .map(|book| {
                                    view! {
                                        <li class="books-page__item">
                                            <span class="books-page__title">{book.title}</span>
                                            <span class="books-page__author">{book.author}</span>
                                            <span class="books-page__status">{book.status}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
