//! Navigation guard gating access to routes marked `requires_auth`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate_guard` is the decision predicate: pure given the injected
//! session store and an explicit clock, and idempotent for unchanged
//! inputs. `install_auth_guard` wires it into a Leptos effect so guarded
//! pages apply identical redirect behavior.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::routes::{self, RouteEntry};
use crate::session::{LOGIN_FLAG_KEY, SessionStore, TOKEN_KEY};
use crate::util::token::is_token_valid;

/// Route redirected to when the session check fails.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirect";

/// Characters escaped in the `redirect` query value. `/` stays literal so
/// plain paths read through unchanged; the rest would otherwise split or
/// terminate the outer query string.
const REDIRECT_VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The target is public, or the stored session is live.
    Proceed,
    /// The stored session is missing or invalid; navigate to `to`.
    Redirect { to: String },
}

impl GuardDecision {
    fn redirect_from(target: &str) -> Self {
        let value = utf8_percent_encode(target, REDIRECT_VALUE_SET);
        Self::Redirect {
            to: format!("{LOGIN_PATH}?{REDIRECT_PARAM}={value}"),
        }
    }
}

/// Evaluate the guard for a navigation to `target_path`.
///
/// Routes whose matched chain carries no `requires_auth` proceed
/// unconditionally. Guarded routes require a stored token, the login flag
/// set to exactly `"true"`, and an unexpired token. On failure both storage
/// keys are cleared and the decision redirects to the login route with the
/// intended path attached as the `redirect` query parameter.
pub fn evaluate_guard(
    table: &[RouteEntry],
    target_path: &str,
    store: &impl SessionStore,
    now_secs: u64,
) -> GuardDecision {
    if !routes::requires_auth(table, target_path) {
        return GuardDecision::Proceed;
    }
    if session_is_authenticated(store, now_secs) {
        GuardDecision::Proceed
    } else {
        store.remove(TOKEN_KEY);
        store.remove(LOGIN_FLAG_KEY);
        GuardDecision::redirect_from(target_path)
    }
}

/// Authentication predicate over the two stored values and the clock.
pub fn session_is_authenticated(store: &impl SessionStore, now_secs: u64) -> bool {
    let Some(token) = store.get(TOKEN_KEY) else {
        return false;
    };
    if token.is_empty() {
        return false;
    }
    if store.get(LOGIN_FLAG_KEY).as_deref() != Some("true") {
        return false;
    }
    is_token_valid(&token, now_secs)
}

/// Current wall-clock time in seconds since epoch.
pub fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        // Date::now() is milliseconds as a non-negative f64; seconds fit
        // u64 until well past any plausible exp claim.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

/// Install the guard on a guarded page: re-evaluates whenever the location
/// changes and navigates to the login route on failure.
pub fn install_auth_guard<S, F>(store: S, navigate: F)
where
    S: SessionStore + Clone + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = leptos_router::hooks::use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardDecision::Redirect { to } =
            evaluate_guard(routes::ROUTES, &path, &store, now_secs())
        {
            navigate(&to, NavigateOptions::default());
        }
    });
}
