use super::*;
use crate::routes::ROUTES;
use crate::session::MemorySession;

use base64::Engine;

const NOW: u64 = 1_700_000_000;

fn forge_exp(exp: u64) -> String {
    let payload =
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{exp}}}"));
    format!("header.{payload}.signature")
}

fn logged_in_store(exp: u64) -> MemorySession {
    let store = MemorySession::default();
    store.set(TOKEN_KEY, &forge_exp(exp));
    store.set(LOGIN_FLAG_KEY, "true");
    store
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn login_proceeds_with_empty_storage() {
    let store = MemorySession::default();
    assert_eq!(
        evaluate_guard(ROUTES, "/login", &store, NOW),
        GuardDecision::Proceed
    );
}

#[test]
fn login_proceeds_even_with_expired_token() {
    let store = logged_in_store(NOW - 10);
    assert_eq!(
        evaluate_guard(ROUTES, "/login", &store, NOW),
        GuardDecision::Proceed
    );
    // Public navigation never touches storage.
    assert!(store.get(TOKEN_KEY).is_some());
    assert!(store.get(LOGIN_FLAG_KEY).is_some());
}

#[test]
fn root_proceeds_unconditionally() {
    let store = MemorySession::default();
    assert_eq!(
        evaluate_guard(ROUTES, "/", &store, NOW),
        GuardDecision::Proceed
    );
}

// =============================================================
// Guarded route: success
// =============================================================

#[test]
fn app_proceeds_with_live_session() {
    let store = logged_in_store(NOW + 3600);
    assert_eq!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Proceed
    );
    // Storage untouched on success.
    assert_eq!(store.get(TOKEN_KEY), Some(forge_exp(NOW + 3600)));
    assert_eq!(store.get(LOGIN_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn guard_is_idempotent() {
    let store = logged_in_store(NOW + 3600);
    let first = evaluate_guard(ROUTES, "/app", &store, NOW);
    let second = evaluate_guard(ROUTES, "/app", &store, NOW);
    assert_eq!(first, second);
}

// =============================================================
// Guarded route: failure
// =============================================================

#[test]
fn app_redirects_with_empty_storage() {
    let store = MemorySession::default();
    assert_eq!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect {
            to: "/login?redirect=/app".to_owned()
        }
    );
    // Keys stay absent.
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

#[test]
fn app_redirects_and_clears_storage_on_expired_token() {
    let store = logged_in_store(NOW - 10);
    assert_eq!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect {
            to: "/login?redirect=/app".to_owned()
        }
    );
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

#[test]
fn app_redirects_when_flag_is_not_exactly_true() {
    for flag in ["false", "TRUE", "1", ""] {
        let store = MemorySession::default();
        store.set(TOKEN_KEY, &forge_exp(NOW + 3600));
        store.set(LOGIN_FLAG_KEY, flag);
        assert_eq!(
            evaluate_guard(ROUTES, "/app", &store, NOW),
            GuardDecision::Redirect {
                to: "/login?redirect=/app".to_owned()
            },
            "flag {flag:?} must fail the check"
        );
        assert!(store.get(TOKEN_KEY).is_none());
    }
}

#[test]
fn app_redirects_when_flag_is_missing() {
    let store = MemorySession::default();
    store.set(TOKEN_KEY, &forge_exp(NOW + 3600));
    assert!(matches!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect { .. }
    ));
}

#[test]
fn app_redirects_when_token_is_empty() {
    let store = MemorySession::default();
    store.set(TOKEN_KEY, "");
    store.set(LOGIN_FLAG_KEY, "true");
    assert!(matches!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect { .. }
    ));
}

#[test]
fn app_redirects_when_token_is_malformed() {
    let store = MemorySession::default();
    store.set(TOKEN_KEY, "not-a-token");
    store.set(LOGIN_FLAG_KEY, "true");
    assert!(matches!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect { .. }
    ));
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn redirect_keeps_plain_paths_readable() {
    let store = MemorySession::default();
    assert_eq!(
        evaluate_guard(ROUTES, "/app", &store, NOW),
        GuardDecision::Redirect {
            to: "/login?redirect=/app".to_owned()
        }
    );
}

#[test]
fn redirect_escapes_nested_query_characters() {
    let store = MemorySession::default();
    assert_eq!(
        evaluate_guard(ROUTES, "/app?tab=reading", &store, NOW),
        GuardDecision::Redirect {
            to: "/login?redirect=/app%3Ftab%3Dreading".to_owned()
        }
    );
}

#[test]
fn redirect_value_round_trips_through_percent_decoding() {
    let store = MemorySession::default();
    let GuardDecision::Redirect { to } = evaluate_guard(ROUTES, "/app?tab=reading&q=a+b", &store, NOW)
    else {
        panic!("guarded navigation with empty storage must redirect");
    };
    let value = to
        .strip_prefix("/login?redirect=")
        .expect("redirect target carries the intended path");
    let decoded = percent_encoding::percent_decode_str(value)
        .decode_utf8()
        .unwrap();
    assert_eq!(decoded, "/app?tab=reading&q=a+b");
}

// =============================================================
// session_is_authenticated
// =============================================================

#[test]
fn authenticated_requires_all_three_conditions() {
    let store = logged_in_store(NOW + 60);
    assert!(session_is_authenticated(&store, NOW));

    store.remove(LOGIN_FLAG_KEY);
    assert!(!session_is_authenticated(&store, NOW));
}

#[test]
fn authenticated_is_false_at_exact_expiry() {
    let store = logged_in_store(NOW);
    assert!(!session_is_authenticated(&store, NOW));
}

// The books page consults this predicate before starting its fetch, so an
// unauthenticated visit must come back false without touching storage.
#[test]
fn authenticated_is_false_with_empty_store() {
    let store = MemorySession::default();
    assert!(!session_is_authenticated(&store, NOW));
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

// =============================================================
// now_secs
// =============================================================

#[test]
fn now_secs_is_past_2023() {
    // 2023-01-01T00:00:00Z
    assert!(now_secs() > 1_672_531_200);
}
