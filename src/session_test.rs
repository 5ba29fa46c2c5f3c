use super::*;

// =============================================================
// MemorySession
// =============================================================

#[test]
fn memory_session_roundtrip() {
    let store = MemorySession::default();
    assert!(store.get(TOKEN_KEY).is_none());

    store.set(TOKEN_KEY, "abc.def.ghi");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));

    store.remove(TOKEN_KEY);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn memory_session_remove_absent_key_is_noop() {
    let store = MemorySession::default();
    store.remove(LOGIN_FLAG_KEY);
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

#[test]
fn memory_session_clones_share_entries() {
    let store = MemorySession::default();
    let alias = store.clone();

    store.set(LOGIN_FLAG_KEY, "true");
    assert_eq!(alias.get(LOGIN_FLAG_KEY).as_deref(), Some("true"));

    alias.remove(LOGIN_FLAG_KEY);
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

// =============================================================
// BrowserSession (non-browser build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_is_inert_off_wasm() {
    let store = BrowserSession;
    store.set(TOKEN_KEY, "x.y.z");
    assert!(store.get(TOKEN_KEY).is_none());
}
