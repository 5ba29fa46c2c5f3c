//! Injected session-storage abstraction over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard reads the stored token and login flag through the
//! `SessionStore` trait rather than touching `localStorage` directly, so
//! guard decisions stay deterministic under test. The login page writes the
//! same two keys on success; the guard clears them on invalidation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key holding the raw access token string.
pub const TOKEN_KEY: &str = "access_token";

/// Storage key holding the logged-in flag; the literal `"true"` when set.
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";

/// Key-value session storage consulted by the navigation guard.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. All operations are no-ops outside a browser
/// environment (SSR), where no session can exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for tests. Clones share the same backing map so a test
/// can hand one clone to the guard and assert against another.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
