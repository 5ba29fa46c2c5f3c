//! Session state for the current browser user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the stored credentials last passed the navigation guard.
///
/// Updated by the login page on success and by logout; the guard itself
/// re-derives its decision from storage on every guarded navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionState {
    pub authenticated: bool,
}
