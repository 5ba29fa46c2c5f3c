//! # booklog-client
//!
//! Leptos + WASM frontend bootstrap for the Booklog book tracker.
//!
//! This crate contains the application mount point, the route table with its
//! token-presence navigation guard, the injected session-storage abstraction,
//! and the pages rendered by the router. Token expiry checking is a pure
//! timestamp comparison of the decoded payload; signature verification stays
//! server-side.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
