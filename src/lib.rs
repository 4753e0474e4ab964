//! Diary SPA client: login plus a personal diary against a remote HTTP API.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the auth and diary stores provided via Leptos context,
//! `net` wraps the REST API, `util` isolates browser concerns (token
//! persistence, login redirects), and `pages`/`components` render routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
