//! # tunestats
//!
//! Leptos + WASM client for browsing music-listening stats behind a
//! Spotify OAuth login.
//!
//! The interesting part is the session lifecycle: `state::auth` holds the
//! session, `net::auth_gateway` is its only writer, and
//! `components::protected_route` gates the personal stats view on it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
