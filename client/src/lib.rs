//! # client
//!
//! Leptos + WASM frontend for the SpendWise expense tracker.
//!
//! This crate contains pages, components, session and view state, the typed
//! backend gateway, and the route guard. All business logic lives behind the
//! REST backend; this crate binds its responses to the UI and owns the
//! browser-side session lifecycle.

#![recursion_limit = "256"]
pub mod app;
pub mod callback;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod route_guard;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
