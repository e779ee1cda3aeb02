//! # ota-web
//!
//! Leptos + WASM frontend for Over the Algorithm.
//!
//! This crate owns the browser session: it asks the server who is signed in,
//! keeps that answer in a single `SessionStore`, and gates the login and home
//! pages through a pure route guard. Sign-in itself happens on the identity
//! provider's pages; the server endpoints live in the API service.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
