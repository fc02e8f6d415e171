//! # ecolearn-client
//!
//! Leptos + WASM frontend for the EcoLearn environmental-education mockup.
//!
//! This crate contains the app shell, pages, components, the session state
//! machine and the mock dataset. The `ssr` build is linked into
//! `ecolearn-server`; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
