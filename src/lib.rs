//! # roadready-web
//!
//! Leptos + WASM client for the RoadReady driving and motorcycle school site.
//!
//! The session store in [`state::session`] holds the signed-in student, mirrors
//! `{token, user, isAuthenticated}` to `localStorage`, and restores it on the
//! next page load. Pages and components observe it through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
