//! # client
//!
//! Leptos + WASM frontend for the classroom attendance dashboard.
//!
//! This crate contains pages, components, application state, and REST
//! helpers. Browser-only behavior (timers, camera, storage, beacons) is
//! compiled under the `hydrate` feature; the `ssr` feature lets the server
//! render the same components.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
