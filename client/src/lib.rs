//! # client
//!
//! Leptos + WASM single-page frontend for Vākya pitch analysis.
//!
//! Pages, components, and reactive state live here. Wire types and session
//! logic come from `pitch`; view derivations (tabs, stats, practice flow)
//! come from `insights`, so this crate stays a thin rendering layer.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
