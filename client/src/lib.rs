//! # client
//!
//! Leptos frontend for Tesora: the marketing landing page at `/` and the
//! mock supply-chain dashboard at `/dashboard`.
//!
//! Everything runs on fixtures. Simulated work (file parsing, supplier
//! matching, quote scoring, ERP encoding) sits behind the traits in
//! `engine` so real backends can replace the mocks without touching views.

pub mod app;
pub mod components;
pub mod engine;
pub mod fixtures;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
