//! # sleepr-web
//!
//! Leptos + WASM frontend for the Sleepr dynasty fantasy-football manager.
//!
//! This crate contains pages, components, application state, and the HTTP
//! gateway to the Sleepr API. The session subsystem (`state::session`,
//! `state::store`, `net::gateway`, `util::guard`, `state::login`) decides who
//! is signed in and gates every protected route on it; the pages on top are
//! thin views over gateway calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
