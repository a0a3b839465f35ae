//! # client
//!
//! Leptos + WASM browser front-end for the cold email automation service.
//!
//! This crate contains pages, components, the auth context, and the browser
//! adapters (`localStorage`, `history`, `location`, gloo-net) that plug the
//! `coldmail` session resolver into a real window.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
