//! # portfolio-client
//!
//! Leptos frontend for the portfolio site, rendered on the server and
//! hydrated in the browser.
//!
//! This crate contains the page, its section components, transient UI
//! state, the static content tables, the animation parameter tables, and the
//! wire types shared with the server's contact endpoint.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
