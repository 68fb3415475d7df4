//! # site
//!
//! Leptos + WASM front end for the portfolio page. Mounts the page shell,
//! runs project discovery through the browser's fetch API, and wires the
//! theme toggle to `localStorage` and the DOM.
//!
//! Browser-only code is gated behind the `csr` feature; without it every
//! adapter degrades to an inert stub so the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install the console sinks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

/// Reload the page. A full reload is the only way to re-run discovery.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = refreshProjects)]
pub fn refresh_projects() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
