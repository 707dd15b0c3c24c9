//! # grocery-lists
//!
//! Leptos + WASM client for the shared grocery-list service. Users pick a
//! username, keep public and private lists, and browse everyone's public
//! lists.
//!
//! The browser build enables the `csr` feature. Without it every
//! browser-touching function compiles to a stub, so the state machines and
//! async flows build and test natively.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_build_env();
    if console_log::init_with_level(config.log_level).is_err() {
        log::warn!("logger already initialized");
    }
    log::info!("grocery-lists starting");
    leptos::mount::mount_to_body(app::App);
}
