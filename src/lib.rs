//! # autoeda-web
//!
//! Leptos + WASM single-page client for autoEDA, the automated exploratory
//! data analysis tool. Renders the landing page, the authentication and
//! dashboard entry points, and the contact form, with client-side routing
//! between them.
//!
//! The model execution itself lives behind the dashboard's upload flow and
//! is not part of this crate; everything here is client-local state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// Called automatically when the WASM module loads in the browser. Sets up
/// panic reporting and console logging, then mounts the app to the body.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("autoeda-web starting");

    leptos::mount::mount_to_body(app::App);
}
