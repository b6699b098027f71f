//! # navbar
//!
//! Leptos + WASM navigation bar for the dotcodeschool course site.
//!
//! This crate contains the navbar components, the session/lesson/menu state
//! they render from, the REST helpers for the session provider and course
//! catalog, and the pages that mount the navbar. The `ssr` feature is used by
//! the Axum host; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
