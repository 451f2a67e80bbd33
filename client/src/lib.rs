//! # client
//!
//! Leptos + WASM frontend for the TeachDesk teacher dashboard.
//!
//! This crate contains the route-level pages, reusable components, plain
//! application state (course workspace, creation wizard, auth forms, mock
//! tables), and small browser utilities. The `server` crate renders it with
//! the `ssr` feature; the browser bundle hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
