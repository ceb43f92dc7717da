//! # blog-admin
//!
//! Leptos + WASM administrative interface for a blogging platform:
//! authentication screens, a post listing, and dialogs for creating,
//! editing, and deleting posts. Persistence, validation, and authorization
//! happen in a remote REST API.
//!
//! The session store (`state::session`) and the authenticated request
//! gateway (`net::gateway`) form the core: the session keeps the bearer
//! token in browser storage across reloads, and the gateway attaches it to
//! every request on the private channel.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: wires up logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
