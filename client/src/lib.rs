//! # client
//!
//! Leptos + WASM frontend for the LeadFlow lead-management CRM.
//!
//! This crate contains the route pages, shared components, per-screen state,
//! and the REST helpers that talk to the lead backend. Wire types, validation,
//! and filtering live in the `schema` crate so the CLI shares them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
