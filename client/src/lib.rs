//! # client
//!
//! Leptos + WASM frontend for the NyayaSahayak legal-information site.
//!
//! Pages render the marketing content and the community blog flow (list,
//! detail with comments, creation form). Post data lives in the remote
//! content service and identity in the external auth provider; this crate
//! only holds request-scoped copies of both.

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
