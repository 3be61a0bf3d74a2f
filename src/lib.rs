//! # batcave-ui
//!
//! Leptos + WASM frontend for the Batcave fan site: a hero banner, a gadget
//! grid backed by `/api/gadgets` with a sample-data seed action, and a
//! Batmobile gallery backed by `/api/batmobiles` with universe filtering,
//! free-text search, sorting, and a detail overlay.
//!
//! The crate splits pure state models (`state/`) from the network layer
//! (`net/`) and the rendering components (`components/`), so filtering,
//! sorting, and seed orchestration are unit-testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Browser entry point: installs the panic hook, wires console logging,
/// and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
