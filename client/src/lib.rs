//! Browser front end for the performance code optimizer.
//!
//! ARCHITECTURE
//! ============
//! A Leptos application with a `hydrate`/`ssr` feature split: the server
//! renders the shell, the browser hydrates it and owns all interaction.
//! `state` holds plain, natively-testable structs behind `RwSignal`
//! contexts; `net` talks to the external optimization backend; `util`
//! isolates browser concerns (hash, autosize) and the reply formatter.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
