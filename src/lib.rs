//! # duobot
//!
//! Leptos + WASM front end for two data-backed chat assistants: one over the
//! public lodging registry, one over "착한 가격" (cheap-eats) shops. Each panel
//! posts a question plus its filters to the backend and renders the answer.
//!
//! The submission flow in `chat` and the state in `state` are plain Rust and
//! are tested natively; everything that touches the browser is gated behind
//! the `csr` feature.

pub mod app;
pub mod chat;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("mounting duobot");
    leptos::mount::mount_to_body(app::App);
}
