//! # client
//!
//! Leptos frontend for GitReads: the session-gated application shell and the
//! pages mounted inside it.
//!
//! The shell's gating policy (`util::gate`), render model (`state::shell`)
//! and menu state machine (`state::menu`) are plain Rust and tested without a
//! browser; `components` only draw what those models produce.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
