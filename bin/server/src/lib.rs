//! LexiLingua web server and UI.
//!
//! Serves the Leptos views (homepage, upload, demo) and the small set of
//! server functions behind them.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod preferences;
pub mod theme;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod health;
#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod server_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
