//! Storefront Web Frontend
//!
//! Leptos-based WASM frontend: catalog, product detail pages, and the
//! hosted-checkout handoff to Stripe.

mod api;
mod app;
mod auth;
mod checkout;
mod components;
mod config;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");
    leptos::mount::mount_to_body(App);
}
