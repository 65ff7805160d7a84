//! Starfield Web - Leptos Frontend
//!
//! Animated starfield backgrounds and a tooltip overlay, mounted as a
//! small demo app.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starfield web starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
