//! Mealgen Web - Browser Recipe Generator
//!
//! WebAssembly front end for the mealgen backend. One page: describe a meal,
//! toggle dietary restrictions, optionally upload a pantry photo, and render
//! the generated recipe in place.

pub mod state;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize the web application
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Mealgen Web starting...");

    // Mount the Sycamore application
    sycamore::render(app::App);

    log::info!("Mealgen Web initialized");
}
