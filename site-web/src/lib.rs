//! Basement - single-page promo site with a Base wallet checkout
//!
//! Leptos CSR application compiled to WASM. The intro screen fades into the
//! main basement screen, which gates a mint popup and a fixed-price floppy
//! purchase behind wallet connection.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages end up in the browser console instead of vanishing.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("basement starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
