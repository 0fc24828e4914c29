//! Morse Web UI - Leptos-based frontend.
//!
//! Provides a browser-based interface for the transcoder:
//! - Encode/Decode selector
//! - Message input with Translate and Clear actions
//! - Output display

pub mod app;
pub mod components;
pub mod logger;
pub mod state;

use wasm_bindgen::prelude::*;

pub use app::App;
pub use state::{provide_app_context, use_app_context, AppContext};

/// Mount the application into the document body.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("Morse translator starting");
    leptos::mount_to_body(App);
}
