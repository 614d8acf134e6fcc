//! Calculator WASM Module
//!
//! Core of a two-operator (`+`/`-`) calculator: tokens, the merge rules
//! that fold typed keys into an expression, left-to-right evaluation, and
//! a pure state reducer. The `api` module exposes it to JavaScript.

pub mod config;
pub mod error;
pub mod expression;
pub mod models;
pub mod reducer;
pub mod api;

// Re-export commonly used types
pub use config::{CalculatorConfig, OverflowPolicy};
pub use error::CalculatorError;
pub use expression::{evaluate, merge, Expression};
pub use models::*;
pub use reducer::{reduce, try_reduce, Action};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
        }
    }

    log::info!("Calculator WASM module initialized");
}
