//! Calculator WASM API
//!
//! This module provides the JavaScript-facing API for the calculator.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion, and logging
//! - `core`: Action dispatch and read projections over the live calculator

pub mod helpers;
pub mod core;

pub use self::core::*;
