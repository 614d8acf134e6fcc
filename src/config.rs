//! Calculator configuration
//!
//! Runtime settings the presentation layer may change through the WASM
//! API. Missing fields fall back to their defaults, so `{}` is a valid
//! configuration.

use serde::{Deserialize, Serialize};

/// What happens when a typed digit would push a number past
/// [`MAX_NUMBER`](crate::models::MAX_NUMBER)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverflowPolicy {
    /// Ignore the digit; the expression stays as it was
    #[default]
    Reject,
    /// Clamp the number to the maximum
    Saturate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    pub overflow: OverflowPolicy,
}

impl CalculatorConfig {
    pub fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}
