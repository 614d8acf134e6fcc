//! Error types for the calculator core
//!
//! The reducer itself never fails. These errors describe input that is
//! rejected before (or while) it becomes a token, and are surfaced to
//! JavaScript as strings by the WASM API.

use thiserror::Error;

/// Errors raised while building tokens or merging them into an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A keypad digit outside 0-9
    #[error("Invalid digit: {0} (must be 0-9)")]
    InvalidDigit(u8),

    /// An operator symbol other than `+` or `-`
    #[error("Unknown operator: '{0}' (expected '+' or '-')")]
    UnknownOperator(String),

    /// A keypad label with no matching button
    #[error("Unknown button: '{0}'")]
    UnknownButton(String),

    /// A number token larger than the largest representable number
    #[error("Number too large: {0} exceeds {max}", max = crate::models::MAX_NUMBER)]
    NumberTooLarge(u64),

    /// Digit concatenation would exceed the largest representable number
    #[error("Number overflow: appending {token} to {value} exceeds {max}", max = crate::models::MAX_NUMBER)]
    NumberOverflow { value: u64, token: u64 },
}
