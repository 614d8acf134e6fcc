//! Models module for the calculator
//!
//! Tokens, calculator state snapshots and the keypad.

pub mod calculator_state;
pub mod keypad;
pub mod token;

// Re-export commonly used types
pub use calculator_state::{CalculatorState, Display};
pub use keypad::{Button, DIGITS};
pub use token::{Operator, Token, MAX_NUMBER};
