//! Token model
//!
//! An expression is built from exactly two kinds of token: non-negative
//! numbers and the `+`/`-` operators. Both are closed enums; there is no
//! other variant to handle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Largest value a number token may hold.
///
/// Bounded by `i64::MAX` so every token can be added to or subtracted from
/// an `i64` result without a lossy conversion.
pub const MAX_NUMBER: u64 = i64::MAX as u64;

/// The two supported operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Operator {
    /// Symbol shown on the display
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Plus),
            "-" => Ok(Operator::Minus),
            _ => Err(CalculatorError::UnknownOperator(s.to_string())),
        }
    }
}

/// A single expression token
///
/// Serialized in the shape the UI uses:
/// `{"type":"number","value":12}` or `{"type":"operator","value":"+"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Token {
    Number(u64),
    Operator(Operator),
}

impl Token {
    /// Build a number token from a single keypad digit
    pub fn digit(d: u8) -> Result<Self, CalculatorError> {
        if d > 9 {
            return Err(CalculatorError::InvalidDigit(d));
        }
        Ok(Token::Number(u64::from(d)))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}
