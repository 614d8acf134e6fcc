//! Expressions: ordered token sequences
//!
//! An [`Expression`] only grows through [`merge`], which keeps number and
//! operator tokens alternating. [`evaluate`] reduces it to a single value.

pub mod evaluate;
pub mod merge;

pub use evaluate::evaluate;
pub use merge::merge;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Token;

/// Ordered sequence of tokens, evaluated left to right
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Display values of all tokens joined together, e.g. `"7-2"`
    pub fn to_text(&self) -> String {
        self.tokens.iter().map(Token::to_string).collect()
    }

    /// Copy of this expression with the last token replaced (or dropped
    /// when `replacement` is `None`)
    pub(crate) fn with_last(&self, replacement: Option<Token>) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.pop();
        tokens.extend(replacement);
        Self { tokens }
    }

    /// Copy of this expression with `extra` appended
    pub(crate) fn with_appended(&self, extra: &[Token]) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.extend_from_slice(extra);
        Self { tokens }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
