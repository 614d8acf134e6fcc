//! Calculator state
//!
//! [`CalculatorState`] is an immutable snapshot: the expression typed since
//! the last clear and the last computed value. New snapshots come from
//! [`reduce`](crate::reducer::reduce); nothing edits one in place.

use serde::{Deserialize, Serialize};

use crate::expression::Expression;

/// Complete calculator state (the WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// Tokens entered since the last clear
    pub expression: Expression,

    /// Last computed value; `None` until the first calculate/clear/delete
    pub value: Option<i64>,
}

/// What the display shows for a state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Display {
    pub expression: String,
    pub value: String,
}

impl CalculatorState {
    /// A fresh calculator: empty expression, no value
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expression(expression: Expression) -> Self {
        Self { expression, value: None }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Joined display values of the expression tokens
    pub fn expression_text(&self) -> String {
        self.expression.to_text()
    }

    /// Display projection; empty expression and absent value both show `0`
    pub fn display(&self) -> Display {
        let expression = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.to_text()
        };

        Display {
            expression,
            value: self.value.unwrap_or(0).to_string(),
        }
    }
}
