//! State reducer
//!
//! `reduce(state, action, config)` returns the next snapshot. The four
//! actions never fail: a digit rejected by the overflow policy leaves the
//! state as it was. `try_reduce` reports that rejection instead.

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::CalculatorError;
use crate::expression::{evaluate, merge, Expression};
use crate::models::{CalculatorState, Token};

/// Calculator actions
///
/// Serialized as `{"type":"ADD","payload":{...}}`, `{"type":"CALCULATE"}`,
/// `{"type":"CLEAR"}` and `{"type":"REMOVE_LAST_TOKEN"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Add(Token),
    Calculate,
    Clear,
    RemoveLastToken,
}

/// Compute the state that follows `action`
pub fn reduce(state: &CalculatorState, action: &Action, config: &CalculatorConfig) -> CalculatorState {
    try_reduce(state, action, config).unwrap_or_else(|e| {
        log::warn!("Ignoring {:?}: {}", action, e);
        state.clone()
    })
}

/// Like [`reduce`], but a token rejected by the merge is returned as an
/// error; the caller keeps `state`
pub fn try_reduce(
    state: &CalculatorState,
    action: &Action,
    config: &CalculatorConfig,
) -> Result<CalculatorState, CalculatorError> {
    log::debug!("reduce {:?} on '{}'", action, state.expression);

    Ok(match action {
        Action::Add(token) => CalculatorState {
            expression: merge(&state.expression, *token, config.overflow)?,
            value: state.value,
        },
        Action::Calculate => CalculatorState {
            expression: state.expression.clone(),
            value: Some(evaluate(&state.expression)),
        },
        Action::RemoveLastToken => CalculatorState {
            expression: remove_last_token(&state.expression),
            value: Some(0),
        },
        Action::Clear => CalculatorState {
            expression: Expression::new(),
            value: Some(0),
        },
    })
}

/// Drop the last digit of a trailing multi-digit number, otherwise the
/// whole last token
pub fn remove_last_token(expression: &Expression) -> Expression {
    match expression.last() {
        None => expression.clone(),
        Some(Token::Number(value)) if *value >= 10 => {
            expression.with_last(Some(Token::Number(value / 10)))
        }
        Some(_) => expression.with_last(None),
    }
}
