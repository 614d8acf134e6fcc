//! Left-to-right evaluation
//!
//! No precedence: `5-3+2` is `(5-3)+2`. Each number is applied with the
//! most recent operator before it, starting from an implicit `+`.

use crate::expression::Expression;
use crate::models::{Operator, Token};

/// Reduce an expression to a single value
///
/// An empty expression is `0`; a trailing operator is ignored. Arithmetic
/// saturates at the `i64` bounds instead of wrapping.
pub fn evaluate(expression: &Expression) -> i64 {
    let mut result: i64 = 0;
    let mut pending = Operator::Plus;

    for token in expression.tokens() {
        match *token {
            Token::Number(value) => {
                result = match pending {
                    Operator::Plus => result.saturating_add_unsigned(value),
                    Operator::Minus => result.saturating_sub_unsigned(value),
                };
            }
            Token::Operator(op) => pending = op,
        }
    }

    result
}
