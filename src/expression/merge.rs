//! Token merging
//!
//! Folds one incoming token into the tail of an expression:
//!
//! | last token | incoming number | incoming operator |
//! |------------|-----------------|-------------------|
//! | none       | append          | append `0`, then the operator |
//! | number     | concatenate digits | append |
//! | operator   | append          | replace |

use crate::config::OverflowPolicy;
use crate::error::CalculatorError;
use crate::expression::Expression;
use crate::models::{Token, MAX_NUMBER};

/// Merge `token` into `expression`, returning the new expression
///
/// The input expression is never modified. With [`OverflowPolicy::Reject`]
/// a number that would exceed [`MAX_NUMBER`] is an error and the caller
/// keeps the old expression.
pub fn merge(
    expression: &Expression,
    token: Token,
    policy: OverflowPolicy,
) -> Result<Expression, CalculatorError> {
    match (expression.last(), token) {
        (Some(Token::Number(value)), Token::Number(incoming)) => {
            let merged = match concat_decimal(*value, incoming) {
                Some(merged) => merged,
                None => match policy {
                    OverflowPolicy::Reject => {
                        return Err(CalculatorError::NumberOverflow { value: *value, token: incoming });
                    }
                    OverflowPolicy::Saturate => MAX_NUMBER,
                },
            };
            Ok(expression.with_last(Some(Token::Number(merged))))
        }
        (None | Some(Token::Operator(_)), Token::Number(incoming)) => {
            let value = if incoming <= MAX_NUMBER {
                incoming
            } else {
                match policy {
                    OverflowPolicy::Reject => return Err(CalculatorError::NumberTooLarge(incoming)),
                    OverflowPolicy::Saturate => MAX_NUMBER,
                }
            };
            Ok(expression.with_appended(&[Token::Number(value)]))
        }
        // Leading operator applies to an implicit zero
        (None, Token::Operator(_)) => Ok(expression.with_appended(&[Token::Number(0), token])),
        (Some(Token::Operator(_)), Token::Operator(_)) => Ok(expression.with_last(Some(token))),
        (Some(Token::Number(_)), Token::Operator(_)) => Ok(expression.with_appended(&[token])),
    }
}

/// Base-10 concatenation of `value` and `suffix` (`12` ++ `3` = `123`),
/// or `None` when the result exceeds [`MAX_NUMBER`]
pub fn concat_decimal(value: u64, suffix: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(decimal_len(suffix))?;
    value
        .checked_mul(shift)?
        .checked_add(suffix)
        .filter(|merged| *merged <= MAX_NUMBER)
}

/// Number of decimal digits in `n` (`0` has one digit)
pub fn decimal_len(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operator::{Minus, Plus};

    fn merge_all(tokens: &[Token]) -> Expression {
        tokens.iter().fold(Expression::new(), |expr, token| {
            merge(&expr, *token, OverflowPolicy::Reject).unwrap()
        })
    }

    #[test]
    fn test_number_on_empty_appends() {
        let expr = merge_all(&[Token::Number(4)]);
        assert_eq!(expr.tokens(), &[Token::Number(4)]);
    }

    #[test]
    fn test_digits_concatenate() {
        let expr = merge_all(&[Token::Number(1), Token::Number(2), Token::Number(3)]);
        assert_eq!(expr.tokens(), &[Token::Number(123)]);
    }

    #[test]
    fn test_leading_zero_is_dropped() {
        let expr = merge_all(&[Token::Number(0), Token::Number(5)]);
        assert_eq!(expr.tokens(), &[Token::Number(5)]);
    }

    #[test]
    fn test_zero_after_number_shifts() {
        let expr = merge_all(&[Token::Number(5), Token::Number(0)]);
        assert_eq!(expr.tokens(), &[Token::Number(50)]);
    }

    #[test]
    fn test_multi_digit_token_concatenates_as_text() {
        let expr = merge_all(&[Token::Number(12), Token::Number(34)]);
        assert_eq!(expr.tokens(), &[Token::Number(1234)]);
    }

    #[test]
    fn test_operator_on_empty_inserts_zero() {
        let expr = merge_all(&[Token::Operator(Plus)]);
        assert_eq!(expr.tokens(), &[Token::Number(0), Token::Operator(Plus)]);
    }

    #[test]
    fn test_second_operator_replaces_first() {
        let expr = merge_all(&[Token::Number(3), Token::Operator(Plus), Token::Operator(Minus)]);
        assert_eq!(expr.tokens(), &[Token::Number(3), Token::Operator(Minus)]);
    }

    #[test]
    fn test_number_after_operator_appends() {
        let expr = merge_all(&[Token::Number(3), Token::Operator(Minus), Token::Number(9)]);
        assert_eq!(
            expr.tokens(),
            &[Token::Number(3), Token::Operator(Minus), Token::Number(9)]
        );
    }

    #[test]
    fn test_tokens_always_alternate() {
        let expr = merge_all(&[
            Token::Operator(Minus),
            Token::Operator(Plus),
            Token::Number(1),
            Token::Number(1),
            Token::Operator(Minus),
            Token::Operator(Minus),
            Token::Number(2),
        ]);
        for pair in expr.tokens().windows(2) {
            let numbers = pair.iter().filter(|t| matches!(t, Token::Number(_))).count();
            assert_eq!(numbers, 1, "adjacent tokens share a tag: {:?}", pair);
        }
        assert_eq!(expr.to_text(), "0+11-2");
    }

    #[test]
    fn test_merge_does_not_modify_input() {
        let before = Expression::from(vec![Token::Number(1)]);
        let after = merge(&before, Token::Number(2), OverflowPolicy::Reject).unwrap();
        assert_eq!(before.tokens(), &[Token::Number(1)]);
        assert_eq!(after.tokens(), &[Token::Number(12)]);
    }

    #[test]
    fn test_overflow_rejected() {
        let expr = Expression::from(vec![Token::Number(MAX_NUMBER / 10 + 1)]);
        let result = merge(&expr, Token::Number(0), OverflowPolicy::Reject);
        assert_eq!(
            result,
            Err(CalculatorError::NumberOverflow { value: MAX_NUMBER / 10 + 1, token: 0 })
        );
    }

    #[test]
    fn test_overflow_saturates() {
        let expr = Expression::from(vec![Token::Number(MAX_NUMBER)]);
        let result = merge(&expr, Token::Number(9), OverflowPolicy::Saturate).unwrap();
        assert_eq!(result.tokens(), &[Token::Number(MAX_NUMBER)]);
    }

    #[test]
    fn test_largest_number_is_reachable() {
        // i64::MAX = 9223372036854775807
        let expr = Expression::from(vec![Token::Number(MAX_NUMBER / 10)]);
        let result = merge(&expr, Token::Number(7), OverflowPolicy::Reject).unwrap();
        assert_eq!(result.tokens(), &[Token::Number(MAX_NUMBER)]);

        let result = merge(&expr, Token::Number(8), OverflowPolicy::Reject);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_fresh_number() {
        let expr = Expression::from(vec![Token::Number(1), Token::Operator(Plus)]);
        assert_eq!(
            merge(&expr, Token::Number(u64::MAX), OverflowPolicy::Reject),
            Err(CalculatorError::NumberTooLarge(u64::MAX))
        );
        let saturated = merge(&expr, Token::Number(u64::MAX), OverflowPolicy::Saturate).unwrap();
        assert_eq!(saturated.last(), Some(&Token::Number(MAX_NUMBER)));
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(u64::MAX), 20);
    }

    #[test]
    fn test_concat_decimal() {
        assert_eq!(concat_decimal(12, 3), Some(123));
        assert_eq!(concat_decimal(0, 0), Some(0));
        assert_eq!(concat_decimal(1, 0), Some(10));
        assert_eq!(concat_decimal(MAX_NUMBER, 0), None);
    }
}
