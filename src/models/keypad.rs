//! Keypad buttons
//!
//! The fixed button set of the calculator and the action each one
//! dispatches. Layout is two control keys, the operator row, then the
//! digit grid in [`DIGITS`] order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;
use crate::models::{Operator, Token};
use crate::reducer::Action;

/// Digit keys in grid order
pub const DIGITS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// "AC": clear everything
    AllClear,
    /// "C": delete the last digit or operator
    ClearEntry,
    Add,
    Subtract,
    Equals,
    Digit(u8),
}

impl Button {
    /// Every button in display order
    pub fn keypad() -> Vec<Button> {
        let mut buttons = vec![
            Button::AllClear,
            Button::ClearEntry,
            Button::Add,
            Button::Subtract,
            Button::Equals,
        ];
        buttons.extend(DIGITS.iter().map(|d| Button::Digit(*d)));
        buttons
    }

    pub fn label(&self) -> String {
        match self {
            Button::AllClear => "AC".to_string(),
            Button::ClearEntry => "C".to_string(),
            Button::Add => "+".to_string(),
            Button::Subtract => "-".to_string(),
            Button::Equals => "=".to_string(),
            Button::Digit(d) => d.to_string(),
        }
    }

    /// Action dispatched when the button is pressed
    pub fn action(&self) -> Result<Action, CalculatorError> {
        Ok(match self {
            Button::AllClear => Action::Clear,
            Button::ClearEntry => Action::RemoveLastToken,
            Button::Add => Action::Add(Operator::Plus.into()),
            Button::Subtract => Action::Add(Operator::Minus.into()),
            Button::Equals => Action::Calculate,
            Button::Digit(d) => Action::Add(Token::digit(*d)?),
        })
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Button {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" => Ok(Button::AllClear),
            "C" => Ok(Button::ClearEntry),
            "+" => Ok(Button::Add),
            "-" => Ok(Button::Subtract),
            "=" => Ok(Button::Equals),
            _ => match s.parse::<u8>() {
                Ok(d) if d <= 9 && s.len() == 1 => Ok(Button::Digit(d)),
                _ => Err(CalculatorError::UnknownButton(s.to_string())),
            },
        }
    }
}
