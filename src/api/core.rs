//! Calculator WASM API
//!
//! One live calculator per module instance. Every mutating call runs the
//! reducer to completion and returns the new `{ expression, value }`
//! display snapshot.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{api_error, calculator_error, deserialize, serialize, to_json};
use crate::config::CalculatorConfig;
use crate::models::{Button, CalculatorState, Operator, Token};
use crate::reducer::{try_reduce, Action};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Live state plus the settings the reducer runs with
#[derive(Debug, Default)]
struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
}

// WASM-owned calculator storage (canonical source of truth)
lazy_static! {
    static ref CALCULATOR: Mutex<Calculator> = Mutex::new(Calculator::default());
}

fn with_calculator<T>(f: impl FnOnce(&mut Calculator) -> T) -> Result<T, JsValue> {
    let mut calculator = CALCULATOR
        .lock()
        .map_err(|e| api_error(format!("Failed to lock calculator: {}", e)))?;
    Ok(f(&mut calculator))
}

/// Run one action; a token the merge rejects is logged and leaves the
/// state as it was
fn apply(action: Action) -> Result<JsValue, JsValue> {
    let display = with_calculator(|calculator| {
        match try_reduce(&calculator.state, &action, &calculator.config) {
            Ok(state) => calculator.state = state,
            Err(e) => wasm_warn!("Ignoring {:?}: {}", action, e),
        }
        calculator.state.display()
    })?;

    wasm_log!("{:?} -> expression='{}', value={}", action, display.expression, display.value);
    serialize(&display, "Failed to serialize display")
}

/// Type a digit (0-9)
#[wasm_bindgen(js_name = digit)]
pub fn digit(value: u8) -> Result<JsValue, JsValue> {
    let token = Token::digit(value).map_err(calculator_error)?;
    apply(Action::Add(token))
}

/// Type `+`
#[wasm_bindgen(js_name = add)]
pub fn add() -> Result<JsValue, JsValue> {
    apply(Action::Add(Operator::Plus.into()))
}

/// Type `-`
#[wasm_bindgen(js_name = sub)]
pub fn sub() -> Result<JsValue, JsValue> {
    apply(Action::Add(Operator::Minus.into()))
}

#[wasm_bindgen(js_name = calculate)]
pub fn calculate() -> Result<JsValue, JsValue> {
    apply(Action::Calculate)
}

#[wasm_bindgen(js_name = clear)]
pub fn clear() -> Result<JsValue, JsValue> {
    apply(Action::Clear)
}

#[wasm_bindgen(js_name = removeLastToken)]
pub fn remove_last_token() -> Result<JsValue, JsValue> {
    apply(Action::RemoveLastToken)
}

/// Dispatch a serialized action, e.g. `{ type: "ADD", payload: { type: "number", value: 4 } }`
#[wasm_bindgen(js_name = dispatch)]
pub fn dispatch(action_js: JsValue) -> Result<JsValue, JsValue> {
    let action: Action = deserialize(action_js, "Invalid action")?;
    apply(action)
}

/// Dispatch the action bound to a keypad label ("0"-"9", "+", "-", "=", "AC", "C")
#[wasm_bindgen(js_name = pressButton)]
pub fn press_button(label: &str) -> Result<JsValue, JsValue> {
    let button: Button = label.parse().map_err(calculator_error)?;
    let action = button.action().map_err(calculator_error)?;
    apply(action)
}

/// Expression tokens joined for display (empty string when nothing is typed)
#[wasm_bindgen(js_name = getExpression)]
pub fn get_expression() -> Result<String, JsValue> {
    with_calculator(|calculator| calculator.state.expression_text())
}

/// Last computed value, `undefined` before the first calculate/clear/delete
#[wasm_bindgen(js_name = getValue)]
pub fn get_value() -> Result<Option<f64>, JsValue> {
    with_calculator(|calculator| calculator.state.value().map(|v| v as f64))
}

/// Current `{ expression, value }` display snapshot
#[wasm_bindgen(js_name = getDisplay)]
pub fn get_display() -> Result<JsValue, JsValue> {
    let display = with_calculator(|calculator| calculator.state.display())?;
    serialize(&display, "Failed to serialize display")
}

/// Full state (tokens and value) as a JSON string
#[wasm_bindgen(js_name = getState)]
pub fn get_state() -> Result<String, JsValue> {
    let state = with_calculator(|calculator| calculator.state.clone())?;
    to_json(&state, "Failed to serialize state")
}

/// Keypad labels in display order
#[wasm_bindgen(js_name = getKeypad)]
pub fn get_keypad() -> js_sys::Array {
    Button::keypad()
        .iter()
        .map(|button| JsValue::from_str(&button.label()))
        .collect()
}

/// Replace the active configuration, e.g. `{ overflow: "saturate" }`
#[wasm_bindgen(js_name = configure)]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    let config: CalculatorConfig = deserialize(config_js, "Invalid calculator config")?;
    wasm_info!("configure: {:?}", config);
    with_calculator(|calculator| calculator.config = config)
}

/// Start over with a fresh calculator (no value yet); configuration is kept
#[wasm_bindgen(js_name = resetCalculator)]
pub fn reset_calculator() -> Result<JsValue, JsValue> {
    let display = with_calculator(|calculator| {
        calculator.state = CalculatorState::new();
        calculator.state.display()
    })?;
    wasm_info!("Calculator reset");
    serialize(&display, "Failed to serialize display")
}
