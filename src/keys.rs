//! Keyboard mapping.
//!
//! Keys are named the way browsers name them (`"Enter"`, `"Backspace"`,
//! `"Escape"`, or the typed character). Function and constant names are only
//! mapped in scientific mode, where the keypad shows them.

use crate::calculator::{Input, Mode};
use crate::editor::{Operator, Paren};
use crate::functions::{CONSTANTS, FUNCTIONS};

/// Map a key name to an input event, or `None` if the key does nothing in
/// `mode`.
///
/// # Examples
///
/// ```
/// use calcpad::{map_key, Function, Input, Mode};
///
/// assert_eq!(map_key("Enter", Mode::Standard), Some(Input::Evaluate));
/// assert_eq!(map_key("sin", Mode::Scientific), Some(Input::Function(Function::Sin)));
/// assert_eq!(map_key("sin", Mode::Standard), None);
/// ```
pub fn map_key(key: &str, mode: Mode) -> Option<Input> {
    let input = match key {
        "Enter" | "=" => Input::Evaluate,
        "Backspace" => Input::Backspace,
        "Escape" => Input::Clear,
        "(" => Input::Paren(Paren::Open),
        ")" => Input::Paren(Paren::Close),
        _ => {
            if let Some(&func) = FUNCTIONS.get(key) {
                Input::Function(func)
            } else if let Some(&constant) = CONSTANTS.get(key) {
                Input::Constant(constant)
            } else {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_digit() || c == '.' {
                    Input::Digit(c)
                } else {
                    Input::Operator(Operator::from_char(c)?)
                }
            }
        }
    };
    if mode.allows(&input) {
        Some(input)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{Constant, Function};
    use test_case::test_case;

    #[test_case("7" => Some(Input::Digit('7')) ; "digit")]
    #[test_case("." => Some(Input::Digit('.')) ; "decimal point")]
    #[test_case("+" => Some(Input::Operator(Operator::Add)) ; "plus")]
    #[test_case("-" => Some(Input::Operator(Operator::Subtract)) ; "minus")]
    #[test_case("*" => Some(Input::Operator(Operator::Multiply)) ; "times")]
    #[test_case("/" => Some(Input::Operator(Operator::Divide)) ; "divide")]
    #[test_case("%" => Some(Input::Operator(Operator::Modulo)) ; "modulo")]
    #[test_case("^" => Some(Input::Operator(Operator::Power)) ; "power")]
    #[test_case("(" => Some(Input::Paren(Paren::Open)) ; "open parenthesis")]
    #[test_case(")" => Some(Input::Paren(Paren::Close)) ; "close parenthesis")]
    #[test_case("Enter" => Some(Input::Evaluate) ; "enter evaluates")]
    #[test_case("=" => Some(Input::Evaluate) ; "equals evaluates")]
    #[test_case("Backspace" => Some(Input::Backspace) ; "backspace")]
    #[test_case("Escape" => Some(Input::Clear) ; "escape clears")]
    #[test_case("a" => None ; "letter")]
    #[test_case("Shift" => None ; "modifier")]
    #[test_case("" => None ; "empty key")]
    #[test_case("sqrt" => None ; "function hidden in standard mode")]
    #[test_case("π" => None ; "constant hidden in standard mode")]
    fn standard(key: &str) -> Option<Input> {
        map_key(key, Mode::Standard)
    }

    #[test_case("sqrt" => Some(Input::Function(Function::Sqrt)) ; "square root")]
    #[test_case("ln" => Some(Input::Function(Function::Ln)) ; "natural log")]
    #[test_case("π" => Some(Input::Constant(Constant::Pi)) ; "pi symbol")]
    #[test_case("pi" => Some(Input::Constant(Constant::Pi)) ; "pi name")]
    #[test_case("e" => Some(Input::Constant(Constant::E)) ; "euler")]
    #[test_case("3" => Some(Input::Digit('3')) ; "digits still work")]
    fn scientific(key: &str) -> Option<Input> {
        map_key(key, Mode::Scientific)
    }
}
