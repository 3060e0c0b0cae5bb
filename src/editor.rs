//! The expression buffer and its editing rules.

use crate::format::ERROR_MARKER;
use crate::functions::{Constant, Function};
use std::fmt::{self, Display, Formatter};
use tracing::{trace, warn};

/// Content of a reset buffer
pub const EMPTY: &str = "0";

/// Binary operators of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`, also a negative sign at the start of an expression
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`, remainder of the division
    Modulo,
    /// `^`
    Power,
}

impl Operator {
    /// Character written to the buffer for this operator
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Power => '^',
        }
    }

    /// Get the operator for a buffer character or a display glyph
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Power),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

/// Parentheses of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// The expression buffer and the reset flag.
///
/// The buffer is never empty: `"0"` stands for an empty expression. The reset
/// flag is set once a result (or the error marker) is shown, so that the next
/// number, function or constant starts a new expression.
///
/// # Examples
///
/// ```
/// use calcpad::{CalculatorState, Function, Operator};
///
/// let mut state = CalculatorState::new();
/// state.append_number('5');
/// state.append_function(Function::Sin);
/// assert_eq!(state.buffer(), "5*sin(");
///
/// state.clear();
/// state.append_operator(Operator::Subtract);
/// assert_eq!(state.buffer(), "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    buffer: String,
    reset: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            buffer: EMPTY.into(),
            reset: false,
        }
    }
}

impl CalculatorState {
    /// Create a state with an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the expression
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Check if the next entry will replace the buffer
    pub fn is_reset_pending(&self) -> bool {
        self.reset
    }

    /// Append a digit or a decimal point.
    pub fn append_number(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            warn!(%digit, "ignoring non-numeric input");
            return;
        }
        if self.starts_fresh() {
            self.buffer.clear();
            self.reset = false;
        }
        self.buffer.push(digit);
        trace!(buffer = %self.buffer, "appended number");
    }

    /// Append a binary operator, or a negative sign at the start of an
    /// expression or after `(`. A trailing operator is replaced.
    pub fn append_operator(&mut self, op: Operator) {
        self.reset = false;
        let last = self.buffer.chars().last();
        if op == Operator::Subtract && (self.buffer == EMPTY || last == Some('(')) {
            if self.buffer == EMPTY {
                self.buffer.clear();
            }
            self.buffer.push('-');
        } else {
            if last.map_or(false, is_operator) {
                self.buffer.pop();
            }
            self.buffer.push(op.symbol());
        }
        trace!(buffer = %self.buffer, "appended operator");
    }

    /// Append a function name and its opening parenthesis.
    pub fn append_function(&mut self, func: Function) {
        self.append_value(func.name());
        self.buffer.push('(');
        trace!(buffer = %self.buffer, "appended function");
    }

    /// Append a named constant.
    pub fn append_constant(&mut self, constant: Constant) {
        self.append_value(constant.symbol());
        trace!(buffer = %self.buffer, "appended constant");
    }

    /// Append a parenthesis. An opening parenthesis follows the same rules as
    /// a function call.
    pub fn append_paren(&mut self, paren: Paren) {
        match paren {
            Paren::Open => {
                self.append_value("");
                self.buffer.push('(');
            }
            Paren::Close => {
                self.reset = false;
                self.buffer.push(')');
            }
        }
        trace!(buffer = %self.buffer, "appended parenthesis");
    }

    /// Reset to an empty expression
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer.push_str(EMPTY);
        self.reset = false;
        trace!("cleared");
    }

    /// Remove the last character. A shown result or error is discarded as a
    /// whole.
    pub fn delete_last(&mut self) {
        if self.reset || self.buffer == ERROR_MARKER || self.buffer.chars().nth(1).is_none() {
            self.clear();
            return;
        }
        self.buffer.pop();
        trace!(buffer = %self.buffer, "deleted last character");
    }

    /// Replace the expression with the text of an evaluation outcome. The next
    /// entry starts a new expression.
    pub fn show_result(&mut self, text: String) {
        self.buffer = text;
        if self.buffer.is_empty() {
            self.buffer.push_str(EMPTY);
        }
        self.reset = true;
    }

    fn starts_fresh(&self) -> bool {
        self.reset || self.buffer == EMPTY
    }

    /// Start a value-like entry, inserting a multiplication after a value.
    fn append_value(&mut self, text: &str) {
        if self.starts_fresh() {
            self.buffer.clear();
            self.reset = false;
        } else if self.buffer.chars().last().map_or(false, ends_value) {
            self.buffer.push('*');
        }
        self.buffer.push_str(text);
    }
}

/// Check if `c` is a binary operator character of the buffer
fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '^')
}

/// Check if `c` can end a value, so that a following function, constant or
/// parenthesis needs an explicit multiplication
fn ends_value(c: char) -> bool {
    c.is_ascii_digit() || c == 'π' || c == 'e' || c == ')'
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn state(buffer: &str) -> CalculatorState {
        CalculatorState {
            buffer: buffer.into(),
            reset: false,
        }
    }

    fn shown(buffer: &str) -> CalculatorState {
        CalculatorState {
            buffer: buffer.into(),
            reset: true,
        }
    }

    #[test]
    fn digits_concatenate() {
        let mut calc = CalculatorState::new();
        for digit in "9070.5".chars() {
            calc.append_number(digit);
        }
        assert_eq!(calc.buffer(), "9070.5");

        let mut calc = CalculatorState::new();
        calc.append_number('0');
        calc.append_number('0');
        calc.append_number('7');
        assert_eq!(calc.buffer(), "7");
    }

    #[test]
    fn number_replaces_result() {
        let mut calc = shown("42");
        calc.append_number('3');
        assert_eq!(calc.buffer(), "3");
        assert!(!calc.is_reset_pending());
    }

    #[test]
    fn number_allows_second_decimal_point() {
        let mut calc = state("1.5");
        calc.append_number('.');
        assert_eq!(calc.buffer(), "1.5.");
    }

    #[test]
    fn number_ignores_other_characters() {
        let mut calc = state("1");
        calc.append_number('x');
        assert_eq!(calc.buffer(), "1");
    }

    #[test_case("0", Operator::Subtract => "-" ; "negative sign on empty buffer")]
    #[test_case("3*(", Operator::Subtract => "3*(-" ; "negative sign after parenthesis")]
    #[test_case("0", Operator::Add => "0+" ; "operator continues zero")]
    #[test_case("5", Operator::Multiply => "5*" ; "operator appended")]
    #[test_case("5+", Operator::Divide => "5/" ; "trailing operator replaced")]
    #[test_case("5^", Operator::Subtract => "5-" ; "binary minus replaces operator")]
    #[test_case("-", Operator::Add => "+" ; "lone sign replaced")]
    #[test_case("2)", Operator::Modulo => "2)%" ; "operator after parenthesis")]
    #[test_case("2", Operator::Power => "2^" ; "power operator")]
    fn operator(buffer: &str, op: Operator) -> String {
        let mut calc = state(buffer);
        calc.append_operator(op);
        calc.buffer().to_string()
    }

    #[test]
    fn operators_never_double() {
        let ops = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Modulo,
            Operator::Power,
        ];
        for first in &ops {
            for second in &ops {
                let mut calc = state("7");
                calc.append_operator(*first);
                calc.append_operator(*second);
                assert_eq!(calc.buffer(), format!("7{}", second));
            }
        }
    }

    #[test]
    fn operator_continues_result() {
        let mut calc = shown("5");
        calc.append_operator(Operator::Add);
        assert_eq!(calc.buffer(), "5+");
        assert!(!calc.is_reset_pending());
    }

    #[test_case("5", Function::Sin => "5*sin(" ; "implicit multiplication after digit")]
    #[test_case("0", Function::Sin => "sin(" ; "replaces empty buffer")]
    #[test_case("2+", Function::Sqrt => "2+sqrt(" ; "after operator")]
    #[test_case("(", Function::Ln => "(ln(" ; "after parenthesis")]
    #[test_case("π", Function::Cos => "π*cos(" ; "after pi")]
    #[test_case("e", Function::Log => "e*log(" ; "after e")]
    #[test_case("(1)", Function::Tan => "(1)*tan(" ; "after closing parenthesis")]
    fn function(buffer: &str, func: Function) -> String {
        let mut calc = state(buffer);
        calc.append_function(func);
        calc.buffer().to_string()
    }

    #[test]
    fn function_replaces_result() {
        let mut calc = shown("12");
        calc.append_function(Function::Log);
        assert_eq!(calc.buffer(), "log(");
        assert!(!calc.is_reset_pending());
    }

    #[test_case("0", Constant::Pi => "π" ; "replaces empty buffer")]
    #[test_case("2", Constant::Pi => "2*π" ; "implicit multiplication")]
    #[test_case("π", Constant::E => "π*e" ; "constant after constant")]
    #[test_case("3-", Constant::E => "3-e" ; "after operator")]
    fn constant(buffer: &str, constant: Constant) -> String {
        let mut calc = state(buffer);
        calc.append_constant(constant);
        calc.buffer().to_string()
    }

    #[test_case("0", Paren::Open => "(" ; "open replaces empty buffer")]
    #[test_case("3+", Paren::Open => "3+(" ; "open keeps operator")]
    #[test_case("4", Paren::Open => "4*(" ; "open after value")]
    #[test_case("(2", Paren::Close => "(2)" ; "close")]
    fn paren(buffer: &str, paren: Paren) -> String {
        let mut calc = state(buffer);
        calc.append_paren(paren);
        calc.buffer().to_string()
    }

    #[test_case("12" => "1" ; "removes last character")]
    #[test_case("7" => "0" ; "single character resets")]
    #[test_case("Error" => "0" ; "error marker resets")]
    #[test_case("sin(" => "sin" ; "function name is not removed at once")]
    #[test_case("2*π" => "2*" ; "multi-byte character")]
    fn delete(buffer: &str) -> String {
        let mut calc = state(buffer);
        calc.delete_last();
        calc.buffer().to_string()
    }

    #[test]
    fn delete_discards_result() {
        let mut calc = shown("1234.5");
        calc.delete_last();
        assert_eq!(calc, CalculatorState::new());
    }

    #[test]
    fn clear_from_anything() {
        for buffer in &["0", "12+sin(", "Error", "-"] {
            let mut calc = shown(buffer);
            calc.clear();
            assert_eq!(calc.buffer(), "0");
            assert!(!calc.is_reset_pending());
        }
    }

    #[test]
    fn show_result() {
        let mut calc = state("2+3");
        calc.show_result("5".into());
        assert_eq!(calc.buffer(), "5");
        assert!(calc.is_reset_pending());
    }
}
