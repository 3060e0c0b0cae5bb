use crate::config::Config;
use crate::editor::{CalculatorState, Operator, Paren};
use crate::expr::{evaluate, Outcome};
use crate::functions::{Constant, Function};
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::debug;

/// Keypad layout shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Digits and arithmetic operators
    #[default]
    Standard,
    /// Adds functions and constants
    Scientific,
}

impl Mode {
    /// Check if `input` is reachable from the keypad in this mode
    pub fn allows(self, input: &Input) -> bool {
        match input {
            Input::Function(_) | Input::Constant(_) => self == Self::Scientific,
            _ => true,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "scientific" => Ok(Self::Scientific),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Standard => fmt.write_str("standard"),
            Self::Scientific => fmt.write_str("scientific"),
        }
    }
}

/// Input events coming from the keypad or the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit or the decimal point
    Digit(char),
    /// A binary operator, or the negative sign
    Operator(Operator),
    /// A function name with its opening parenthesis
    Function(Function),
    /// A named constant
    Constant(Constant),
    /// A parenthesis
    Paren(Paren),
    /// Reset to an empty expression
    Clear,
    /// Delete the last character
    Backspace,
    /// Compute the expression
    Evaluate,
}

type Renderer = Box<dyn FnMut(&str)>;

/// A calculator session: the expression state, the keypad mode and the
/// display callback.
///
/// # Examples
///
/// ```
/// use calcpad::{Calculator, Config, Input, Operator};
///
/// let mut calc = Calculator::new(Config::default());
/// calc.handle(Input::Digit('2'));
/// calc.handle(Input::Operator(Operator::Add));
/// calc.handle(Input::Digit('3'));
/// calc.handle(Input::Evaluate);
/// assert_eq!(calc.display(), "5");
/// ```
pub struct Calculator {
    state: CalculatorState,
    mode: Mode,
    precision: usize,
    renderer: Option<Renderer>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.debug_struct("Calculator")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("precision", &self.precision)
            .finish()
    }
}

impl Calculator {
    /// Create a calculator with an empty expression
    pub fn new(config: Config) -> Self {
        Self {
            state: CalculatorState::new(),
            mode: config.mode,
            precision: config.precision,
            renderer: None,
        }
    }

    /// Set the callback receiving the buffer after every change
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self.render();
        self
    }

    /// Text currently shown
    pub fn display(&self) -> &str {
        self.state.buffer()
    }

    /// The expression buffer and reset flag
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current keypad layout
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the keypad layout. The expression is left untouched.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(%mode, "switching mode");
        self.mode = mode;
    }

    /// Apply a single input event
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.state.append_number(digit),
            Input::Operator(op) => self.state.append_operator(op),
            Input::Function(func) => self.state.append_function(func),
            Input::Constant(constant) => self.state.append_constant(constant),
            Input::Paren(paren) => self.state.append_paren(paren),
            Input::Clear => self.state.clear(),
            Input::Backspace => self.state.delete_last(),
            Input::Evaluate => {
                self.evaluate();
                return;
            }
        }
        self.render();
    }

    /// Evaluate the expression and show its result, or the error marker.
    pub fn evaluate(&mut self) -> Outcome {
        let outcome = evaluate(self.state.buffer());
        match outcome {
            Outcome::Number(value) => {
                debug!(expression = %self.state.buffer(), value, "evaluated")
            }
            Outcome::Error(ref err) => {
                debug!(expression = %self.state.buffer(), error = %err, "evaluation failed")
            }
        }
        self.state.show_result(outcome.render(self.precision));
        self.render();
        outcome
    }

    fn render(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer(self.state.buffer());
        }
    }
}
