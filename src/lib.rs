#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::module_name_repetitions
)]

//! Calcpad, the core of a keypad calculator.
//!
//! This crate holds the two parts of a button-and-keyboard calculator that
//! carry actual logic: the editor that builds the expression text one key at
//! a time, and the evaluator that turns that text into a number. The easiest
//! way to use it is through a [`Calculator`](struct.Calculator.html):
//!
//! ```
//! use calcpad::{Calculator, Config, Function, Input, Mode, Paren};
//!
//! let mut calc = Calculator::new(Config::default());
//! calc.set_mode(Mode::Scientific);
//! calc.handle(Input::Digit('2'));
//! calc.handle(Input::Function(Function::Sqrt));
//! assert_eq!(calc.display(), "2*sqrt(");
//!
//! calc.handle(Input::Digit('9'));
//! calc.handle(Input::Paren(Paren::Close));
//! calc.handle(Input::Evaluate);
//! assert_eq!(calc.display(), "6");
//! ```
//!
//! The evaluator can also be used on its own, with the
//! [`eval`](fn.eval.html) function:
//!
//! ```
//! assert_eq!(calcpad::eval("3 + 5 * 2"), Ok(13.0));
//! assert!(calcpad::eval("1 / 0").is_err());
//! ```
//!
//! # Editing rules
//!
//! The buffer is never empty, `"0"` standing for an empty expression. After
//! a result is shown, the next digit, function or constant starts a new
//! expression while an operator continues from the result. Typing an
//! operator right after another replaces it, except for `-` at the start of
//! an expression or after `(` which is a negative sign. A multiplication is
//! inserted between a value and a following function, constant or `(`.
//!
//! # Language definition
//!
//! The expressions accepted by the evaluator contain:
//!
//! - decimal literals: `12`, `0.5`, `.5`;
//! - the constants `π` (or `pi`) and `e`;
//! - left and right parenthesis;
//! - binary operators `+`, `-`, `*`, `/`, `%` (remainder) and `^`
//!   (exponentiation), with `×`, `÷` and `−` accepted as synonyms;
//! - unary `-` and `+`, binding tighter than `^`;
//! - function calls `sin(x)`, `cos(x)`, `tan(x)` (radians), `log(x)`
//!   (base 10), `ln(x)` and `sqrt(x)`.
//!
//! Any other symbol is forbidden in the input. Division by zero, functions
//! outside of their real domain and non finite values are errors.
//!
//! # Technical details
//!
//! The evaluator is an AST interpreter, using the shunting-yard algorithm to
//! parse the expressions. It works only with `f64` data.

#[macro_use]
extern crate lazy_static;

mod ast;
mod calculator;
mod config;
mod editor;
mod error;
mod expr;
mod format;
mod functions;
mod keys;
mod lexer;
mod token;

pub use ast::Ast;
pub use calculator::{Calculator, Input, Mode};
pub use config::{Config, MAX_PRECISION};
pub use editor::{CalculatorState, Operator, Paren};
pub use error::{ConfigError, Error};
pub use expr::{eval, evaluate, Expr, Outcome};
pub use format::{format_number, tail, DEFAULT_PRECISION, ERROR_MARKER};
pub use functions::{Constant, Function};
pub use keys::map_key;
