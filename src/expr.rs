use crate::ast::Ast;
use crate::format::{format_number, ERROR_MARKER};
use crate::lexer::Lexer;
use crate::Error;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use calcpad::{eval, Error};
///
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("3*(-5)"), Ok(-15.0));
/// assert_eq!(eval("1/(1/0)"), Ok(0.0));
/// assert_eq!(eval("1/0"), Err(Error::NotFinite));
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// Evaluate the text of an expression buffer into an [`Outcome`].
///
/// # Example
///
/// ```
/// # use calcpad::{evaluate, Outcome};
///
/// assert_eq!(evaluate("2^10"), Outcome::Number(1024.0));
/// assert!(evaluate("sqrt(-1)").is_error());
/// ```
pub fn evaluate(input: &str) -> Outcome {
    eval(input).into()
}

/// Result of evaluating an expression buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A finite result
    Number(f64),
    /// Evaluation failed
    Error(Error),
}

impl Outcome {
    /// Check if the evaluation failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text to show in place of the expression: the formatted number, or the
    /// error marker.
    ///
    /// ```
    /// # use calcpad::evaluate;
    /// assert_eq!(evaluate("0.1+0.2").render(8), "0.3");
    /// assert_eq!(evaluate("2+").render(8), "Error");
    /// ```
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Self::Number(value) => format_number(value, precision),
            Self::Error(_) => ERROR_MARKER.into(),
        }
    }
}

impl From<Result<f64, Error>> for Outcome {
    fn from(result: Result<f64, Error>) -> Self {
        match result {
            Ok(value) => Self::Number(value),
            Err(err) => Self::Error(err),
        }
    }
}

/// A parsed mathematical expression.
///
/// # Examples
/// ```
/// # use calcpad::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
///
/// let expr = Expr::parse("-2 * π").unwrap();
/// assert_eq!(expr.eval(), Ok(-2.0 * std::f64::consts::PI));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use calcpad::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * sin(2)").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3eff + 5 * 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(expression);
        let ast = Ast::from_tokens(&mut lexer.parse()?)?;
        Ok(Self { ast })
    }

    /// Evaluate the expression. Only the final value has to be finite:
    /// an intermediate infinity may still lead to a finite result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use calcpad::Expr;
    /// let expr = Expr::parse("2^3^2").unwrap();
    /// assert_eq!(expr.eval(), Ok(512.0));
    /// ```
    pub fn eval(&self) -> Result<f64, Error> {
        let value = self.ast.eval()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NotFinite)
        }
    }

    /// The parsed expression tree
    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}
