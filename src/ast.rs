use crate::error::Error;
use crate::functions::{Constant, Function};
use crate::token::{Op, Token};

/// Deepest expression tree accepted by the parser. Building and evaluating
/// the tree recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// Ast nodes for the expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A literal value
    Value(f64),
    /// A named constant
    Constant(Constant),
    /// -<arg>
    Neg(Box<Ast>),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> % <right>
    Rem(Box<Ast>, Box<Ast>),
    /// <left> ^ <right>
    Exp(Box<Ast>, Box<Ast>),
    /// fn(<arg>)
    Function(Function, Box<Ast>),
}

impl Ast {
    /// Construct the AST for a vector of tokens in reverse polish notation.
    /// This function eats the tokens as it uses them, and fails if some
    /// tokens are left over or if the tree would be deeper than
    /// [`MAX_DEPTH`].
    pub fn from_tokens(tokens: &mut Vec<Token>) -> Result<Self, Error> {
        if depth(tokens) > MAX_DEPTH {
            return Err(Error::ParseError(format!(
                "expression nested deeper than {} levels",
                MAX_DEPTH
            )));
        }
        let ast = Self::from_tokens_internal(tokens, "")?;
        if tokens.is_empty() {
            Ok(ast)
        } else {
            Err(Error::ParseError("missing operator".into()))
        }
    }

    fn from_tokens_internal(tokens: &mut Vec<Token>, context: &str) -> Result<Self, Error> {
        if let Some(token) = tokens.pop() {
            match token {
                Token::Number(value) => Ok(Self::Value(value)),
                Token::Constant(constant) => Ok(Self::Constant(constant)),
                Token::Function(func) => {
                    let arg = Box::new(Self::from_tokens_internal(tokens, " in function call")?);
                    Ok(Self::Function(func, arg))
                }
                Token::Op(Op::Pos) => Self::from_tokens_internal(tokens, " after unary plus"),
                Token::Op(Op::Neg) => {
                    let arg = Box::new(Self::from_tokens_internal(tokens, " after unary minus")?);
                    Ok(Self::Neg(arg))
                }
                Token::Op(op) => {
                    let right = Box::new(Self::from_tokens_internal(tokens, " after operator")?);
                    let left = Box::new(Self::from_tokens_internal(tokens, " before operator")?);
                    match op {
                        Op::Plus => Ok(Self::Add(left, right)),
                        Op::Minus => Ok(Self::Sub(left, right)),
                        Op::Mul => Ok(Self::Mul(left, right)),
                        Op::Div => Ok(Self::Div(left, right)),
                        Op::Rem => Ok(Self::Rem(left, right)),
                        Op::Exp => Ok(Self::Exp(left, right)),
                        Op::Neg | Op::Pos => unreachable!("unary operators are handled above"),
                    }
                }
                other => Err(Error::ParseError(format!(
                    "unexpected {:?} after shunting yard",
                    other
                ))),
            }
        } else {
            Err(Error::ParseError(format!("empty expression{}", context)))
        }
    }

    /// If the AST node correspond to a literal, get `Some(value)`. Else,
    /// get `None`
    pub fn value(&self) -> Option<f64> {
        if let Self::Value(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    /// Evaluate the tree. Functions reject arguments outside of their
    /// domain; other operations follow IEEE 754, so infinities and NaN can
    /// appear in the result.
    pub fn eval(&self) -> Result<f64, Error> {
        let value = match *self {
            Self::Value(value) => value,
            Self::Constant(constant) => constant.value(),
            Self::Neg(ref arg) => -arg.eval()?,
            Self::Add(ref left, ref right) => left.eval()? + right.eval()?,
            Self::Sub(ref left, ref right) => left.eval()? - right.eval()?,
            Self::Mul(ref left, ref right) => left.eval()? * right.eval()?,
            Self::Div(ref left, ref right) => left.eval()? / right.eval()?,
            Self::Rem(ref left, ref right) => libm::fmod(left.eval()?, right.eval()?),
            Self::Exp(ref left, ref right) => libm::pow(left.eval()?, right.eval()?),
            Self::Function(func, ref arg) => func.apply(arg.eval()?)?,
        };
        Ok(value)
    }
}

/// Depth of the tree described by RPN `tokens`, computed without recursion
fn depth(tokens: &[Token]) -> usize {
    let mut stack: Vec<usize> = Vec::new();
    for token in tokens {
        let level = match *token {
            Token::Op(Op::Neg) | Token::Op(Op::Pos) | Token::Function(_) => {
                stack.pop().unwrap_or(0) + 1
            }
            Token::Op(_) => {
                let right = stack.pop().unwrap_or(0);
                let left = stack.pop().unwrap_or(0);
                left.max(right) + 1
            }
            _ => 1,
        };
        stack.push(level);
    }
    stack.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{depth, Ast, MAX_DEPTH};
    use crate::error::Error;
    use crate::functions::{Constant, Function};
    use crate::lexer::Lexer;

    fn ast(input: &str) -> Ast {
        Ast::from_tokens(&mut Lexer::new(input).parse().unwrap()).unwrap()
    }

    #[test]
    fn build() {
        assert_eq!(ast("42").value(), Some(42.0));
        assert_eq!(
            ast("-2^2"),
            Ast::Exp(
                Box::new(Ast::Neg(Box::new(Ast::Value(2.0)))),
                Box::new(Ast::Value(2.0))
            )
        );
        assert_eq!(
            ast("sqrt(+e)"),
            Ast::Function(Function::Sqrt, Box::new(Ast::Constant(Constant::E)))
        );
        assert_eq!(ast("3 + 5").value(), None);
    }

    #[test]
    fn eval() {
        assert_eq!(ast("(3 + 5^2)*45").eval(), Ok(1260.0));
        assert_eq!(ast("7 % 3").eval(), Ok(1.0));
        assert_eq!(ast("-7 % 3").eval(), Ok(-1.0));
        assert_eq!(ast("-2^2").eval(), Ok(4.0));
        assert_eq!(ast("2^-1").eval(), Ok(0.5));
        assert_eq!(ast("10-4-3").eval(), Ok(3.0));
        assert_eq!(ast("64/4/2").eval(), Ok(8.0));
    }

    #[test]
    fn infinities_flow_through() {
        assert_eq!(ast("1/0").eval(), Ok(f64::INFINITY));
        assert_eq!(ast("1/(1/0)").eval(), Ok(0.0));
        assert_eq!(ast("1/10^400").eval(), Ok(0.0));
        assert!(ast("5%0").eval().unwrap().is_nan());
        assert_eq!(ast("0^-1").eval(), Ok(f64::INFINITY));
    }

    #[test]
    fn errors() {
        assert!(matches!(ast("sqrt(-1)").eval(), Err(Error::DomainError(_))));
        assert!(matches!(ast("ln(0)").eval(), Err(Error::DomainError(_))));
        assert!(matches!(ast("2*log(-3)").eval(), Err(Error::DomainError(_))));
    }

    #[test]
    fn depth_limit() {
        assert_eq!(depth(&Lexer::new("1").parse().unwrap()), 1);
        assert_eq!(depth(&Lexer::new("-(1+2)*sin(3)").parse().unwrap()), 4);

        let shallow = vec!["1"; MAX_DEPTH].join("+");
        assert!(Ast::from_tokens(&mut Lexer::new(&shallow).parse().unwrap()).is_ok());

        let deep = vec!["1"; MAX_DEPTH + 1].join("+");
        assert!(matches!(
            Ast::from_tokens(&mut Lexer::new(&deep).parse().unwrap()),
            Err(Error::ParseError(_))
        ));

        let negations = format!("{}1", "-".repeat(10_000));
        assert!(matches!(
            Ast::from_tokens(&mut Lexer::new(&negations).parse().unwrap()),
            Err(Error::ParseError(_))
        ));
    }
}
