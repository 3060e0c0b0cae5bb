use crate::functions::{Constant, Function};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A named constant
    Constant(Constant),
    /// A function name, always followed by `(`
    Function(Function),
    /// An operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Rem,
    Exp,
    /// Unary minus
    Neg,
    /// Unary plus
    Pos,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Exp => 3,
            Self::Neg | Self::Pos => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Rem => true,
            Self::Exp | Self::Neg | Self::Pos => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Get the prefix form of a binary operator found where an operand was
    /// expected
    pub fn to_unary(self) -> Option<Self> {
        match self {
            Self::Minus | Self::Neg => Some(Self::Neg),
            Self::Plus | Self::Pos => Some(Self::Pos),
            _ => None,
        }
    }
}
