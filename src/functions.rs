use crate::error::Error;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Unary functions available on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine, argument in radians
    Sin,
    /// Cosine, argument in radians
    Cos,
    /// Tangent, argument in radians
    Tan,
    /// Base 10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Square root
    Sqrt,
}

impl Function {
    /// Name of the function, as written in the expression buffer
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Apply the function to `arg`, rejecting arguments outside of the real
    /// domain.
    pub fn apply(self, arg: f64) -> Result<f64, Error> {
        match self {
            Self::Sin => Ok(libm::sin(arg)),
            Self::Cos => Ok(libm::cos(arg)),
            Self::Tan => Ok(libm::tan(arg)),
            Self::Log if arg <= 0.0 => Err(Error::DomainError(format!(
                "log of non-positive number {}",
                arg
            ))),
            Self::Log => Ok(libm::log10(arg)),
            Self::Ln if arg <= 0.0 => Err(Error::DomainError(format!(
                "ln of non-positive number {}",
                arg
            ))),
            Self::Ln => Ok(libm::log(arg)),
            Self::Sqrt if arg < 0.0 => Err(Error::DomainError(format!(
                "sqrt of negative number {}",
                arg
            ))),
            Self::Sqrt => Ok(libm::sqrt(arg)),
        }
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// Named constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Symbol of the constant, as written in the expression buffer
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Numeric value of the constant
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

impl Display for Constant {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}

lazy_static! {
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        for func in &[
            Function::Sin,
            Function::Cos,
            Function::Tan,
            Function::Log,
            Function::Ln,
            Function::Sqrt,
        ] {
            map.insert(func.name(), *func);
        }
        map.shrink_to_fit();
        map
    };
    pub static ref CONSTANTS: HashMap<&'static str, Constant> = {
        let mut map = HashMap::new();
        map.insert("π", Constant::Pi);
        map.insert("pi", Constant::Pi);
        map.insert("e", Constant::E);
        map.shrink_to_fit();
        map
    };
}
