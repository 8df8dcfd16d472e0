use std::fmt;
use std::str::FromStr;

use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::error::{ExprError, ExprResult};

/// Discriminant of an [`Expr`](crate::expr::Expr) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum ExprType {
    // Leaves
    Number,
    Variable,

    // Composites
    BinaryOperation,
    FunctionCall,
}

/// Binary arithmetic operators. The discriminant is the ASCII symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Operator {
    Plus = b'+',
    Minus = b'-',
    Mul = b'*',
    Div = b'/',
}

impl Operator {
    /// Symbol used by the canonical printer.
    #[inline]
    pub fn symbol(self) -> char {
        self as u8 as char
    }

    /// Combine two already evaluated operands with IEEE-754 semantics.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Plus => lhs + rhs,
            Operator::Minus => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ExprError;

    fn try_from(symbol: char) -> ExprResult<Self> {
        u8::try_from(symbol)
            .ok()
            .and_then(Operator::from_repr)
            .ok_or(ExprError::UnknownOperator(symbol))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Functions that may appear in a [`FunctionCall`](crate::expr::defs::FunctionCall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Function {
    /// Square root, NaN for negative input.
    Sqrt,
    /// Absolute value.
    Abs,
}

impl Function {
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[inline]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sqrt => arg.sqrt(),
            Function::Abs => arg.abs(),
        }
    }

    /// Resolve a function by its exact (case-sensitive) name.
    pub fn lookup(name: &str) -> ExprResult<Self> {
        Function::from_str(name).map_err(|_| ExprError::UnsupportedFunction {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
