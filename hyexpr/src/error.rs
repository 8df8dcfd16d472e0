use strum::{EnumIs, IntoStaticStr};
use thiserror::Error;

/// Which operand of a binary operation is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum ExprError {
    /// A binary operation was built without one of its operands.
    #[error("Binary operation `{operator}` is missing its {side} operand.")]
    MissingOperand { operator: char, side: Side },

    /// A function call was built without an argument.
    #[error("Function call `{function}` is missing its argument.")]
    MissingArgument { function: String },

    /// Only `sqrt` and `abs` may be called.
    #[error("Unsupported function `{name}`. Only `sqrt` and `abs` are available.")]
    UnsupportedFunction { name: String },

    /// The operator symbol is not one of `+`, `-`, `*` or `/`.
    #[error("Unknown binary operator `{0}`. Expected one of `+`, `-`, `*`, `/`.")]
    UnknownOperator(char),

    /// Variables must carry a name.
    #[error("Variable names must not be empty.")]
    EmptyVariableName,
}

pub type ExprResult<T> = Result<T, ExprError>;
