//! Concrete expression nodes.
//!
//! Each node type validates its invariants when it is built, so a value of any
//! of these types is always well formed. Composite nodes own their children.
use std::fmt;

use crate::{
    error::{ExprError, ExprResult, Side},
    expr::{
        Expr,
        variant::{Function, Operator},
    },
    transform::Transformer,
};

// ================================ Number ================================

/// Floating-point literal.
///
/// Equality compares the bit pattern of the value, so a `NaN` literal is
/// structurally equal to itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    value: f64,
}

impl Number {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn evaluate(&self) -> f64 {
        self.value
    }

    pub fn print(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn transform<T: Transformer + ?Sized>(&self, tr: &mut T) -> Expr {
        tr.transform_number(self)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    /// Six fractional digits like C's `%f`: `inf`, `-inf`, `nan` or `-nan` for non-finite values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        if v.is_nan() {
            f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" })
        } else if v.is_infinite() {
            f.write_str(if v.is_sign_negative() { "-inf" } else { "inf" })
        } else {
            write!(f, "{v:.6}")
        }
    }
}

// =============================== Variable ===============================

/// Free variable. There is no environment, so it always evaluates to `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// Value every variable evaluates to.
    pub const PLACEHOLDER: f64 = 0.0;

    pub fn new(name: impl Into<String>) -> ExprResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExprError::EmptyVariableName);
        }
        Ok(Self { name })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn evaluate(&self) -> f64 {
        Self::PLACEHOLDER
    }

    pub fn print(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn transform<T: Transformer + ?Sized>(&self, tr: &mut T) -> Expr {
        tr.transform_variable(self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================ BinaryOperation ===========================

/// `left <operator> right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperation {
    left: Box<Expr>,
    operator: Operator,
    right: Box<Expr>,
}

impl BinaryOperation {
    pub fn new(left: impl Into<Expr>, operator: Operator, right: impl Into<Expr>) -> Self {
        Self {
            left: Box::new(left.into()),
            operator,
            right: Box::new(right.into()),
        }
    }

    /// Build from possibly absent parts and a raw operator symbol.
    ///
    /// The operator is checked first, then the left and right operands.
    pub fn try_new(left: Option<Expr>, operator: char, right: Option<Expr>) -> ExprResult<Self> {
        let op = Operator::try_from(operator)?;
        let left = left.ok_or(ExprError::MissingOperand {
            operator,
            side: Side::Left,
        })?;
        let right = right.ok_or(ExprError::MissingOperand {
            operator,
            side: Side::Right,
        })?;
        Ok(Self::new(left, op, right))
    }

    #[inline]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expr {
        &self.right
    }

    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn evaluate(&self) -> f64 {
        self.operator
            .apply(self.left.evaluate(), self.right.evaluate())
    }

    pub fn print(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn transform<T: Transformer + ?Sized>(&self, tr: &mut T) -> Expr {
        tr.transform_binary_operation(self)
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.operator, self.right)
    }
}

// ============================= FunctionCall =============================

/// `name(argument)` where `name` is `sqrt` or `abs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    function: Function,
    argument: Box<Expr>,
}

impl FunctionCall {
    /// Call the function named `name`. Fails unless `name` is exactly `sqrt` or `abs`.
    pub fn new(name: &str, argument: impl Into<Expr>) -> ExprResult<Self> {
        Ok(Self::with_function(Function::lookup(name)?, argument))
    }

    /// Same as [`FunctionCall::new`] but also rejects a missing argument.
    pub fn try_new(name: &str, argument: Option<Expr>) -> ExprResult<Self> {
        let function = Function::lookup(name)?;
        let argument = argument.ok_or_else(|| ExprError::MissingArgument {
            function: name.to_string(),
        })?;
        Ok(Self::with_function(function, argument))
    }

    pub fn with_function(function: Function, argument: impl Into<Expr>) -> Self {
        Self {
            function,
            argument: Box::new(argument.into()),
        }
    }

    #[inline]
    pub fn function(&self) -> Function {
        self.function
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    #[inline]
    pub fn argument(&self) -> &Expr {
        &self.argument
    }

    pub fn evaluate(&self) -> f64 {
        self.function.apply(self.argument.evaluate())
    }

    pub fn print(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn transform<T: Transformer + ?Sized>(&self, tr: &mut T) -> Expr {
        tr.transform_function_call(self)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.argument)
    }
}

// ============================== Conversions =============================

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(Number::new(value))
    }
}

impl From<Number> for Expr {
    fn from(node: Number) -> Self {
        Expr::Number(node)
    }
}

impl From<Variable> for Expr {
    fn from(node: Variable) -> Self {
        Expr::Variable(node)
    }
}

impl From<BinaryOperation> for Expr {
    fn from(node: BinaryOperation) -> Self {
        Expr::BinaryOperation(node)
    }
}

impl From<FunctionCall> for Expr {
    fn from(node: FunctionCall) -> Self {
        Expr::FunctionCall(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_prints_six_decimals() {
        assert_eq!(Number::new(32.0).print(), "32.000000");
        assert_eq!(Number::new(-1.234).print(), "-1.234000");
        assert_eq!(Number::new(0.1234567).print(), "0.123457");
        assert_eq!(Number::new(f64::INFINITY).print(), "inf");
        assert_eq!(Number::new(f64::NEG_INFINITY).print(), "-inf");
        assert_eq!(Number::new(f64::NAN).print(), "nan");
        assert_eq!(Number::new(-f64::NAN).print(), "-nan");
    }

    #[test]
    fn nan_numbers_are_structurally_equal() {
        assert_eq!(Number::new(f64::NAN), Number::new(f64::NAN));
        assert_ne!(Number::new(0.0), Number::new(-0.0));
    }

    #[test]
    fn empty_variable_name_is_rejected() {
        assert_eq!(Variable::new(""), Err(ExprError::EmptyVariableName));
        assert_eq!(Variable::new("x").unwrap().evaluate(), 0.0);
    }

    #[test]
    fn binary_operation_checks_operator_before_operands() {
        let err = BinaryOperation::try_new(None, '%', None).unwrap_err();
        assert_eq!(err, ExprError::UnknownOperator('%'));

        let err = BinaryOperation::try_new(None, '+', Some(1.0.into())).unwrap_err();
        assert_eq!(
            err,
            ExprError::MissingOperand {
                operator: '+',
                side: Side::Left
            }
        );
    }

    #[test]
    fn function_call_reports_missing_argument() {
        let err = FunctionCall::try_new("abs", None).unwrap_err();
        assert_eq!(
            err,
            ExprError::MissingArgument {
                function: "abs".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Function call `abs` is missing its argument."
        );
    }
}
