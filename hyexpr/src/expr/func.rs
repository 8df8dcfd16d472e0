//! Free-function builders for expression trees.
//!
//! Only [`var`] and [`call`] can fail; every other builder takes already
//! validated parts.
use crate::{
    error::ExprResult,
    expr::{
        Expr,
        defs::{BinaryOperation, FunctionCall, Number, Variable},
        variant::{Function, Operator},
    },
};

pub fn num(value: f64) -> Expr {
    Expr::Number(Number::new(value))
}

pub fn var(name: impl Into<String>) -> ExprResult<Expr> {
    Variable::new(name).map(Expr::Variable)
}

pub fn binary(left: impl Into<Expr>, operator: Operator, right: impl Into<Expr>) -> Expr {
    Expr::BinaryOperation(BinaryOperation::new(left, operator, right))
}

pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    binary(left, Operator::Plus, right)
}

pub fn sub(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    binary(left, Operator::Minus, right)
}

pub fn mul(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    binary(left, Operator::Mul, right)
}

pub fn div(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    binary(left, Operator::Div, right)
}

/// Call a function by name, rejecting anything but `sqrt` and `abs`.
pub fn call(name: &str, argument: impl Into<Expr>) -> ExprResult<Expr> {
    FunctionCall::new(name, argument).map(Expr::FunctionCall)
}

pub fn sqrt(argument: impl Into<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall::with_function(Function::Sqrt, argument))
}

pub fn abs(argument: impl Into<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall::with_function(Function::Abs, argument))
}
