//! Operator sugar for expressions.
//!
//! The `define_ops_expr!` macro implements `Add`, `Sub`, `Mul` and `Div` on the
//! given node type so that `a + b` builds a [`BinaryOperation`]. The right-hand
//! side may be anything convertible into an [`Expr`], including plain `f64`.
use crate::expr::{
    Expr,
    defs::{BinaryOperation, FunctionCall, Number, Variable},
    variant::Operator,
};

macro_rules! define_ops_expr {
    (@op $name:ty, $trait:ident, $method:ident, $variant:ident) => {
        impl<_O1: Into<Expr>> std::ops::$trait<_O1> for $name {
            type Output = Expr;

            fn $method(self, rhs: _O1) -> Self::Output {
                Expr::BinaryOperation(BinaryOperation::new(self, Operator::$variant, rhs))
            }
        }
    };
    ($name:ty) => {
        define_ops_expr!(@op $name, Add, add, Plus);
        define_ops_expr!(@op $name, Sub, sub, Minus);
        define_ops_expr!(@op $name, Mul, mul, Mul);
        define_ops_expr!(@op $name, Div, div, Div);
    };
}

define_ops_expr!(Expr);
define_ops_expr!(Number);
define_ops_expr!(Variable);
define_ops_expr!(BinaryOperation);
define_ops_expr!(FunctionCall);
