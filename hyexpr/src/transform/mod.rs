//! Tree-to-tree transformations.
//!
//! A [`Transformer`] has one method per node kind. [`Expr::transform`] selects the
//! method matching the node it is called on and returns whatever that method
//! builds, so new passes are added by implementing this trait, never by touching
//! the node types.
//!
//! Contract
//! - Methods receive a shared reference to the source node; the source tree is
//!   never modified.
//! - The returned tree is freshly allocated and owned by the caller. Children are
//!   obtained by calling [`Expr::transform`] on the source children with the same
//!   transformer (or any other, for mixed passes).
//!
//! Example: a pass renaming every variable
//! ```
//! use hyexpr::prelude::*;
//!
//! struct Rename<'a>(&'a str);
//!
//! impl Transformer for Rename<'_> {
//!     fn transform_number(&mut self, n: &Number) -> Expr {
//!         Expr::Number(*n)
//!     }
//!     fn transform_variable(&mut self, _: &Variable) -> Expr {
//!         var(self.0).unwrap()
//!     }
//!     fn transform_binary_operation(&mut self, b: &BinaryOperation) -> Expr {
//!         binary(b.left().transform(self), b.operator(), b.right().transform(self))
//!     }
//!     fn transform_function_call(&mut self, c: &FunctionCall) -> Expr {
//!         FunctionCall::with_function(c.function(), c.argument().transform(self)).into()
//!     }
//! }
//!
//! let e = var("x").unwrap() + sqrt(var("y").unwrap());
//! assert_eq!(e.transform(&mut Rename("z")).print(), "z+sqrt(z)");
//! assert_eq!(e.print(), "x+sqrt(y)");
//! ```
pub mod copy;
pub mod fold;

use crate::expr::{
    Expr,
    defs::{BinaryOperation, FunctionCall, Number, Variable},
};

/// Visitor producing a new [`Expr`] from each kind of node.
pub trait Transformer {
    fn transform_number(&mut self, number: &Number) -> Expr;

    fn transform_variable(&mut self, variable: &Variable) -> Expr;

    fn transform_binary_operation(&mut self, operation: &BinaryOperation) -> Expr;

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr;
}
