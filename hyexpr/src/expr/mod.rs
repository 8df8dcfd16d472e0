//! Arithmetic expression trees.
//!
//! Role
//! - [`Expr`] is a closed sum over the four node kinds defined in [`defs`].
//! - Evaluation and printing are exhaustive matches over that sum.
//! - [`Expr::transform`] hands the concrete node to a [`Transformer`], which is the
//!   one open extension point of the crate.
//!
//! Example
//! ```
//! use hyexpr::prelude::*;
//!
//! let e = abs(var("var").unwrap() * sqrt(num(32.0) - num(16.0)));
//! assert_eq!(e.print(), "abs(var*sqrt(32.000000-16.000000))");
//! assert_eq!(e.evaluate(), 0.0);
//! assert_eq!(e.fold_constants().print(), "abs(var*4.000000)");
//! ```
pub mod defs;
pub mod func;
#[cfg(feature = "pretty")]
pub mod pretty;
pub mod variant;

use std::fmt;

use smallvec::SmallVec;
use strum::{EnumIs, EnumTryAs};

use crate::expr::defs::{BinaryOperation, FunctionCall, Number, Variable};
use crate::expr::variant::ExprType;
use crate::transform::{Transformer, copy::CopyTransformer, fold::ConstantFolder};

/// One node of an arithmetic expression tree, owning its children.
///
/// Equality is structural: two trees are equal if they have the same shape,
/// operators, function names, variable names, and literal bit patterns.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, EnumTryAs)]
pub enum Expr {
    Number(Number),
    Variable(Variable),
    BinaryOperation(BinaryOperation),
    FunctionCall(FunctionCall),
}

impl Expr {
    /// Compute the numeric value of this tree. Variables evaluate to `0.0`.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Number(n) => n.evaluate(),
            Expr::Variable(v) => v.evaluate(),
            Expr::BinaryOperation(b) => b.evaluate(),
            Expr::FunctionCall(c) => c.evaluate(),
        }
    }

    /// Canonical infix text, without parentheses or spaces.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Produce a brand-new tree by handing this node to `tr`.
    ///
    /// The input tree is never modified and the result shares no node with it.
    #[inline]
    pub fn transform<T: Transformer + ?Sized>(&self, tr: &mut T) -> Expr {
        match self {
            Expr::Number(n) => n.transform(tr),
            Expr::Variable(v) => v.transform(tr),
            Expr::BinaryOperation(b) => b.transform(tr),
            Expr::FunctionCall(c) => c.transform(tr),
        }
    }

    /// Independent deep copy produced by [`CopyTransformer`].
    pub fn deep_copy(&self) -> Expr {
        self.transform(&mut CopyTransformer)
    }

    /// Constant-folded copy produced by a fresh [`ConstantFolder`].
    pub fn fold_constants(&self) -> Expr {
        self.transform(&mut ConstantFolder::new())
    }

    #[inline]
    pub fn type_(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Variable(_) => ExprType::Variable,
            Expr::BinaryOperation(_) => ExprType::BinaryOperation,
            Expr::FunctionCall(_) => ExprType::FunctionCall,
        }
    }

    /// Same as [`Expr::type_`]
    #[inline]
    pub fn r#type(&self) -> ExprType {
        self.type_()
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        let (first, second) = match self {
            Expr::Number(_) | Expr::Variable(_) => (None, None),
            Expr::BinaryOperation(b) => (Some(b.left()), Some(b.right())),
            Expr::FunctionCall(c) => (Some(c.argument()), None),
        };
        first.into_iter().chain(second)
    }

    /// Pre-order, left-to-right iterator over every node of the tree.
    pub fn nodes(&self) -> Nodes<'_> {
        let mut stack = SmallVec::new();
        stack.push(self);
        Nodes { stack }
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Expr::depth).max().unwrap_or(0)
    }

    /// True if no [`Variable`] occurs anywhere in the tree.
    pub fn is_constant(&self) -> bool {
        !self.nodes().any(Expr::is_variable)
    }

    /// Names of the variables in the order they are printed, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        self.nodes()
            .filter_map(|node| node.try_as_variable_ref().map(Variable::name))
            .collect()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => fmt::Display::fmt(n, f),
            Expr::Variable(v) => fmt::Display::fmt(v, f),
            Expr::BinaryOperation(b) => fmt::Display::fmt(b, f),
            Expr::FunctionCall(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// Iterator returned by [`Expr::nodes`]. Uses an explicit stack, no recursion.
pub struct Nodes<'a> {
    stack: SmallVec<[&'a Expr; 16]>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match node {
            Expr::Number(_) | Expr::Variable(_) => {}
            Expr::BinaryOperation(b) => {
                self.stack.push(b.right());
                self.stack.push(b.left());
            }
            Expr::FunctionCall(c) => self.stack.push(c.argument()),
        }
        Some(node)
    }
}
