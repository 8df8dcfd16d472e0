//! Constant folding.
//!
//! A node collapses into a single [`Number`] exactly when its transformed
//! children are all numbers. Folding proceeds bottom-up, so any maximal
//! sub-tree without a [`Variable`] ends up as one literal while the parts
//! depending on a variable keep their shape.
use log::{debug, trace};

use crate::{
    expr::{
        Expr,
        defs::{BinaryOperation, FunctionCall, Number, Variable},
    },
    transform::Transformer,
};

/// Counters accumulated by a [`ConstantFolder`] across the passes it ran.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoldStatistics {
    /// Source nodes handed to the folder.
    pub visited: usize,
    /// Composite nodes replaced by a literal.
    pub folded: usize,
}

/// Optimizing pass collapsing constant sub-expressions.
#[derive(Debug, Default, Clone)]
pub struct ConstantFolder {
    stats: FoldStatistics,
    depth: usize,
}

impl ConstantFolder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn statistics(&self) -> FoldStatistics {
        self.stats
    }

    /// Transform a child, tracking nesting so the root pass can log a summary.
    fn descend(&mut self, child: &Expr) -> Expr {
        self.depth += 1;
        let result = child.transform(self);
        self.depth -= 1;
        result
    }

    fn enter(&mut self) -> FoldStatistics {
        self.stats.visited += 1;
        self.stats
    }

    fn leave(&mut self, before: FoldStatistics, result: &Expr) {
        if self.depth == 0 {
            debug!(
                "Constant folding visited {} nodes and collapsed {} into literals, result `{}`.",
                self.stats.visited - before.visited + 1,
                self.stats.folded - before.folded,
                result
            );
        }
    }

    fn collapse(&mut self, source: &dyn std::fmt::Display, value: f64) -> Expr {
        self.stats.folded += 1;
        let folded = Number::new(value);
        trace!("Folded `{source}` into `{folded}`.");
        Expr::Number(folded)
    }
}

impl Transformer for ConstantFolder {
    fn transform_number(&mut self, number: &Number) -> Expr {
        let before = self.enter();
        let result = Expr::Number(Number::new(number.value()));
        self.leave(before, &result);
        result
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        let before = self.enter();
        let result = Expr::Variable(variable.clone());
        self.leave(before, &result);
        result
    }

    fn transform_binary_operation(&mut self, operation: &BinaryOperation) -> Expr {
        let before = self.enter();
        let left = self.descend(operation.left());
        let right = self.descend(operation.right());

        let constant = match (&left, &right) {
            (Expr::Number(l), Expr::Number(r)) => {
                Some(operation.operator().apply(l.value(), r.value()))
            }
            _ => None,
        };
        let result = match constant {
            Some(value) => self.collapse(operation, value),
            None => Expr::BinaryOperation(BinaryOperation::new(left, operation.operator(), right)),
        };
        self.leave(before, &result);
        result
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        let before = self.enter();
        let argument = self.descend(call.argument());

        let constant = argument
            .try_as_number_ref()
            .map(|arg| call.function().apply(arg.value()));
        let result = match constant {
            Some(value) => self.collapse(call, value),
            None => Expr::FunctionCall(FunctionCall::with_function(call.function(), argument)),
        };
        self.leave(before, &result);
        result
    }
}
