use crate::{
    expr::{
        Expr,
        defs::{BinaryOperation, FunctionCall, Number, Variable},
    },
    transform::Transformer,
};

/// Identity pass: rebuilds every node, yielding an independent deep copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyTransformer;

impl Transformer for CopyTransformer {
    fn transform_number(&mut self, number: &Number) -> Expr {
        Expr::Number(Number::new(number.value()))
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        Expr::Variable(variable.clone())
    }

    fn transform_binary_operation(&mut self, operation: &BinaryOperation) -> Expr {
        let left = operation.left().transform(self);
        let right = operation.right().transform(self);
        Expr::BinaryOperation(BinaryOperation::new(left, operation.operator(), right))
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        let argument = call.argument().transform(self);
        Expr::FunctionCall(FunctionCall::with_function(call.function(), argument))
    }
}
