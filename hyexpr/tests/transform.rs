use hyexpr::prelude::*;

fn sample() -> Expr {
    abs(var("var").unwrap() * sqrt(num(32.0) - num(16.0)))
}

#[test]
fn copy_prints_identically() {
    let e = sample();
    let copy = e.transform(&mut CopyTransformer);
    assert_eq!(copy.print(), "abs(var*sqrt(32.000000-16.000000))");
    assert_eq!(copy, e);
}

#[test]
fn copy_survives_dropping_the_original() {
    let e = sample();
    let copy = e.deep_copy();
    drop(e);
    assert_eq!(copy.print(), "abs(var*sqrt(32.000000-16.000000))");
}

#[test]
fn original_survives_dropping_the_copy_and_the_fold() {
    let e = sample();
    drop(e.deep_copy());
    drop(e.fold_constants());
    assert_eq!(e, sample());
}

#[test]
fn fold_collapses_constant_branch_only() {
    let e = sample();
    let folded = e.transform(&mut ConstantFolder::new());
    assert_eq!(folded.print(), "abs(var*4.000000)");
    assert_eq!(folded, abs(var("var").unwrap() * num(4.0)));
    // The source tree is left untouched.
    assert_eq!(e.print(), "abs(var*sqrt(32.000000-16.000000))");
}

#[test]
fn fold_two_plus_three() {
    let folded = (num(2.0) + num(3.0)).fold_constants();
    let n = folded.try_as_number().expect("folded to a number");
    assert_eq!(n.value(), 5.0);
}

#[test]
fn fold_leaves_are_copies() {
    assert_eq!(num(7.5).fold_constants(), num(7.5));
    assert_eq!(var("x").unwrap().fold_constants(), var("x").unwrap());
    assert_eq!(num(7.5).deep_copy().evaluate(), 7.5);
}

#[test]
fn fold_function_over_variable_is_kept() {
    let e = sqrt(var("x").unwrap() + (num(1.0) + num(1.0)));
    assert_eq!(e.fold_constants().print(), "sqrt(x+2.000000)");
}

#[test]
fn fold_is_idempotent_on_sample() {
    let once = sample().fold_constants();
    let twice = once.fold_constants();
    assert_eq!(once, twice);
}

/// Counts how often each hook runs, delegating construction to the copy pass.
#[derive(Default)]
struct Counting {
    numbers: usize,
    variables: usize,
    operations: usize,
    calls: usize,
}

impl Transformer for Counting {
    fn transform_number(&mut self, number: &Number) -> Expr {
        self.numbers += 1;
        CopyTransformer.transform_number(number)
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        self.variables += 1;
        CopyTransformer.transform_variable(variable)
    }

    fn transform_binary_operation(&mut self, operation: &BinaryOperation) -> Expr {
        self.operations += 1;
        let left = operation.left().transform(self);
        let right = operation.right().transform(self);
        binary(left, operation.operator(), right)
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        self.calls += 1;
        FunctionCall::with_function(call.function(), call.argument().transform(self)).into()
    }
}

#[test]
fn dispatch_reaches_exactly_one_hook_per_node() {
    let mut counting = Counting::default();
    let out = sample().transform(&mut counting);
    assert_eq!(out, sample());
    assert_eq!(counting.numbers, 2);
    assert_eq!(counting.variables, 1);
    assert_eq!(counting.operations, 2);
    assert_eq!(counting.calls, 2);
}

#[test]
fn transformers_work_as_trait_objects() {
    let passes: Vec<Box<dyn Transformer>> =
        vec![Box::new(CopyTransformer), Box::new(ConstantFolder::new())];
    let printed: Vec<String> = passes
        .into_iter()
        .map(|mut pass| sample().transform(pass.as_mut()).print())
        .collect();
    assert_eq!(
        printed,
        vec![
            "abs(var*sqrt(32.000000-16.000000))".to_string(),
            "abs(var*4.000000)".to_string()
        ]
    );
}
