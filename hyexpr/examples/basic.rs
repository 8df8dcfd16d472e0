use hyexpr::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n32 = Number::new(32.0);
    let n16 = Number::new(16.0);
    let minus = BinaryOperation::new(n32, Operator::Minus, n16);
    let call_sqrt = FunctionCall::new("sqrt", minus)?;
    let v = Variable::new("var")?;
    let mult = BinaryOperation::new(v, Operator::Mul, call_sqrt);
    let call_abs: Expr = FunctionCall::new("abs", mult)?.into();

    let copied = call_abs.transform(&mut CopyTransformer);
    println!("{}", copied.print());

    let mut folder = ConstantFolder::new();
    let folded = call_abs.transform(&mut folder);
    println!("{}", folded.print());

    folded.pretty_print()?;
    println!();
    println!("{:?}", folder.statistics());
    Ok(())
}
