use pretty_assertions::assert_eq;

use super::*;

fn in_entry(
    f: impl FnOnce(&mut ProgramBuilder) -> robo_ir::ExprId,
) -> Vec<Diagnostic> {
    check(|b| {
        let expr = f(b);
        let decl = b.declare("subject", None, Some(expr));
        b.entry([decl]);
    })
}

#[test]
fn test_arithmetic_reports_each_bad_side() {
    let diagnostics = in_entry(|b| {
        let t = b.boolean(true);
        let f = b.boolean(false);
        b.arith(ArithmeticOp::Mul, t, f)
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1017, ErrorCode::E1017]);
    assert_eq!(diagnostics[0].property, Some("left"));
    assert_eq!(diagnostics[1].property, Some("right"));
    assert_eq!(
        diagnostics[0].message,
        "arithmetic operator `*` requires numeric operands, found `boolean` on the left"
    );
}

#[test]
fn test_operand_diagnostics_precede_parent() {
    let diagnostics = in_entry(|b| {
        let missing = b.var("missing");
        let t = b.boolean(true);
        b.arith(ArithmeticOp::Add, missing, t)
    });
    // The unknown left side is not reported again by the operator.
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1008, ErrorCode::E1017]);
    assert_eq!(diagnostics[1].property, Some("right"));
}

#[test]
fn test_arithmetic_result_feeds_enclosing_rules() {
    let diagnostics = check(|b| {
        let one = b.number(1.0);
        let two = b.number(2.0);
        let sum = b.arith(ArithmeticOp::Sub, one, two);
        let lp = b.while_loop(sum, []);
        b.entry([lp]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1010]);
}

#[test]
fn test_comparison_requires_same_types() {
    let diagnostics = in_entry(|b| {
        let one = b.number(1.0);
        let t = b.boolean(true);
        b.compare(ComparisonOp::Lt, one, t)
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1018]);
    assert_eq!(
        diagnostics[0].message,
        "comparison `<` requires operands of the same type, found `number` and `boolean`"
    );
}

#[test]
fn test_comparison_is_always_boolean() {
    let diagnostics = check(|b| {
        let one = b.number(1.0);
        let t = b.boolean(true);
        let cmp = b.compare(ComparisonOp::Eq, one, t);
        let lp = b.while_loop(cmp, []);
        let x = b.boolean(false);
        let y = b.boolean(true);
        let eq = b.compare(ComparisonOp::NotEq, x, y);
        let cond = b.if_else(eq, [], []);
        b.entry([lp, cond]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1018]);
}

#[test]
fn test_unary_operand_types() {
    let diagnostics = in_entry(|b| {
        let t = b.boolean(true);
        let neg = b.unary(UnaryOp::Neg, t);
        let one = b.number(1.0);
        let not = b.unary(UnaryOp::Not, one);
        b.compare(ComparisonOp::Eq, neg, not)
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1019, ErrorCode::E1019]);
    assert_eq!(
        diagnostics[0].message,
        "unary `-` requires a `number` operand, found `boolean`"
    );
    assert_eq!(
        diagnostics[1].message,
        "unary `!` requires a `boolean` operand, found `number`"
    );
}

#[test]
fn test_well_typed_unary() {
    let diagnostics = check(|b| {
        let one = b.number(1.0);
        let two = b.number(2.0);
        let lt = b.compare(ComparisonOp::Lt, one, two);
        let not = b.unary(UnaryOp::Not, lt);
        let lp = b.while_loop(not, []);
        let five = b.number(5.0);
        let neg = b.unary(UnaryOp::Neg, five);
        let step = forward(b, neg);
        b.entry([lp, step]);
    });
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_void_call_in_arithmetic() {
    let diagnostics = check(|b| {
        b.function("beep", &[], ReturnType::Void, []);
        let one = b.number(1.0);
        let call = b.call_expr("beep", []);
        let sum = b.arith(ArithmeticOp::Add, one, call);
        let step = forward(b, sum);
        b.entry([step]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1017]);
    assert!(diagnostics[0].message.ends_with("found `void` on the right"));
}

#[test]
fn test_call_expression_uses_return_type() {
    let diagnostics = check(|b| {
        let t = b.boolean(true);
        let ret = b.ret(Some(t));
        b.function("ready", &[], ReturnType::Boolean, [ret]);
        let call = b.call_expr("ready", []);
        let lp = b.while_loop(call, []);
        b.entry([lp]);
    });
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_call_expression_argument_checks() {
    let diagnostics = check(|b| {
        let x = b.var("x");
        let ret = b.ret(Some(x));
        b.function("id", &[("x", VarType::Number)], ReturnType::Number, [ret]);
        let call = b.call_expr("id", []);
        let step = forward(b, call);
        b.entry([step]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1015]);
    assert_eq!(
        diagnostics[0].message,
        "function `id` expects 1 argument, found 0"
    );
}

#[test]
fn test_unit_expression_takes_value_type() {
    let diagnostics = check(|b| {
        let t = b.boolean(true);
        let unit = b.unit(t, LengthUnit::Cm);
        let step = forward(b, unit);
        b.entry([step]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1011]);
}

#[test]
fn test_sensors_are_numbers() {
    let diagnostics = check(|b| {
        let distance = b.sensor(robo_ir::SensorKind::Distance);
        let limit = b.number(100.0);
        let far = b.compare(ComparisonOp::Gt, distance, limit);
        let ten = b.number(10.0);
        let step = forward(b, ten);
        let lp = b.while_loop(far, [step]);
        b.entry([lp]);
    });
    assert_eq!(diagnostics, vec![]);
}
