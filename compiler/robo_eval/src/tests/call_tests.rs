use pretty_assertions::assert_eq;
use robo_ir::{
    ArithmeticOp, LengthUnit, MoveDirection, NodeRef, ProgramBuilder, ReturnType, VarType,
};

use super::{forward_mm, run_err, run_ok};
use crate::{EvalErrorKind, Evaluator, EvaluatorBuilder, Point, Value};

#[test]
fn test_argument_binds_caller_value() {
    // scale(x: number): number { return x * 10 }
    // entry { var x = 7; forward scale(x) mm }
    let mut b = ProgramBuilder::new();
    let x = b.var("x");
    let ten = b.number(10.0);
    let product = b.arith(ArithmeticOp::Mul, x, ten);
    let ret = b.ret(Some(product));
    b.function("scale", &[("x", VarType::Number)], ReturnType::Number, [ret]);

    let seven = b.number(7.0);
    let decl = b.declare("x", None, Some(seven));
    let x = b.var("x");
    let call = b.call_expr("scale", [x]);
    let step = b.movement(Some(MoveDirection::Forward), call, Some(LengthUnit::Mm));
    b.entry([decl, step]);

    let scene = run_ok(&b.finish());
    assert_eq!(scene.robot.position, Point::new(5_070.0, 5_000.0));
}

#[test]
fn test_callee_cannot_see_caller_variables() {
    let mut b = ProgramBuilder::new();
    let y = b.var("y");
    let step = b.movement(Some(MoveDirection::Forward), y, Some(LengthUnit::Mm));
    b.function("peek", &[], ReturnType::Void, [step]);

    let one = b.number(1.0);
    let decl = b.declare("y", None, Some(one));
    let call = b.call_stmt("peek", []);
    b.entry([decl, call]);

    let err = run_err(&b.finish());
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable { name: "y".into() }
    );
    assert_eq!(err.backtrace, vec!["peek".to_string()]);
}

#[test]
fn test_callee_assignment_does_not_leak() {
    // reset(): void { var x = 0 }
    // entry { var x = 3; reset(); forward x cm }
    let mut b = ProgramBuilder::new();
    let zero = b.number(0.0);
    let inner = b.declare("x", None, Some(zero));
    b.function("reset", &[], ReturnType::Void, [inner]);

    let three = b.number(3.0);
    let decl = b.declare("x", None, Some(three));
    let call = b.call_stmt("reset", []);
    let x = b.var("x");
    let step = b.movement(Some(MoveDirection::Forward), x, Some(LengthUnit::Cm));
    b.entry([decl, call, step]);

    let scene = run_ok(&b.finish());
    assert_eq!(scene.robot.position, Point::new(5_030.0, 5_000.0));
}

#[test]
fn test_call_with_side_effects_runs_once() {
    // step(): number { forward 10 mm; return 1 }
    // entry { forward step() mm }
    let mut b = ProgramBuilder::new();
    let inner = forward_mm(&mut b, 10.0);
    let one = b.number(1.0);
    let ret = b.ret(Some(one));
    b.function("step", &[], ReturnType::Number, [inner, ret]);

    let call = b.call_expr("step", []);
    let outer = b.movement(Some(MoveDirection::Forward), call, Some(LengthUnit::Mm));
    b.entry([outer]);

    let scene = run_ok(&b.finish());
    assert_eq!(scene.timeline().len(), 2);
    assert_eq!(scene.robot.position, Point::new(5_011.0, 5_000.0));
}

#[test]
fn test_first_declaration_wins() {
    let mut b = ProgramBuilder::new();
    let first = forward_mm(&mut b, 10.0);
    b.function("go", &[], ReturnType::Void, [first]);
    let second = forward_mm(&mut b, 99.0);
    b.function("go", &[], ReturnType::Void, [second]);
    let call = b.call_stmt("go", []);
    b.entry([call]);

    let scene = run_ok(&b.finish());
    assert_eq!(scene.robot.position, Point::new(5_010.0, 5_000.0));
}

#[test]
fn test_undefined_function() {
    let mut b = ProgramBuilder::new();
    let call = b.call_stmt("missing", []);
    b.entry([call]);
    let err = run_err(&b.finish());
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedFunction {
            name: "missing".into()
        }
    );
    assert_eq!(err.node, NodeRef::Stmt(call));
    assert!(err.backtrace.is_empty());
}

#[test]
fn test_arity_checked_at_runtime() {
    let mut b = ProgramBuilder::new();
    b.function("one", &[("a", VarType::Number)], ReturnType::Void, []);
    let call = b.call_stmt("one", []);
    b.entry([call]);
    assert_eq!(
        run_err(&b.finish()).kind,
        EvalErrorKind::ArityMismatch {
            name: "one".into(),
            expected: 1,
            got: 0
        }
    );
}

#[test]
fn test_argument_type_checked_at_runtime() {
    let mut b = ProgramBuilder::new();
    b.function("one", &[("a", VarType::Number)], ReturnType::Void, []);
    let t = b.boolean(true);
    let call = b.call_stmt("one", [t]);
    b.entry([call]);
    let err = run_err(&b.finish());
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "number",
            found: "boolean"
        }
    );
    assert_eq!(err.node, NodeRef::Expr(t));
}

#[test]
fn test_unbounded_recursion_hits_depth_limit() {
    let mut b = ProgramBuilder::new();
    let again = b.call_stmt("again", []);
    b.function("again", &[], ReturnType::Void, [again]);
    let start = b.call_stmt("again", []);
    b.entry([start]);
    let program = b.finish();

    let err = EvaluatorBuilder::new(&program)
        .max_call_depth(8)
        .build()
        .run()
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 8 });
    assert_eq!(err.backtrace.len(), 8);
}

#[test]
fn test_frames_released_after_failed_call() {
    let mut b = ProgramBuilder::new();
    let y = b.var("y");
    let step = b.movement(Some(MoveDirection::Forward), y, Some(LengthUnit::Mm));
    b.function("broken", &[], ReturnType::Void, [step]);
    let call = b.call_stmt("broken", []);
    b.entry([call]);
    let program = b.finish();

    let mut evaluator = Evaluator::new(&program);
    assert!(evaluator.exec_stmt(call).is_err());
    assert_eq!(evaluator.env().depth(), 1);
    assert_eq!(evaluator.call_stack.depth(), 0);
}

#[test]
fn test_void_function_value() {
    let mut b = ProgramBuilder::new();
    b.function("noop", &[], ReturnType::Void, []);
    let call = b.call_expr("noop", []);
    b.entry([]);
    let program = b.finish();

    let mut evaluator = Evaluator::new(&program);
    assert_eq!(evaluator.eval_expr(call).unwrap(), Value::Void);
}

#[test]
fn test_scoped_guard_pops_frame() {
    let program = ProgramBuilder::new().finish();
    let mut evaluator = Evaluator::new(&program);
    {
        let scoped = evaluator.scoped();
        assert_eq!(scoped.env().depth(), 2);
    }
    assert_eq!(evaluator.env().depth(), 1);
}
