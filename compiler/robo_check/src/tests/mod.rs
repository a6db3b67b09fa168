//! Tests for the validator.

use pretty_assertions::assert_eq;
use robo_diagnostic::{Diagnostic, ErrorCode, Severity};
use robo_ir::{
    ArithmeticOp, ComparisonOp, FunctionRef, LengthUnit, MoveDirection, NodeRef, Program,
    ProgramBuilder, ReturnType, RotateDirection, SpeedUnit, UnaryOp, VarType,
};

use crate::validate;

mod expr_tests;
mod program_tests;

fn build(f: impl FnOnce(&mut ProgramBuilder)) -> Program {
    let mut b = ProgramBuilder::new();
    f(&mut b);
    b.finish()
}

fn check(f: impl FnOnce(&mut ProgramBuilder)) -> Vec<Diagnostic> {
    validate(&build(f))
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// `forward <distance> mm`
fn forward(b: &mut ProgramBuilder, distance: robo_ir::ExprId) -> robo_ir::StmtId {
    b.movement(Some(MoveDirection::Forward), distance, Some(LengthUnit::Mm))
}

#[test]
fn test_minimal_program_is_clean() {
    let diagnostics = check(|b| {
        let ten = b.number(10.0);
        let step = forward(b, ten);
        b.entry([step]);
    });
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_complete_program_is_clean() {
    let diagnostics = check(|b| {
        // fn square(side: number) -> void { var i = 0; loop i < 4 { forward side cm; clock 90; i = i + 1 } }
        let zero = b.number(0.0);
        let decl = b.declare("i", Some(VarType::Number), Some(zero));
        let i = b.var("i");
        let four = b.number(4.0);
        let cond = b.compare(ComparisonOp::Lt, i, four);
        let side = b.var("side");
        let step = b.movement(Some(MoveDirection::Forward), side, Some(LengthUnit::Cm));
        let ninety = b.number(90.0);
        let turn = b.rotation(Some(RotateDirection::Clock), ninety);
        let i = b.var("i");
        let one = b.number(1.0);
        let next = b.arith(ArithmeticOp::Add, i, one);
        let bump = b.assign("i", next);
        let body = b.while_loop(cond, [step, turn, bump]);
        b.function("square", &[("side", VarType::Number)], ReturnType::Void, [decl, body]);

        let speed = b.number(15.0);
        let set = b.set_speed(speed, Some(SpeedUnit::CmPerSec));
        let size = b.number(30.0);
        let call = b.call_stmt("square", [size]);
        b.entry([set, call]);
    });
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_validate_is_idempotent() {
    let program = build(|b| {
        let t = b.boolean(true);
        let step = b.movement(None, t, None);
        let x = b.var("x");
        let bad = b.assign("Y", x);
        b.function("f", &[("a", VarType::Number), ("a", VarType::Number)], ReturnType::Void, []);
        b.entry([step, bad]);
    });
    let first = validate(&program);
    let second = validate(&program);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_warnings_have_warning_severity() {
    let diagnostics = check(|b| {
        let decl = b.declare("Speed", Some(VarType::Number), None);
        b.entry([decl]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::W1001]);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].property, Some("name"));
}

#[test]
fn test_diagnostics_follow_function_order() {
    let diagnostics = check(|b| {
        let x = b.var("in_g");
        let s1 = b.assign("in_g", x);
        b.function("g", &[], ReturnType::Void, [s1]);
        let y = b.var("in_entry");
        let s2 = b.assign("in_entry", y);
        b.entry([s2]);
        let z = b.var("in_h");
        let s3 = b.assign("in_h", z);
        b.function("h", &[], ReturnType::Void, [s3]);
    });
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "undeclared variable `in_g`",
            "undeclared variable `in_g`",
            "undeclared variable `in_h`",
            "undeclared variable `in_h`",
            "undeclared variable `in_entry`",
            "undeclared variable `in_entry`",
        ]
    );
    assert_eq!(diagnostics[4].node, NodeRef::Expr(robo_ir::ExprId::new(1)));
}
