//! Evaluator tests, grouped by feature.

#![expect(clippy::unwrap_used, reason = "tests unwrap known-good runs")]

mod call_tests;

use robo_ir::{LengthUnit, MoveDirection, Program, ProgramBuilder, SpeedUnit, StmtId};

use crate::{evaluate, EvalError, Scene};

/// Build a program whose entry body is produced by `body`.
fn entry(body: impl FnOnce(&mut ProgramBuilder) -> Vec<StmtId>) -> Program {
    let mut b = ProgramBuilder::new();
    let stmts = body(&mut b);
    b.entry(stmts);
    b.finish()
}

fn run(program: &Program) -> Result<Scene, EvalError> {
    evaluate(program)
}

fn run_ok(program: &Program) -> Scene {
    run(program).unwrap()
}

fn run_err(program: &Program) -> EvalError {
    run(program).unwrap_err()
}

/// `forward <mm> mm`
fn forward_mm(b: &mut ProgramBuilder, mm: f64) -> StmtId {
    let distance = b.number(mm);
    b.movement(Some(MoveDirection::Forward), distance, Some(LengthUnit::Mm))
}

/// `speed <mm_per_sec> mm/s`
fn speed(b: &mut ProgramBuilder, mm_per_sec: f64) -> StmtId {
    let value = b.number(mm_per_sec);
    b.set_speed(value, Some(SpeedUnit::MmPerSec))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
