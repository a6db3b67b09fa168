//! End-to-end tests: JSON program trees through `check`, `run` and `build`.

#![expect(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use robo_diagnostic::emitter::{ColorMode, TerminalEmitter};
use robo_ir::{
    ComparisonOp, LengthUnit, MoveDirection, Program, ProgramBuilder, RotateDirection, SpeedUnit,
};
use roboc::commands::{build_file, check_files, load_program, run_file, RunOptions};
use roboc::CliError;
use tempfile::TempDir;

fn plain_emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn rendered(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn write_tree(dir: &TempDir, name: &str, program: &Program) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(program).unwrap()).unwrap();
    path
}

/// `speed 20 cm/s; forward 50 cm; clock 90`
fn square_step() -> Program {
    let mut b = ProgramBuilder::new();
    let twenty = b.number(20.0);
    let speed = b.set_speed(twenty, Some(SpeedUnit::CmPerSec));
    let fifty = b.number(50.0);
    let forward = b.movement(Some(MoveDirection::Forward), fifty, Some(LengthUnit::Cm));
    let ninety = b.number(90.0);
    let turn = b.rotation(Some(RotateDirection::Clock), ninety);
    b.entry([speed, forward, turn]);
    b.finish()
}

/// Refers to a variable that was never declared.
fn undeclared() -> Program {
    let mut b = ProgramBuilder::new();
    let ghost = b.var("ghost");
    let step = b.movement(Some(MoveDirection::Forward), ghost, Some(LengthUnit::Mm));
    b.entry([step]);
    b.finish()
}

/// `var i = 0; loop i < 10 { }` never terminates.
fn endless() -> Program {
    let mut b = ProgramBuilder::new();
    let zero = b.number(0.0);
    let decl = b.declare("i", None, Some(zero));
    let i = b.var("i");
    let ten = b.number(10.0);
    let cond = b.compare(ComparisonOp::Lt, i, ten);
    let stuck = b.while_loop(cond, []);
    b.entry([decl, stuck]);
    b.finish()
}

#[test]
fn test_load_roundtrips_json() {
    let dir = TempDir::new().unwrap();
    let program = square_step();
    let path = write_tree(&dir, "square.json", &program);
    assert_eq!(load_program(&path).unwrap(), program);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_program(&missing),
        Err(CliError::Read { .. })
    ));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(
        load_program(&garbage),
        Err(CliError::Parse { .. })
    ));
}

#[test]
fn test_check_reports_all_files() {
    let dir = TempDir::new().unwrap();
    let good = write_tree(&dir, "good.json", &square_step());
    let bad = write_tree(&dir, "bad.json", &undeclared());

    let mut emitter = plain_emitter();
    let summary = check_files(std::slice::from_ref(&good), &mut emitter).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.errors, 0);

    let mut emitter = plain_emitter();
    let err = check_files(&[good, bad], &mut emitter).unwrap_err();
    assert!(matches!(err, CliError::CheckFailed { failed: 1, total: 2 }));
    assert!(err.is_reported());
    let output = rendered(emitter);
    assert!(output.contains("ghost"), "{output}");
}

#[test]
fn test_check_names_each_failing_file() {
    let dir = TempDir::new().unwrap();
    let first = write_tree(&dir, "first.json", &undeclared());
    let second = write_tree(&dir, "second.json", &undeclared());

    let mut emitter = plain_emitter();
    let err = check_files(&[first.clone(), second.clone()], &mut emitter).unwrap_err();
    assert!(matches!(err, CliError::CheckFailed { failed: 2, total: 2 }));
    let output = rendered(emitter);
    let first_at = output.find(&format!("--> {}:", first.display())).unwrap();
    let second_at = output.find(&format!("--> {}:", second.display())).unwrap();
    assert!(first_at < second_at, "{output}");
}

#[test]
fn test_run_prints_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "square.json", &square_step());
    let mut emitter = plain_emitter();
    let summary = run_file(&path, &RunOptions::default(), &mut emitter).unwrap();

    // 500 mm at 200 mm/s, then a quarter turn at 90°/s.
    assert_eq!(summary.snapshots, 2);
    assert!((summary.time - 3.5).abs() < 1e-9);
    assert!((summary.heading - 90.0).abs() < 1e-9);
    assert!(rendered(emitter).is_empty());
}

#[test]
fn test_run_writes_scene_json() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "square.json", &square_step());
    let out = dir.path().join("scene.json");
    let options = RunOptions {
        scene_out: Some(out.clone()),
        ..RunOptions::default()
    };
    run_file(&path, &options, &mut plain_emitter()).unwrap();

    let scene: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!((scene["time"].as_f64().unwrap() - 3.5).abs() < 1e-9);
    assert_eq!(scene["timeline"].as_array().unwrap().len(), 2);
}

#[test]
fn test_run_refuses_invalid_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "bad.json", &undeclared());
    let mut emitter = plain_emitter();
    let err = run_file(&path, &RunOptions::default(), &mut emitter).unwrap_err();
    assert!(matches!(err, CliError::Invalid { errors: 1, .. }));
    let output = rendered(emitter);
    assert!(output.contains("error[E1"), "{output}");
    assert!(output.contains(&format!("--> {}:", path.display())), "{output}");
}

#[test]
fn test_run_reports_budget() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "endless.json", &endless());
    let options = RunOptions {
        max_iterations: Some(25),
        ..RunOptions::default()
    };
    let mut emitter = plain_emitter();
    let err = run_file(&path, &options, &mut emitter).unwrap_err();
    assert!(matches!(err, CliError::Eval { .. }));
    let output = rendered(emitter);
    assert!(output.contains("error[E6003]"), "{output}");
    assert!(output.contains("25 iterations"), "{output}");
}

#[test]
fn test_build_writes_sketch() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "square.json", &square_step());
    let out = dir.path().join("square.ino");
    let sketch = build_file(&path, Some(&out), &mut plain_emitter()).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, sketch.text());
    assert!(written.contains("    currentSpeed = (20 * 10);\n"));
    assert!(written.contains("    robot.delayMS((((50 * 10) * 1000) / currentSpeed));\n"));
    assert!(written.contains("    robot.setCarRotateRight(currentSpeed);\n"));
}

#[test]
fn test_build_refuses_invalid_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "bad.json", &undeclared());
    let out = dir.path().join("bad.ino");
    let err = build_file(&path, Some(&out), &mut plain_emitter()).unwrap_err();
    assert!(matches!(err, CliError::Invalid { .. }));
    assert!(!Path::new(&out).exists());
}
