//! The `run` command: validate, then simulate a program tree.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use robo_diagnostic::emitter::DiagnosticEmitter;
use robo_eval::{EvaluatorBuilder, Scene, YieldCheckpoint};

use super::{load_program, report, validate_and_report};
use crate::CliError;

/// Overrides for the evaluator's defaults.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub max_iterations: Option<u64>,
    pub max_duration: Option<Duration>,
    /// Write the scene here as JSON.
    pub scene_out: Option<PathBuf>,
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub snapshots: usize,
    /// Simulated seconds.
    pub time: f64,
    pub x: f64,
    pub y: f64,
    /// Final heading in degrees.
    pub heading: f64,
}

impl RunSummary {
    fn of(scene: &Scene) -> Self {
        RunSummary {
            snapshots: scene.timeline().len(),
            time: scene.time,
            x: scene.robot.position.x,
            y: scene.robot.position.y,
            heading: scene.robot.heading.to_degrees(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} snapshot(s), {:.3} s simulated, robot at ({:.1}, {:.1}) heading {:.1}°",
            self.snapshots, self.time, self.x, self.y, self.heading
        )
    }
}

/// Validate and evaluate one file.
pub fn run_file(
    path: &Path,
    options: &RunOptions,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<RunSummary, CliError> {
    let program = load_program(path)?;
    validate_and_report(path, &program, emitter)?;

    let mut builder = EvaluatorBuilder::new(&program).checkpoint(YieldCheckpoint);
    if let Some(max) = options.max_iterations {
        builder = builder.max_loop_iterations(max);
    }
    if let Some(max) = options.max_duration {
        builder = builder.max_run_duration(max);
    }

    let scene = match builder.build().run() {
        Ok(scene) => scene,
        Err(err) => {
            report(path, &[err.to_diagnostic()], emitter);
            return Err(CliError::Eval {
                path: path.to_path_buf(),
            });
        }
    };

    if let Some(out) = &options.scene_out {
        write_scene(out, &scene)?;
    }
    Ok(RunSummary::of(&scene))
}

fn write_scene(path: &Path, scene: &Scene) -> Result<(), CliError> {
    let write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let json = serde_json::to_string_pretty(scene).map_err(|e| write_error(e.into()))?;
    std::fs::write(path, json).map_err(write_error)?;
    tracing::debug!(path = %path.display(), "scene written");
    Ok(())
}
