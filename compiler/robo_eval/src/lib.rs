//! Robo Eval - scoped evaluator for RoboScript programs.
//!
//! Runs a [`Program`] against a simulated world and returns the resulting
//! [`Scene`]: the static layout plus the robot's timestamped trajectory.
//!
//! # Model
//!
//! - Values are numbers (`f64`), booleans or void.
//! - Each function call gets its own variable frame; a callee cannot see
//!   its caller's variables.
//! - Distances are millimeters, speeds mm/s, angles radians, time seconds.
//!   Every movement or rotation takes `magnitude / rate` simulated seconds
//!   and records one [`Snapshot`].
//! - Every failure is fatal to the run and reported as an [`EvalError`].
//!
//! # Bounded execution
//!
//! Loops are limited by [`EvalLimits`]. Callers can stop a run from another
//! thread with a [`CancellationToken`] and observe progress with a
//! [`CheckpointHandler`].

mod cancel;
mod checkpoint;
mod environment;
mod errors;
mod evaluator;
mod limits;
mod scene;
mod value;

use robo_ir::Program;

pub use cancel::CancellationToken;
pub use checkpoint::{CheckpointHandler, NoopCheckpoint, Progress, YieldCheckpoint};
pub use environment::{Environment, Unbound};
pub use errors::{BudgetCeiling, EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{CallFrame, CallStack, Evaluator, EvaluatorBuilder, Flow, ScopedEvaluator};
pub use limits::{Budget, BudgetExceeded, EvalLimits};
pub use scene::{
    Entity, EntityKind, Point, Robot, Scene, SceneLayout, Size, Snapshot, NO_OBSTACLE_DISTANCE,
};
pub use value::Value;

/// Rotation rate of the robot, in radians per second (90°/s).
pub const ANGULAR_RATE: f64 = std::f64::consts::FRAC_PI_2;

/// Evaluate a program with default limits and the default scene.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(program: &Program) -> Result<Scene, EvalError> {
    Evaluator::new(program).run()
}

#[cfg(test)]
mod tests;
