//! `EvaluatorBuilder` for configuring a run.

use std::time::Duration;

use rustc_hash::FxHashMap;

use robo_ir::Program;

use super::{CallStack, Evaluator};
use crate::checkpoint::{CheckpointHandler, NoopCheckpoint};
use crate::limits::Budget;
use crate::{CancellationToken, EvalLimits, Environment, Scene, SceneLayout};

/// Builder for [`Evaluator`].
///
/// Defaults: [`EvalLimits::default`], [`SceneLayout::default`], a fresh
/// cancellation token and no checkpoint handler.
pub struct EvaluatorBuilder<'a> {
    program: &'a Program,
    limits: EvalLimits,
    layout: SceneLayout,
    cancel: Option<CancellationToken>,
    checkpoint: Option<Box<dyn CheckpointHandler + 'a>>,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            limits: EvalLimits::default(),
            layout: SceneLayout::default(),
            cancel: None,
            checkpoint: None,
        }
    }

    /// Replace all limits.
    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn max_loop_iterations(mut self, max: u64) -> Self {
        self.limits.max_loop_iterations = max;
        self
    }

    #[must_use]
    pub fn max_run_duration(mut self, max: Duration) -> Self {
        self.limits.max_run_duration = max;
        self
    }

    #[must_use]
    pub fn checkpoint_interval(mut self, interval: u64) -> Self {
        self.limits.checkpoint_interval = interval;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, max: usize) -> Self {
        self.limits.max_call_depth = max;
        self
    }

    /// Set the initial scene.
    #[must_use]
    pub fn layout(mut self, layout: SceneLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Share a cancellation token with the caller.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Receive loop checkpoints.
    #[must_use]
    pub fn checkpoint(mut self, handler: impl CheckpointHandler + 'a) -> Self {
        self.checkpoint = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        let program = self.program;
        let mut registry = FxHashMap::default();
        for function in &program.functions {
            if let Some(name) = function.name {
                registry.entry(name).or_insert(function);
            }
        }

        let scene = Scene::new(&self.layout);
        Evaluator {
            program,
            registry,
            env: Environment::new(),
            call_stack: CallStack::new(self.limits.max_call_depth),
            speed: scene.robot.speed,
            scene,
            budget: Budget::start(self.limits),
            cancel: self.cancel.unwrap_or_default(),
            checkpoint: self
                .checkpoint
                .unwrap_or_else(|| Box::new(NoopCheckpoint)),
        }
    }
}
