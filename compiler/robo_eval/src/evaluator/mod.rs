//! Tree-walking evaluator.
//!
//! An [`Evaluator`] runs one program once. It owns everything the run
//! mutates (the call frames, the current speed, the scene under
//! construction) and only borrows the program tree. Create it with
//! [`EvaluatorBuilder`] or [`Evaluator::new`], then consume it with
//! [`Evaluator::run`].

mod builder;
mod call;
mod expr;
mod motion;
mod scope_guard;
mod stmt;

use rustc_hash::FxHashMap;

use robo_ir::{Function, Name, NodeRef, Program};

use crate::checkpoint::CheckpointHandler;
use crate::errors::{malformed, EvalError, EvalErrorKind};
use crate::limits::Budget;
use crate::{CancellationToken, Environment, Scene, Value};

pub use builder::EvaluatorBuilder;
pub use call::{CallFrame, CallStack};
pub use scope_guard::ScopedEvaluator;

/// Outcome of executing a statement or block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Next,
    /// A `return` is unwinding to the nearest call.
    Return(Value),
}

/// Evaluates a program into a [`Scene`].
pub struct Evaluator<'a> {
    pub(crate) program: &'a Program,
    /// Declared functions by name; the first declaration wins.
    pub(crate) registry: FxHashMap<Name, &'a Function>,
    pub(crate) env: Environment,
    pub(crate) call_stack: CallStack,
    pub(crate) scene: Scene,
    /// Current speed in mm/s.
    pub(crate) speed: f64,
    pub(crate) budget: Budget,
    pub(crate) cancel: CancellationToken,
    pub(crate) checkpoint: Box<dyn CheckpointHandler + 'a>,
}

impl<'a> Evaluator<'a> {
    /// Evaluator with default limits and the default scene layout.
    pub fn new(program: &'a Program) -> Self {
        EvaluatorBuilder::new(program).build()
    }

    /// Run the entry function and return the finished scene.
    ///
    /// Any runtime failure aborts the run; the partial scene is dropped.
    pub fn run(mut self) -> Result<Scene, EvalError> {
        let program = self.program;
        let Some(entry) = program.entry.as_ref() else {
            return Err(self.fail(
                malformed("program has no entry function"),
                NodeRef::Program,
            ));
        };

        self.budget = Budget::start(self.budget.limits().clone());
        tracing::debug!(
            functions = self.registry.len(),
            speed = self.speed,
            "evaluation started"
        );

        let flow = self.exec_block(entry.body)?;
        if let Flow::Return(value) = flow {
            tracing::trace!(%value, "entry function returned");
        }

        tracing::debug!(
            time = self.scene.time,
            snapshots = self.scene.timeline().len(),
            elapsed = ?self.budget.elapsed(),
            "evaluation finished"
        );
        Ok(self.scene)
    }

    /// Current variable frames.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Scene built so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Build an error at `node`, capturing the active call chain.
    pub(crate) fn fail(&self, kind: EvalErrorKind, node: NodeRef) -> EvalError {
        EvalError::new(kind, node, self.program.span_of(node))
            .with_backtrace(self.call_stack.capture(&self.program.interner))
    }

    /// Fail if cancellation was requested.
    pub(crate) fn poll_cancel(&self, node: NodeRef) -> Result<(), EvalError> {
        if self.cancel.is_cancelled() {
            tracing::warn!("evaluation cancelled");
            return Err(self.fail(EvalErrorKind::Cancelled, node));
        }
        Ok(())
    }
}
