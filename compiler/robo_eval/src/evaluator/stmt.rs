//! Statement execution.

use robo_ir::{ExprId, NodeRef, StmtId, StmtKind, StmtRange};
use robo_stack::ensure_sufficient_stack;

use super::{Evaluator, Flow};
use crate::checkpoint::Progress;
use crate::errors::{malformed, type_mismatch, EvalResult};
use crate::value::type_name;
use crate::Value;

impl Evaluator<'_> {
    /// Execute a block in the current frame, stopping at the first `return`.
    pub(crate) fn exec_block(&mut self, block: StmtRange) -> EvalResult<Flow> {
        for &id in self.program.block(block) {
            if let flow @ Flow::Return(_) = self.exec_stmt(id)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Next)
    }

    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> EvalResult<Flow> {
        let program = self.program;
        let node = NodeRef::Stmt(id);
        match &program.arena.get_stmt(id).kind {
            StmtKind::VarDecl { name, ty, init } => {
                let value = match init {
                    Some(init) => self.eval_expr(*init)?,
                    None => Value::default_for(*ty),
                };
                if let Some(ty) = ty {
                    if !value.has_type(*ty) {
                        let kind = type_mismatch(type_name(*ty), value.type_name());
                        return Err(self.fail(kind, node));
                    }
                }
                self.env.define(*name, value);
            }
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(*value)?;
                if self.env.assign(*target, value).is_err() {
                    return Err(self.undefined_variable(*target, node));
                }
            }
            StmtKind::Loop { cond, body } => return self.exec_loop(*cond, *body, node),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_condition(*cond)? {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_block(*branch);
            }
            StmtKind::Movement {
                direction,
                distance,
                unit,
            } => {
                let Some(direction) = direction else {
                    return Err(self.fail(malformed("movement has no direction"), node));
                };
                let Some(unit) = unit else {
                    return Err(self.fail(malformed("movement has no unit"), node));
                };
                let distance = self.eval_number(*distance)?;
                self.apply_movement(*direction, unit.to_mm(distance), node)?;
            }
            StmtKind::Rotation { direction, angle } => {
                let Some(direction) = direction else {
                    return Err(self.fail(malformed("rotation has no direction"), node));
                };
                let degrees = self.eval_number(*angle)?;
                self.apply_rotation(*direction, degrees);
            }
            StmtKind::SetSpeed { speed, unit } => {
                let Some(unit) = unit else {
                    return Err(self.fail(malformed("speed change has no unit"), node));
                };
                let speed = self.eval_number(*speed)?;
                self.apply_speed(unit.to_mm_per_sec(speed));
            }
            StmtKind::Call { func, args } => {
                self.call_function(*func, *args, node)?;
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(value) => self.eval_expr(*value)?,
                    None => Value::Void,
                };
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Next)
    }

    /// Run a loop until its condition is false, a `return` unwinds through
    /// it, or it exhausts its budget.
    fn exec_loop(&mut self, cond: ExprId, body: StmtRange, node: NodeRef) -> EvalResult<Flow> {
        let mut completed: u64 = 0;
        while self.eval_condition(cond)? {
            if let Err(exceeded) = self.budget.check_iteration(completed) {
                tracing::warn!(iterations = completed, "loop iteration ceiling reached");
                return Err(self.fail(exceeded.into(), node));
            }
            if let flow @ Flow::Return(_) = self.exec_block(body)? {
                return Ok(flow);
            }
            completed += 1;
            if self.budget.tick() {
                self.reach_checkpoint(node)?;
            }
        }
        Ok(Flow::Next)
    }

    /// Poll cancellation and the wall clock, then notify the handler.
    fn reach_checkpoint(&mut self, node: NodeRef) -> EvalResult<()> {
        self.poll_cancel(node)?;
        if let Err(exceeded) = self.budget.check_clock() {
            tracing::warn!(elapsed = ?exceeded.elapsed, "run time ceiling reached");
            return Err(self.fail(exceeded.into(), node));
        }
        let progress = Progress {
            iterations: self.budget.total_iterations(),
            elapsed: self.budget.elapsed(),
            scene_time: self.scene.time,
        };
        self.checkpoint.checkpoint(progress);
        Ok(())
    }
}
