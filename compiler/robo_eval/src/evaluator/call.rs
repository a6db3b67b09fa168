//! User function calls.

use smallvec::SmallVec;

use robo_ir::{ExprId, ExprRange, Name, NodeRef, Span, StringInterner};
use robo_stack::DepthTracker;

use super::{Evaluator, Flow};
use crate::errors::{type_mismatch, EvalErrorKind, EvalResult};
use crate::value::type_name;
use crate::Value;

/// One active call.
#[derive(Clone, Debug)]
pub struct CallFrame {
    pub name: Name,
    /// Where the call was made.
    pub call_span: Span,
}

/// Active calls, bounded by the configured call depth.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    depth: DepthTracker,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            depth: DepthTracker::new(max_depth),
        }
    }

    /// Push a frame. On overflow nothing is pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalErrorKind> {
        self.depth
            .enter()
            .map_err(|err| EvalErrorKind::RecursionLimit { limit: err.limit })?;
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        if self.frames.pop().is_some() {
            self.depth.exit();
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Names of the active functions, innermost first.
    pub fn capture(&self, interner: &StringInterner) -> Vec<String> {
        self.frames
            .iter()
            .rev()
            .map(|frame| interner.lookup(frame.name).to_string())
            .collect()
    }
}

impl Evaluator<'_> {
    /// Call a declared function.
    ///
    /// Arguments are evaluated left to right in the caller's frame, then
    /// bound by position in a new frame for the callee.
    pub(crate) fn call_function(
        &mut self,
        func: Name,
        args: ExprRange,
        node: NodeRef,
    ) -> EvalResult<Value> {
        self.poll_cancel(node)?;

        let program = self.program;
        let Some(function) = self.registry.get(&func).copied() else {
            return Err(self.fail(
                EvalErrorKind::UndefinedFunction {
                    name: program.name(func).to_string(),
                },
                node,
            ));
        };

        let arg_ids: &[ExprId] = program.arena.get_expr_list(args);
        let params = program.params(function);
        if arg_ids.len() != params.len() {
            return Err(self.fail(
                EvalErrorKind::ArityMismatch {
                    name: program.name(func).to_string(),
                    expected: params.len(),
                    got: arg_ids.len(),
                },
                node,
            ));
        }

        let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(arg_ids.len());
        for (&arg, param) in arg_ids.iter().zip(params) {
            let value = self.eval_expr(arg)?;
            if !value.has_type(param.ty) {
                let kind = type_mismatch(type_name(param.ty), value.type_name());
                return Err(self.fail(kind, NodeRef::Expr(arg)));
            }
            values.push(value);
        }

        let frame = CallFrame {
            name: func,
            call_span: program.span_of(node),
        };
        if let Err(kind) = self.call_stack.push(frame) {
            return Err(self.fail(kind, node));
        }
        tracing::trace!(
            function = program.name(func),
            depth = self.call_stack.depth(),
            "call"
        );

        let bindings = params.iter().map(|p| p.name).zip(values);
        let result = self.with_bindings(bindings, |scoped| scoped.exec_block(function.body));
        self.call_stack.pop();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Next => Ok(Value::Void),
        }
    }
}
