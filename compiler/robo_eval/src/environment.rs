//! Variable storage for the evaluator.
//!
//! One frame per active function call, stacked; the bottom frame belongs to
//! the entry function. Name resolution only consults the current frame, so a
//! callee never sees its caller's variables. Blocks inside a function share
//! their function's frame.

use rustc_hash::FxHashMap;

use robo_ir::Name;

use crate::Value;

/// Assignment to a name that has no binding in the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unbound(pub Name);

/// Bindings of one function call.
#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<Name, Value>,
}

/// Stack of call frames; the last frame is current.
#[derive(Clone, Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// Create an environment holding only the entry frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
        }
    }

    /// Number of frames, including the entry frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push an empty frame for a call.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the current frame. The entry frame is never popped.
    #[inline]
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    #[inline]
    fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[inline]
    fn current_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Bind `name` in the current frame, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        if let Some(frame) = self.current_mut() {
            frame.bindings.insert(name, value);
        }
    }

    /// Look up `name` in the current frame.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current()?.bindings.get(&name).copied()
    }

    /// Overwrite an existing binding in the current frame.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Unbound> {
        match self
            .current_mut()
            .and_then(|frame| frame.bindings.get_mut(&name))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Unbound(name)),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
