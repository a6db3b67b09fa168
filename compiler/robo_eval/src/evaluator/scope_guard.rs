//! RAII guard for call frames.
//!
//! [`ScopedEvaluator`] pushes a variable frame when created and pops it when
//! dropped, so a frame never outlives its call, whether the body returns,
//! fails with `?`, or unwinds.

use std::ops::{Deref, DerefMut};

use robo_ir::Name;

use super::Evaluator;
use crate::Value;

/// Evaluator access inside a fresh call frame.
///
/// Implements `Deref`/`DerefMut` to [`Evaluator`]; the frame is popped on
/// drop.
pub struct ScopedEvaluator<'guard, 'a> {
    evaluator: &'guard mut Evaluator<'a>,
}

impl Drop for ScopedEvaluator<'_, '_> {
    fn drop(&mut self) {
        self.evaluator.env.pop_frame();
    }
}

impl<'a> Deref for ScopedEvaluator<'_, 'a> {
    type Target = Evaluator<'a>;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for ScopedEvaluator<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl<'a> Evaluator<'a> {
    /// Push a frame that is popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedEvaluator<'_, 'a> {
        self.env.push_frame();
        ScopedEvaluator { evaluator: self }
    }

    /// Run `f` in a new frame pre-populated with `bindings`.
    pub fn with_bindings<T, F, I>(&mut self, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_, 'a>) -> T,
        I: IntoIterator<Item = (Name, Value)>,
    {
        let mut scoped = self.scoped();
        for (name, value) in bindings {
            scoped.env.define(name, value);
        }
        f(&mut scoped)
    }
}
