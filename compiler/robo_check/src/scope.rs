//! Lexical scopes for name resolution.
//!
//! One frame per block, innermost last. Parameters occupy the outermost
//! frame of a function. The first binding of a name in a frame wins;
//! duplicates are reported by the caller and otherwise ignored.

use robo_ir::Name;
use rustc_hash::FxHashMap;

use crate::Ty;

#[derive(Default)]
pub(crate) struct Scopes {
    frames: Vec<FxHashMap<Name, Ty>>,
}

impl Scopes {
    pub(crate) fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    pub(crate) fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "Scopes::pop on empty stack");
        self.frames.pop();
    }

    /// Bind `name` in the innermost frame.
    ///
    /// Returns `false` (leaving the first binding in place) if the frame
    /// already binds it.
    pub(crate) fn declare(&mut self, name: Name, ty: Ty) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };
        if frame.contains_key(&name) {
            return false;
        }
        frame.insert(name, ty);
        true
    }

    /// Resolve `name` from the innermost frame outwards.
    pub(crate) fn lookup(&self, name: Name) -> Option<Ty> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&name).copied())
    }

    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}
