//! Stack safety for the recursive tree walkers.
//!
//! The validator, the evaluator and the emitter all recurse over nested
//! expressions and blocks, and a generated tree can be nested arbitrarily
//! deep. Two tools cover this:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand
//!   (`stacker` on native targets, a passthrough on WASM).
//! - [`DepthTracker`] counts logical nesting (user-level calls) against a
//!   configured ceiling, so runaway recursion in a script becomes an error
//!   instead of unbounded memory growth.

use std::fmt;

/// Grow the stack when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// Wrap every recursive step of a tree walk:
///
/// ```text
/// fn walk_expr(&mut self, id: ExprId) -> Ty {
///     ensure_sufficient_stack(|| self.walk_expr_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Nesting ceiling was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The configured ceiling.
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nesting depth exceeded limit of {}", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Counts logical nesting depth against a ceiling.
///
/// Every successful [`enter`](Self::enter) must be paired with one
/// [`exit`](Self::exit).
#[derive(Clone, Debug)]
pub struct DepthTracker {
    current: usize,
    limit: usize,
}

impl DepthTracker {
    pub const fn new(limit: usize) -> Self {
        DepthTracker { current: 0, limit }
    }

    /// Enter one level, failing if that would exceed the limit.
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.current >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.current += 1;
        Ok(())
    }

    /// Leave one level.
    pub fn exit(&mut self) {
        debug_assert!(self.current > 0, "DepthTracker::exit without enter");
        self.current = self.current.saturating_sub(1);
    }

    #[inline]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests;
