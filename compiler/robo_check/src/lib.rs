//! Robo Check - semantic validation of RoboScript program trees.
//!
//! [`validate`] walks a [`Program`] once and returns every problem it finds
//! as a [`Diagnostic`]. It never stops at the first error, never mutates the
//! tree, and returns the same list every time it is run on the same tree.
//!
//! # Traversal order
//!
//! Program-level rules come first, then each declared function in
//! declaration order, then the entry function. Inside a function the
//! parameters are checked, then the body in statement order. Operands are
//! checked before the node that uses them, so a diagnostic on a
//! sub-expression always precedes one on its parent.
//!
//! # Types
//!
//! Expressions are typed bottom-up over [`Ty`]. `Unknown` marks anything
//! that could not be inferred and is accepted everywhere, so one mistake
//! yields one diagnostic rather than a cascade.

mod checker;
mod expr;
mod program;
mod scope;
mod stmt;
mod types;

use robo_diagnostic::Diagnostic;
use robo_ir::Program;

pub use checker::Validator;
pub use types::Ty;

/// Validate a whole program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn validate(program: &Program) -> Vec<Diagnostic> {
    let diagnostics = Validator::new(program).run();
    tracing::debug!(count = diagnostics.len(), "validation finished");
    diagnostics
}

#[cfg(test)]
mod tests;
