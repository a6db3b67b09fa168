//! Robo Emit - Arduino code generation for RoboScript.
//!
//! Lowers a [`Program`] to an Arduino sketch for an Omni4WD base. Lowering
//! is purely symbolic: expressions are printed, never evaluated, and every
//! binary or unary operation is fully parenthesized so the output does not
//! depend on C++ precedence rules.
//!
//! # Example
//!
//! ```
//! use robo_ir::{LengthUnit, MoveDirection, ProgramBuilder};
//!
//! let mut b = ProgramBuilder::new();
//! let distance = b.number(30.0);
//! let step = b.movement(Some(MoveDirection::Forward), distance, Some(LengthUnit::Cm));
//! b.entry([step]);
//!
//! let sketch = robo_emit::emit(&b.finish()).unwrap();
//! assert!(sketch.lines().contains(&"    robot.setCarAdvance(currentSpeed);".to_string()));
//! ```

mod arduino;
mod context;

use std::fmt;

use robo_ir::{Program, StmtId};

pub use context::EmitContext;

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;

/// Emission precondition violations.
///
/// These indicate a malformed tree. Validated trees never produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("program has no entry function")]
    MissingEntry,

    #[error("statement {stmt:?} has no direction")]
    MissingDirection { stmt: StmtId },

    #[error("statement {stmt:?} has no unit")]
    MissingUnit { stmt: StmtId },
}

/// Generated sketch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedProgram {
    lines: Vec<String>,
}

impl EmittedProgram {
    /// Lines of the sketch, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole sketch as one text block ending in a newline.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EmittedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Lower a program to an Arduino sketch.
#[tracing::instrument(level = "debug", skip_all)]
pub fn emit(program: &Program) -> EmitResult<EmittedProgram> {
    let mut ctx = EmitContext::new(program);
    arduino::emit_program(&mut ctx)?;
    let lines = ctx.take_lines();
    tracing::debug!(lines = lines.len(), "sketch emitted");
    Ok(EmittedProgram { lines })
}
