//! Runtime errors.
//!
//! Every runtime failure is fatal to the run. `EvalErrorKind` carries the
//! structured data of the failure; [`EvalError`] adds where it happened and
//! the active call chain, and converts to a [`Diagnostic`] so runtime errors
//! render the same way validator findings do.

use std::fmt;
use std::time::Duration;

use robo_diagnostic::{Diagnostic, ErrorCode};
use robo_ir::{NodeRef, Span};

/// Result of evaluating one expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// The ceiling a loop ran into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BudgetCeiling {
    /// Per-loop iteration ceiling.
    Iterations(u64),
    /// Wall-clock ceiling for the whole run.
    Duration(Duration),
}

impl fmt::Display for BudgetCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetCeiling::Iterations(n) => write!(f, "limit of {n} iterations"),
            BudgetCeiling::Duration(d) => write!(f, "run time limit of {d:?}"),
        }
    }
}

/// Typed category of a runtime failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    #[error("loop exceeded its {ceiling} after {iterations} iterations ({elapsed:?} elapsed)")]
    BudgetExceeded {
        iterations: u64,
        elapsed: Duration,
        ceiling: BudgetCeiling,
    },

    #[error("evaluation cancelled")]
    Cancelled,

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("function `{name}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("maximum call depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },

    #[error("cannot move at a speed of {speed} mm/s")]
    InvalidSpeed { speed: f64 },

    #[error("malformed program tree: {detail}")]
    Malformed { detail: String },
}

impl EvalErrorKind {
    /// Error code used when the failure is rendered as a diagnostic.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E6002,
            EvalErrorKind::BudgetExceeded { .. } => ErrorCode::E6003,
            EvalErrorKind::Cancelled => ErrorCode::E6004,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6006,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E6007,
            EvalErrorKind::InvalidSpeed { .. } => ErrorCode::E6008,
            EvalErrorKind::Malformed { .. } => ErrorCode::E9001,
        }
    }
}

/// A fatal runtime failure, located in the program tree.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Node being evaluated when the failure occurred.
    pub node: NodeRef,
    pub span: Span,
    /// Names of the active functions, innermost first. Empty in the entry
    /// function.
    pub backtrace: Vec<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, node: NodeRef, span: Span) -> Self {
        EvalError {
            kind,
            node,
            span,
            backtrace: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Vec<String>) -> Self {
        self.backtrace = backtrace;
        self
    }

    /// Convert to a diagnostic for uniform rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .at(self.node, self.span);
        for name in &self.backtrace {
            diag = diag.with_note(format!("in function `{name}`"));
        }
        match &self.kind {
            EvalErrorKind::BudgetExceeded { .. } => diag.with_suggestion(
                "make sure the loop condition eventually becomes false, or raise the limit",
            ),
            EvalErrorKind::InvalidSpeed { .. } => {
                diag.with_suggestion("set a positive speed before moving")
            }
            _ => diag,
        }
    }
}

// Factory functions

pub(crate) fn malformed(detail: impl Into<String>) -> EvalErrorKind {
    EvalErrorKind::Malformed {
        detail: detail.into(),
    }
}

pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> EvalErrorKind {
    EvalErrorKind::TypeMismatch { expected, found }
}
