//! Expression nodes.

use crate::{ExprId, ExprRange, Name, Span};

use super::operators::{ArithmeticOp, ComparisonOp, UnaryOp};
use super::units::{LengthUnit, SensorKind};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Numeric literal (`42`, `2.5`).
    Number(f64),
    /// Boolean literal (`true`, `false`).
    Bool(bool),
    /// Reference to a variable or parameter.
    Ident(Name),
    /// `left op right` with `op` in `+ - * / %`.
    Arithmetic {
        op: ArithmeticOp,
        left: ExprId,
        right: ExprId,
    },
    /// `left op right` with `op` in `< <= > >= == !=`.
    Comparison {
        op: ComparisonOp,
        left: ExprId,
        right: ExprId,
    },
    /// `-operand` or `!operand`.
    Unary { op: UnaryOp, operand: ExprId },
    /// A quantity with an explicit length unit (`30 cm`).
    Unit { value: ExprId, unit: LengthUnit },
    /// Read a robot sensor.
    Sensor(SensorKind),
    /// Call of a declared function, used for its value.
    Call { func: Name, args: ExprRange },
}
