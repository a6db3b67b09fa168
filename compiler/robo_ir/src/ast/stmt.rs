//! Statement nodes.
//!
//! Direction and unit fields are optional: a recovering front end may hand
//! over a command with a part missing, and the validator reports it.

use crate::{ExprId, ExprRange, Name, Span, StmtRange};

use super::units::{LengthUnit, MoveDirection, RotateDirection, SpeedUnit, VarType};

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// `var name: ty = init`
    VarDecl {
        name: Name,
        ty: Option<VarType>,
        init: Option<ExprId>,
    },
    /// `target = value`
    Assign { target: Name, value: ExprId },
    /// `loop cond { body }`, re-testing `cond` before each iteration.
    Loop { cond: ExprId, body: StmtRange },
    /// `if cond { then_branch } else { else_branch }`
    If {
        cond: ExprId,
        then_branch: StmtRange,
        else_branch: StmtRange,
    },
    /// Translate the robot.
    Movement {
        direction: Option<MoveDirection>,
        distance: ExprId,
        unit: Option<LengthUnit>,
    },
    /// Rotate the robot in place by `angle` degrees.
    Rotation {
        direction: Option<RotateDirection>,
        angle: ExprId,
    },
    /// Change the current speed.
    SetSpeed {
        speed: ExprId,
        unit: Option<SpeedUnit>,
    },
    /// Call of a declared function, for its effects.
    Call { func: Name, args: ExprRange },
    /// `return` with an optional value.
    Return(Option<ExprId>),
}
