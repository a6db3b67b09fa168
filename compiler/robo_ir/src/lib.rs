//! Robo IR - Program Tree Types
//!
//! This crate contains the program tree shared by every RoboScript backend:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Statement and expression nodes, units, directions and sensors
//! - Arena allocation for nodes
//! - A builder for constructing trees in code
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers → `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, use `ExprId(u32)` indices
//! - **Read-Only After Construction**: a finished [`Program`] is `Send + Sync`
//!   and shared by the validator, the evaluator and the emitter
//!
//! With the `serde` feature, a [`Program`] serializes to and from JSON; this
//! is how external front ends hand trees to the toolchain. Deserialized trees
//! should pass [`Program::check_structure`] before use.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;
mod span;
mod structure;

pub use arena::ExprArena;
pub use ast::{
    ArithmeticOp, ComparisonOp, Expr, ExprKind, Function, FunctionRef, LengthUnit, MoveDirection,
    NodeRef, Param, Program, ReturnType, RotateDirection, SensorKind, SpeedUnit, Stmt, StmtKind,
    UnaryOp, VarType,
};
pub use builder::ProgramBuilder;
pub use expr_id::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use structure::StructureError;

static_assert_size!(Span, 8);
static_assert_size!(Name, 4);
static_assert_size!(ExprId, 4);
static_assert_size!(StmtId, 4);
