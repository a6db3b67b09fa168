//! Program tree node types.
//!
//! The tree is produced once by the front end and is read-only afterwards.
//! Expressions and statements are sum types so every backend matches them
//! exhaustively.

mod expr;
mod operators;
mod stmt;
mod units;

pub use expr::{Expr, ExprKind};
pub use operators::{ArithmeticOp, ComparisonOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
pub use units::{
    LengthUnit, MoveDirection, ReturnType, RotateDirection, SensorKind, SpeedUnit, VarType,
};

use crate::{ExprArena, ExprId, Name, ParamRange, Span, StmtId, StmtRange, StringInterner};

/// Function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: Name,
    pub ty: VarType,
    pub span: Span,
}

/// Function definition. The entry function has no name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: Option<Name>,
    pub params: ParamRange,
    pub return_type: ReturnType,
    pub body: StmtRange,
    pub span: Span,
}

/// Identifies one function of a [`Program`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionRef {
    /// The anonymous entry function.
    Entry,
    /// Index into [`Program::functions`].
    Declared(usize),
}

/// Reference to a node of the tree, used to attach diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRef {
    Program,
    Function(FunctionRef),
    Param { function: FunctionRef, index: usize },
    Stmt(StmtId),
    Expr(ExprId),
}

/// A whole parsed script: the node arena, its identifiers, the declared
/// functions and the entry function.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub interner: StringInterner,
    pub arena: ExprArena,
    pub functions: Vec<Function>,
    pub entry: Option<Function>,
    pub span: Span,
}

impl Program {
    /// Resolve an identifier.
    #[inline]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Get a function by reference.
    pub fn function(&self, function: FunctionRef) -> Option<&Function> {
        match function {
            FunctionRef::Entry => self.entry.as_ref(),
            FunctionRef::Declared(index) => self.functions.get(index),
        }
    }

    /// Declared functions in order, followed by the entry function.
    pub fn all_functions(&self) -> impl Iterator<Item = (FunctionRef, &Function)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionRef::Declared(i), f))
            .chain(self.entry.iter().map(|f| (FunctionRef::Entry, f)))
    }

    /// First declared function with the given name.
    pub fn find_function(&self, name: Name) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == Some(name))
    }

    /// Parameters of a function.
    #[inline]
    pub fn params(&self, function: &Function) -> &[Param] {
        self.arena.get_params(function.params)
    }

    /// Statement IDs of a block.
    #[inline]
    pub fn block(&self, range: StmtRange) -> &[StmtId] {
        self.arena.get_stmt_list(range)
    }

    /// Human-readable label of a function, for messages.
    pub fn function_label(&self, function: FunctionRef) -> String {
        match self.function(function).and_then(|f| f.name) {
            Some(name) => format!("function `{}`", self.name(name)),
            None => "entry function".to_string(),
        }
    }

    /// Source span of a node, or `Span::DUMMY` if the reference is dangling.
    pub fn span_of(&self, node: NodeRef) -> Span {
        match node {
            NodeRef::Program => self.span,
            NodeRef::Function(f) => self.function(f).map_or(Span::DUMMY, |f| f.span),
            NodeRef::Param { function, index } => self
                .function(function)
                .and_then(|f| self.params(f).get(index))
                .map_or(Span::DUMMY, |p| p.span),
            NodeRef::Stmt(id) => self.arena.try_stmt(id).map_or(Span::DUMMY, |s| s.span),
            NodeRef::Expr(id) => self.arena.try_expr(id).map_or(Span::DUMMY, |e| e.span),
        }
    }
}
