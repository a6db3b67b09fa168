//! Structural well-formedness of a program tree.
//!
//! The core crates assume every ID and range points inside the arena and
//! that the tree is acyclic. Trees built with [`ProgramBuilder`] satisfy
//! this by construction; trees deserialized from an external front end are
//! checked here once, at the boundary.
//!
//! Acyclicity is enforced by requiring every child to be allocated before
//! its parent (children have smaller IDs).
//!
//! [`ProgramBuilder`]: crate::ProgramBuilder

use std::fmt;

use crate::ast::{ExprKind, Function, StmtKind};
use crate::{ExprId, ExprRange, Name, ParamRange, Program, StmtId, StmtRange};

/// A structural defect found in a program tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructureError {
    /// A name is not in the string table.
    UnknownName { name: u32 },
    /// An expression ID points outside the arena.
    DanglingExpr { id: u32 },
    /// A statement ID points outside the arena.
    DanglingStmt { id: u32 },
    /// A list range runs past the end of its table.
    RangeOutOfBounds { table: &'static str, end: usize },
    /// A child is allocated after its parent.
    ForwardReference { parent: String, child: String },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName { name } => write!(f, "name #{name} is not in the string table"),
            Self::DanglingExpr { id } => write!(f, "expression #{id} does not exist"),
            Self::DanglingStmt { id } => write!(f, "statement #{id} does not exist"),
            Self::RangeOutOfBounds { table, end } => {
                write!(f, "{table} range ending at {end} is out of bounds")
            }
            Self::ForwardReference { parent, child } => {
                write!(f, "{parent} refers to {child}, which is allocated after it")
            }
        }
    }
}

impl std::error::Error for StructureError {}

struct Checker<'a> {
    program: &'a Program,
}

impl Checker<'_> {
    fn name(&self, name: Name) -> Result<(), StructureError> {
        if self.program.interner.contains(name) {
            Ok(())
        } else {
            Err(StructureError::UnknownName { name: name.raw() })
        }
    }

    fn expr_child(&self, parent: Option<ExprId>, child: ExprId) -> Result<(), StructureError> {
        if child.index() >= self.program.arena.expr_count() {
            return Err(StructureError::DanglingExpr { id: child.raw() });
        }
        if let Some(parent) = parent {
            if child >= parent {
                return Err(StructureError::ForwardReference {
                    parent: format!("{parent:?}"),
                    child: format!("{child:?}"),
                });
            }
        }
        Ok(())
    }

    fn expr_range(&self, range: ExprRange) -> Result<(), StructureError> {
        if range.end() > self.program.arena.expr_lists().len() {
            return Err(StructureError::RangeOutOfBounds {
                table: "argument",
                end: range.end(),
            });
        }
        Ok(())
    }

    fn block(&self, parent: Option<StmtId>, range: StmtRange) -> Result<(), StructureError> {
        if range.end() > self.program.arena.stmt_lists().len() {
            return Err(StructureError::RangeOutOfBounds {
                table: "block",
                end: range.end(),
            });
        }
        for &child in self.program.arena.get_stmt_list(range) {
            if child.index() >= self.program.arena.stmt_count() {
                return Err(StructureError::DanglingStmt { id: child.raw() });
            }
            if let Some(parent) = parent {
                if child >= parent {
                    return Err(StructureError::ForwardReference {
                        parent: format!("{parent:?}"),
                        child: format!("{child:?}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn params(&self, range: ParamRange) -> Result<(), StructureError> {
        if range.end() > self.program.arena.params().len() {
            return Err(StructureError::RangeOutOfBounds {
                table: "parameter",
                end: range.end(),
            });
        }
        self.program
            .arena
            .get_params(range)
            .iter()
            .try_for_each(|p| self.name(p.name))
    }

    fn function(&self, function: &Function) -> Result<(), StructureError> {
        if let Some(name) = function.name {
            self.name(name)?;
        }
        self.params(function.params)?;
        self.block(None, function.body)
    }

    fn exprs(&self) -> Result<(), StructureError> {
        for &id in self.program.arena.expr_lists() {
            self.expr_child(None, id)?;
        }
        for (index, expr) in self.program.arena.exprs().iter().enumerate() {
            let parent = Some(ExprId::new(index as u32));
            match &expr.kind {
                ExprKind::Number(_) | ExprKind::Bool(_) | ExprKind::Sensor(_) => {}
                ExprKind::Ident(name) => self.name(*name)?,
                ExprKind::Arithmetic { left, right, .. }
                | ExprKind::Comparison { left, right, .. } => {
                    self.expr_child(parent, *left)?;
                    self.expr_child(parent, *right)?;
                }
                ExprKind::Unary { operand, .. } => self.expr_child(parent, *operand)?,
                ExprKind::Unit { value, .. } => self.expr_child(parent, *value)?,
                ExprKind::Call { func, args } => {
                    self.name(*func)?;
                    self.expr_range(*args)?;
                    for &arg in self.program.arena.get_expr_list(*args) {
                        self.expr_child(parent, arg)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn stmts(&self) -> Result<(), StructureError> {
        for (index, stmt) in self.program.arena.stmts().iter().enumerate() {
            let parent = Some(StmtId::new(index as u32));
            match &stmt.kind {
                StmtKind::VarDecl { name, init, .. } => {
                    self.name(*name)?;
                    if let Some(init) = init {
                        self.expr_child(None, *init)?;
                    }
                }
                StmtKind::Assign { target, value } => {
                    self.name(*target)?;
                    self.expr_child(None, *value)?;
                }
                StmtKind::Loop { cond, body } => {
                    self.expr_child(None, *cond)?;
                    self.block(parent, *body)?;
                }
                StmtKind::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    self.expr_child(None, *cond)?;
                    self.block(parent, *then_branch)?;
                    self.block(parent, *else_branch)?;
                }
                StmtKind::Movement { distance, .. } => self.expr_child(None, *distance)?,
                StmtKind::Rotation { angle, .. } => self.expr_child(None, *angle)?,
                StmtKind::SetSpeed { speed, .. } => self.expr_child(None, *speed)?,
                StmtKind::Call { func, args } => {
                    self.name(*func)?;
                    self.expr_range(*args)?;
                    for &arg in self.program.arena.get_expr_list(*args) {
                        self.expr_child(None, arg)?;
                    }
                }
                StmtKind::Return(value) => {
                    if let Some(value) = value {
                        self.expr_child(None, *value)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Program {
    /// Verify that every ID, range and name in the tree is in bounds and that
    /// the tree is acyclic.
    pub fn check_structure(&self) -> Result<(), StructureError> {
        let checker = Checker { program: self };
        checker.exprs()?;
        checker.stmts()?;
        for (_, function) in self.all_functions() {
            checker.function(function)?;
        }
        Ok(())
    }
}
