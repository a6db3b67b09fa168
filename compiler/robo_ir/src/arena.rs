//! Arena allocation for the flat program tree.
//!
//! - Contiguous storage for all expressions and statements
//! - Child references use `ExprId`/`StmtId` indices
//! - Argument lists and blocks use ranges into flattened ID lists

use super::ast::{Expr, Param, Stmt};
use super::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};

/// Contiguous storage for every node of one program.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// Flattened expression lists (call arguments).
    expr_lists: Vec<ExprId>,
    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,
    /// Flattened statement lists (blocks).
    stmt_lists: Vec<StmtId>,
    /// All parameters.
    params: Vec<Param>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expressions =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds. Trees from untrusted sources should
    /// pass [`Program::check_structure`](crate::Program::check_structure) first.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get expression by ID, or `None` if out of bounds.
    #[inline]
    pub fn try_expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    /// Number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate expression list, return range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(exprs);
        let len = (self.expr_lists.len() as u32 - start) as u16;
        ExprRange::new(start, len)
    }

    /// Get expression list by range.
    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.start as usize..range.end()]
    }

    // ===== Statements =====

    /// Allocate statement, return ID.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get statement by ID, or `None` if out of bounds.
    #[inline]
    pub fn try_stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.stmts.get(id.index())
    }

    /// Number of statements.
    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Allocate a block (statement list), return range.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len() as u32;
        self.stmt_lists.extend(stmts);
        let len = (self.stmt_lists.len() as u32 - start) as u16;
        StmtRange::new(start, len)
    }

    /// Get the statements of a block.
    #[inline]
    #[track_caller]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.start as usize..range.end()]
    }

    // ===== Parameters =====

    /// Allocate parameter list, return range.
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = self.params.len() as u32;
        self.params.extend(params);
        let len = (self.params.len() as u32 - start) as u16;
        ParamRange::new(start, len)
    }

    /// Get parameters by range.
    #[inline]
    #[track_caller]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.start as usize..range.end()]
    }

    // ===== Raw tables (structure checks) =====

    pub(crate) fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub(crate) fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub(crate) fn expr_lists(&self) -> &[ExprId] {
        &self.expr_lists
    }

    pub(crate) fn stmt_lists(&self) -> &[StmtId] {
        &self.stmt_lists
    }

    pub(crate) fn params(&self) -> &[Param] {
        &self.params
    }
}
