//! Convenience construction of program trees.
//!
//! Children are allocated before their parents, so every tree built here
//! passes [`Program::check_structure`].

use crate::ast::{
    ArithmeticOp, ComparisonOp, Expr, ExprKind, Function, FunctionRef, LengthUnit, MoveDirection,
    Param, Program, ReturnType, RotateDirection, SensorKind, SpeedUnit, Stmt, StmtKind, UnaryOp,
    VarType,
};
use crate::{ExprArena, ExprId, Name, Span, StmtId, StringInterner};

/// Incrementally builds a [`Program`].
///
/// Every node gets the span set by [`ProgramBuilder::at`], which starts as
/// [`Span::DUMMY`].
///
/// ```
/// use robo_ir::{LengthUnit, MoveDirection, ProgramBuilder};
///
/// let mut b = ProgramBuilder::new();
/// let distance = b.number(100.0);
/// let step = b.movement(Some(MoveDirection::Forward), distance, Some(LengthUnit::Mm));
/// b.entry([step]);
/// let program = b.finish();
/// assert!(program.entry.is_some());
/// ```
#[derive(Default)]
pub struct ProgramBuilder {
    interner: StringInterner,
    arena: ExprArena,
    functions: Vec<Function>,
    entry: Option<Function>,
    span: Span,
    /// Union of every span set so far.
    extent: Span,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span attached to nodes allocated from now on.
    pub fn at(&mut self, span: Span) -> &mut Self {
        self.span = span;
        self.extent = if self.extent.is_dummy() {
            span
        } else {
            self.extent.merge(span)
        };
        self
    }

    /// Intern an identifier.
    pub fn name(&mut self, text: &str) -> Name {
        self.interner.intern(text)
    }

    // ===== Expressions =====

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.span))
    }

    pub fn number(&mut self, value: f64) -> ExprId {
        self.expr(ExprKind::Number(value))
    }

    pub fn boolean(&mut self, value: bool) -> ExprId {
        self.expr(ExprKind::Bool(value))
    }

    pub fn var(&mut self, name: &str) -> ExprId {
        let name = self.name(name);
        self.expr(ExprKind::Ident(name))
    }

    pub fn arith(&mut self, op: ArithmeticOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Arithmetic { op, left, right })
    }

    pub fn compare(&mut self, op: ComparisonOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Comparison { op, left, right })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Unary { op, operand })
    }

    pub fn unit(&mut self, value: ExprId, unit: LengthUnit) -> ExprId {
        self.expr(ExprKind::Unit { value, unit })
    }

    pub fn sensor(&mut self, kind: SensorKind) -> ExprId {
        self.expr(ExprKind::Sensor(kind))
    }

    pub fn call_expr(&mut self, func: &str, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let func = self.name(func);
        let args = self.arena.alloc_expr_list(args);
        self.expr(ExprKind::Call { func, args })
    }

    // ===== Statements =====

    fn stmt(&mut self, kind: StmtKind) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, self.span))
    }

    pub fn declare(&mut self, name: &str, ty: Option<VarType>, init: Option<ExprId>) -> StmtId {
        let name = self.name(name);
        self.stmt(StmtKind::VarDecl { name, ty, init })
    }

    pub fn assign(&mut self, target: &str, value: ExprId) -> StmtId {
        let target = self.name(target);
        self.stmt(StmtKind::Assign { target, value })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: impl IntoIterator<Item = StmtId>) -> StmtId {
        let body = self.arena.alloc_stmt_list(body);
        self.stmt(StmtKind::Loop { cond, body })
    }

    pub fn if_else(
        &mut self,
        cond: ExprId,
        then_branch: impl IntoIterator<Item = StmtId>,
        else_branch: impl IntoIterator<Item = StmtId>,
    ) -> StmtId {
        let then_branch = self.arena.alloc_stmt_list(then_branch);
        let else_branch = self.arena.alloc_stmt_list(else_branch);
        self.stmt(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn movement(
        &mut self,
        direction: Option<MoveDirection>,
        distance: ExprId,
        unit: Option<LengthUnit>,
    ) -> StmtId {
        self.stmt(StmtKind::Movement {
            direction,
            distance,
            unit,
        })
    }

    pub fn rotation(&mut self, direction: Option<RotateDirection>, angle: ExprId) -> StmtId {
        self.stmt(StmtKind::Rotation { direction, angle })
    }

    pub fn set_speed(&mut self, speed: ExprId, unit: Option<SpeedUnit>) -> StmtId {
        self.stmt(StmtKind::SetSpeed { speed, unit })
    }

    pub fn call_stmt(&mut self, func: &str, args: impl IntoIterator<Item = ExprId>) -> StmtId {
        let func = self.name(func);
        let args = self.arena.alloc_expr_list(args);
        self.stmt(StmtKind::Call { func, args })
    }

    pub fn ret(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt(StmtKind::Return(value))
    }

    // ===== Functions =====

    /// Declare a named function. Duplicates are kept; the validator reports
    /// them.
    pub fn function(
        &mut self,
        name: &str,
        params: &[(&str, VarType)],
        return_type: ReturnType,
        body: impl IntoIterator<Item = StmtId>,
    ) -> FunctionRef {
        let name = self.name(name);
        let span = self.span;
        let params: Vec<Param> = params
            .iter()
            .map(|&(param, ty)| Param {
                name: self.interner.intern(param),
                ty,
                span,
            })
            .collect();
        let params = self.arena.alloc_params(params);
        let body = self.arena.alloc_stmt_list(body);
        self.functions.push(Function {
            name: Some(name),
            params,
            return_type,
            body,
            span,
        });
        FunctionRef::Declared(self.functions.len() - 1)
    }

    /// Set the entry function (void, no parameters).
    pub fn entry(&mut self, body: impl IntoIterator<Item = StmtId>) -> FunctionRef {
        self.entry_returning(ReturnType::Void, body)
    }

    /// Set the entry function with an explicit return type.
    ///
    /// Only a void entry is valid; front ends may still produce others.
    pub fn entry_returning(
        &mut self,
        return_type: ReturnType,
        body: impl IntoIterator<Item = StmtId>,
    ) -> FunctionRef {
        let body = self.arena.alloc_stmt_list(body);
        self.entry = Some(Function {
            name: None,
            params: crate::ParamRange::EMPTY,
            return_type,
            body,
            span: self.span,
        });
        FunctionRef::Entry
    }

    /// Finish the tree.
    pub fn finish(self) -> Program {
        Program {
            interner: self.interner,
            arena: self.arena,
            functions: self.functions,
            entry: self.entry,
            span: self.extent,
        }
    }
}
