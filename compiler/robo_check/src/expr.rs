//! Expression typing and operator rules.

use robo_diagnostic::ErrorCode;
use robo_ir::{ExprId, ExprKind, NodeRef, UnaryOp};
use robo_stack::ensure_sufficient_stack;

use crate::checker::Validator;
use crate::Ty;

impl Validator<'_> {
    /// Infer the type of an expression, reporting problems in its operands
    /// before problems in the expression itself.
    pub(crate) fn infer_expr(&mut self, id: ExprId) -> Ty {
        ensure_sufficient_stack(|| self.infer_expr_inner(id))
    }

    fn infer_expr_inner(&mut self, id: ExprId) -> Ty {
        let program = self.program;
        let node = NodeRef::Expr(id);

        match &program.arena.get_expr(id).kind {
            ExprKind::Number(_) | ExprKind::Sensor(_) => Ty::Number,
            ExprKind::Bool(_) => Ty::Boolean,

            ExprKind::Ident(name) => {
                if let Some(ty) = self.scopes.lookup(*name) {
                    ty
                } else {
                    self.error(
                        ErrorCode::E1008,
                        node,
                        Some("name"),
                        format!("undeclared variable `{}`", program.name(*name)),
                    );
                    Ty::Unknown
                }
            }

            ExprKind::Arithmetic { op, left, right } => {
                let left_ty = self.infer_expr(*left);
                let right_ty = self.infer_expr(*right);
                for (ty, side) in [(left_ty, "left"), (right_ty, "right")] {
                    if !ty.accepts_as(Ty::Number) {
                        self.error(
                            ErrorCode::E1017,
                            node,
                            Some(side),
                            format!(
                                "arithmetic operator `{}` requires numeric operands, found `{ty}` on the {side}",
                                op.as_symbol()
                            ),
                        );
                    }
                }
                if left_ty == Ty::Number && right_ty == Ty::Number {
                    Ty::Number
                } else {
                    Ty::Unknown
                }
            }

            ExprKind::Comparison { op, left, right } => {
                let left_ty = self.infer_expr(*left);
                let right_ty = self.infer_expr(*right);
                if !left_ty.accepts_as(right_ty) {
                    self.error(
                        ErrorCode::E1018,
                        node,
                        None,
                        format!(
                            "comparison `{}` requires operands of the same type, found `{left_ty}` and `{right_ty}`",
                            op.as_symbol()
                        ),
                    );
                }
                Ty::Boolean
            }

            ExprKind::Unary { op, operand } => {
                let operand_ty = self.infer_expr(*operand);
                let expected = match op {
                    UnaryOp::Neg => Ty::Number,
                    UnaryOp::Not => Ty::Boolean,
                };
                if operand_ty == expected {
                    return expected;
                }
                if !operand_ty.is_unknown() {
                    self.error(
                        ErrorCode::E1019,
                        node,
                        Some("operand"),
                        format!(
                            "unary `{}` requires a `{expected}` operand, found `{operand_ty}`",
                            op.as_symbol()
                        ),
                    );
                }
                Ty::Unknown
            }

            ExprKind::Unit { value, .. } => self.infer_expr(*value),

            ExprKind::Call { func, args } => self.check_call(node, *func, *args),
        }
    }
}
