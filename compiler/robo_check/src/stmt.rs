//! Statement rules.

use robo_diagnostic::ErrorCode;
use robo_ir::{ExprId, ExprRange, Name, NodeRef, ReturnType, StmtId, StmtKind, StmtRange, VarType};
use robo_stack::ensure_sufficient_stack;

use crate::checker::Validator;
use crate::Ty;

impl Validator<'_> {
    /// Check a block in its own lexical scope.
    pub(crate) fn check_block(&mut self, block: StmtRange) {
        let program = self.program;
        self.with_scope(|this| {
            for &stmt in program.block(block) {
                this.check_stmt(stmt);
            }
        });
    }

    fn check_stmt(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.check_stmt_inner(id));
    }

    fn check_stmt_inner(&mut self, id: StmtId) {
        let program = self.program;
        let node = NodeRef::Stmt(id);

        match &program.arena.get_stmt(id).kind {
            StmtKind::VarDecl { name, ty, init } => self.check_var_decl(id, *name, *ty, *init),

            StmtKind::Assign { target, value } => {
                let value_ty = self.infer_expr(*value);
                let Some(target_ty) = self.scopes.lookup(*target) else {
                    self.error(
                        ErrorCode::E1008,
                        node,
                        Some("target"),
                        format!("undeclared variable `{}`", program.name(*target)),
                    );
                    return;
                };
                if !value_ty.accepts_as(target_ty) {
                    self.error(
                        ErrorCode::E1009,
                        node,
                        Some("value"),
                        format!(
                            "cannot assign `{value_ty}` to variable `{}` of type `{target_ty}`",
                            program.name(*target)
                        ),
                    );
                }
            }

            StmtKind::Loop { cond, body } => {
                self.check_condition(node, *cond, "loop condition");
                self.check_block(*body);
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.check_condition(node, *cond, "condition");
                self.check_block(*then_branch);
                self.check_block(*else_branch);
            }

            StmtKind::Movement {
                direction,
                distance,
                unit,
            } => {
                self.check_quantity(node, *distance, "distance");
                if unit.is_none() {
                    self.error(
                        ErrorCode::E1012,
                        node,
                        Some("unit"),
                        "movement requires a unit".to_string(),
                    );
                }
                if direction.is_none() {
                    self.error(
                        ErrorCode::E1013,
                        node,
                        Some("direction"),
                        "movement requires a direction".to_string(),
                    );
                }
            }

            StmtKind::Rotation { direction, angle } => {
                self.check_quantity(node, *angle, "angle");
                if direction.is_none() {
                    self.error(
                        ErrorCode::E1013,
                        node,
                        Some("direction"),
                        "rotation requires a direction".to_string(),
                    );
                }
            }

            StmtKind::SetSpeed { speed, unit } => {
                self.check_quantity(node, *speed, "speed");
                if unit.is_none() {
                    self.error(
                        ErrorCode::E1012,
                        node,
                        Some("unit"),
                        "speed change requires a unit".to_string(),
                    );
                }
            }

            StmtKind::Call { func, args } => {
                self.check_call(node, *func, *args);
            }

            StmtKind::Return(value) => self.check_return(node, *value),
        }
    }

    fn check_var_decl(
        &mut self,
        id: StmtId,
        name: Name,
        declared: Option<VarType>,
        init: Option<ExprId>,
    ) {
        let program = self.program;
        let node = NodeRef::Stmt(id);
        let text = program.name(name);

        // The initializer cannot see the variable it initializes.
        let init_ty = init.map(|init| self.infer_expr(init));

        if text.chars().next().is_some_and(char::is_uppercase) {
            self.warning(
                ErrorCode::W1001,
                node,
                Some("name"),
                format!("variable `{text}` should start with a lowercase letter"),
            );
        }

        if let (Some(declared), Some(init_ty)) = (declared, init_ty) {
            if !init_ty.accepts_as(Ty::from(declared)) {
                self.error(
                    ErrorCode::E1006,
                    node,
                    Some("init"),
                    format!(
                        "variable `{text}` declared as `{declared}` but initialized with `{init_ty}`"
                    ),
                );
            }
        }

        let ty = match (declared, init_ty) {
            (Some(declared), _) => Ty::from(declared),
            (None, Some(init_ty)) => init_ty,
            (None, None) => Ty::Unknown,
        };
        if !self.scopes.declare(name, ty) {
            self.error(
                ErrorCode::E1007,
                node,
                Some("name"),
                format!("variable `{text}` is already declared in this block"),
            );
        }
    }

    fn check_condition(&mut self, node: NodeRef, cond: ExprId, what: &str) {
        let ty = self.infer_expr(cond);
        if !ty.accepts_as(Ty::Boolean) {
            self.error(
                ErrorCode::E1010,
                node,
                Some("condition"),
                format!("{what} must be `boolean`, found `{ty}`"),
            );
        }
    }

    /// Distance, angle and speed operands must be numbers.
    fn check_quantity(&mut self, node: NodeRef, expr: ExprId, property: &'static str) {
        let ty = self.infer_expr(expr);
        if !ty.accepts_as(Ty::Number) {
            self.error(
                ErrorCode::E1011,
                node,
                Some(property),
                format!("{property} must be a `number`, found `{ty}`"),
            );
        }
    }

    fn check_return(&mut self, node: NodeRef, value: Option<ExprId>) {
        let value_ty = value.map(|value| self.infer_expr(value));
        let label = self.program.function_label(self.current);

        match (self.return_type, value_ty) {
            (ReturnType::Void, Some(_)) => self.error(
                ErrorCode::E1005,
                node,
                Some("value"),
                format!("{label} returns `void` and cannot return a value"),
            ),
            (ReturnType::Void, None) => {}
            (declared, None) => self.error(
                ErrorCode::E1005,
                node,
                Some("value"),
                format!("{label} must return a `{declared}` value"),
            ),
            (declared, Some(found)) => {
                if !found.accepts_as(Ty::from(declared)) {
                    self.error(
                        ErrorCode::E1005,
                        node,
                        Some("value"),
                        format!("{label} returns `{declared}`, found `{found}`"),
                    );
                }
            }
        }
    }

    /// Check a call (statement or expression) and return its result type.
    pub(crate) fn check_call(&mut self, node: NodeRef, func: Name, args: ExprRange) -> Ty {
        let program = self.program;
        let arg_ids = program.arena.get_expr_list(args);
        let arg_tys: Vec<Ty> = arg_ids.iter().map(|&arg| self.infer_expr(arg)).collect();
        let func_name = program.name(func);

        let Some(callee) = program.find_function(func) else {
            self.error(
                ErrorCode::E1014,
                node,
                Some("func"),
                format!("unknown function `{func_name}`"),
            );
            return Ty::Unknown;
        };
        let result = Ty::from(callee.return_type);

        let params = program.params(callee);
        if params.len() != arg_tys.len() {
            self.error(
                ErrorCode::E1015,
                node,
                Some("args"),
                format!(
                    "function `{func_name}` expects {} argument{}, found {}",
                    params.len(),
                    if params.len() == 1 { "" } else { "s" },
                    arg_tys.len()
                ),
            );
            return result;
        }

        let checked = params.iter().zip(&arg_tys).zip(arg_ids);
        for (index, ((param, arg_ty), &arg)) in checked.enumerate() {
            let expected = Ty::from(param.ty);
            if !arg_ty.accepts_as(expected) {
                self.error(
                    ErrorCode::E1016,
                    NodeRef::Expr(arg),
                    None,
                    format!(
                        "argument {} to `{func_name}` should be `{expected}`, found `{arg_ty}`",
                        index + 1
                    ),
                );
            }
        }
        result
    }
}
