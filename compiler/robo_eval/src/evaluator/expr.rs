//! Expression evaluation.

use robo_ir::{ArithmeticOp, ComparisonOp, ExprId, ExprKind, Name, NodeRef, SensorKind, UnaryOp};
use robo_stack::ensure_sufficient_stack;

use super::Evaluator;
use crate::errors::{type_mismatch, EvalError, EvalErrorKind, EvalResult};
use crate::Value;

impl Evaluator<'_> {
    /// Evaluate an expression. Calls inside it run exactly once.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult<Value> {
        let program = self.program;
        let node = NodeRef::Expr(id);
        let value = match &program.arena.get_expr(id).kind {
            ExprKind::Number(n) => Value::Number(*n),
            ExprKind::Bool(b) => Value::Boolean(*b),
            ExprKind::Ident(name) => match self.env.lookup(*name) {
                Some(value) => value,
                None => return Err(self.undefined_variable(*name, node)),
            },
            ExprKind::Arithmetic { op, left, right } => {
                let left = self.eval_number(*left)?;
                let right = self.eval_number(*right)?;
                Value::Number(arithmetic(*op, left, right))
            }
            ExprKind::Comparison { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                match compare(*op, left, right) {
                    Ok(result) => Value::Boolean(result),
                    Err(kind) => return Err(self.fail(kind, node)),
                }
            }
            ExprKind::Unary { op, operand } => match op {
                UnaryOp::Neg => Value::Number(-self.eval_number(*operand)?),
                UnaryOp::Not => Value::Boolean(!self.eval_condition(*operand)?),
            },
            ExprKind::Unit { value, unit } => {
                Value::Number(unit.to_mm(self.eval_number(*value)?))
            }
            ExprKind::Sensor(SensorKind::Distance) => Value::Number(self.scene.distance_ahead()),
            ExprKind::Sensor(SensorKind::Timestamp) => Value::Number(self.scene.time),
            ExprKind::Call { func, args } => self.call_function(*func, *args, node)?,
        };
        Ok(value)
    }

    /// Evaluate an expression that must produce a number.
    pub(crate) fn eval_number(&mut self, id: ExprId) -> EvalResult<f64> {
        let value = self.eval_expr(id)?;
        value.as_number().ok_or_else(|| {
            self.fail(
                type_mismatch("number", value.type_name()),
                NodeRef::Expr(id),
            )
        })
    }

    /// Evaluate an expression that must produce a boolean.
    pub(crate) fn eval_condition(&mut self, id: ExprId) -> EvalResult<bool> {
        let value = self.eval_expr(id)?;
        value.as_bool().ok_or_else(|| {
            self.fail(
                type_mismatch("boolean", value.type_name()),
                NodeRef::Expr(id),
            )
        })
    }

    pub(crate) fn undefined_variable(&self, name: Name, node: NodeRef) -> EvalError {
        let name = self.program.name(name).to_string();
        self.fail(EvalErrorKind::UndefinedVariable { name }, node)
    }
}

/// IEEE-754 arithmetic; `%` is the floating remainder.
fn arithmetic(op: ArithmeticOp, left: f64, right: f64) -> f64 {
    match op {
        ArithmeticOp::Add => left + right,
        ArithmeticOp::Sub => left - right,
        ArithmeticOp::Mul => left * right,
        ArithmeticOp::Div => left / right,
        ArithmeticOp::Mod => left % right,
    }
}

/// Compare two values of the same type. Booleans order `false < true`.
fn compare(op: ComparisonOp, left: Value, right: Value) -> Result<bool, EvalErrorKind> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(ordered(op, l, r)),
        (Value::Boolean(l), Value::Boolean(r)) => Ok(ordered(op, l, r)),
        (left, right) => Err(type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Script equality on numbers is exact IEEE-754 equality.
fn ordered<T: PartialOrd>(op: ComparisonOp, l: T, r: T) -> bool {
    match op {
        ComparisonOp::Lt => l < r,
        ComparisonOp::LtEq => l <= r,
        ComparisonOp::Gt => l > r,
        ComparisonOp::GtEq => l >= r,
        ComparisonOp::Eq => l == r,
        ComparisonOp::NotEq => l != r,
    }
}
