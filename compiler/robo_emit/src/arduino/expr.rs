//! Expression lowering.
//!
//! Every operation is wrapped in parentheses.

use robo_ir::{ExprId, ExprKind, ExprRange, LengthUnit, Name, SensorKind};
use robo_stack::ensure_sufficient_stack;

use crate::EmitContext;

/// Emit an expression and return its text.
pub fn emit_expr(ctx: &EmitContext<'_>, id: ExprId) -> String {
    ensure_sufficient_stack(|| emit_expr_inner(ctx, id))
}

fn emit_expr_inner(ctx: &EmitContext<'_>, id: ExprId) -> String {
    match &ctx.program.arena.get_expr(id).kind {
        ExprKind::Number(n) => format_number(*n),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Ident(name) => ctx.mangle(*name),
        ExprKind::Arithmetic { op, left, right } => {
            let l = emit_expr(ctx, *left);
            let r = emit_expr(ctx, *right);
            format!("({l} {} {r})", op.as_symbol())
        }
        ExprKind::Comparison { op, left, right } => {
            let l = emit_expr(ctx, *left);
            let r = emit_expr(ctx, *right);
            format!("({l} {} {r})", op.as_symbol())
        }
        ExprKind::Unary { op, operand } => {
            format!("({}{})", op.as_symbol(), emit_expr(ctx, *operand))
        }
        ExprKind::Unit { value, unit } => emit_length(ctx, *value, *unit),
        ExprKind::Sensor(SensorKind::Distance) => "robot.getDistance()".to_string(),
        ExprKind::Sensor(SensorKind::Timestamp) => "millis()".to_string(),
        ExprKind::Call { func, args } => emit_call(ctx, *func, *args),
    }
}

/// Emit a length converted to millimeters.
pub fn emit_length(ctx: &EmitContext<'_>, value: ExprId, unit: LengthUnit) -> String {
    scale(emit_expr(ctx, value), unit.mm_factor())
}

/// Multiply emitted text by a unit factor, leaving it alone for factor 1.
pub fn scale(text: String, factor: u32) -> String {
    if factor == 1 {
        text
    } else {
        format!("({text} * {factor})")
    }
}

/// Emit `name(arg, ...)`.
pub fn emit_call(ctx: &EmitContext<'_>, func: Name, args: ExprRange) -> String {
    let args: Vec<String> = ctx
        .program
        .arena
        .get_expr_list(args)
        .iter()
        .map(|&arg| emit_expr(ctx, arg))
        .collect();
    format!("{}({})", ctx.mangle(func), args.join(", "))
}

/// Stringify a numeric literal. Integral values print without a fraction.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NAN".to_string()
    } else if n.is_infinite() {
        let text = if n.is_sign_positive() { "INFINITY" } else { "(-INFINITY)" };
        text.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
