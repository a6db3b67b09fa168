//! RoboScript to Arduino type mapping.

use robo_ir::{ExprId, ExprKind, ReturnType, UnaryOp, VarType};

use crate::EmitContext;

/// Maps script types to C++ types.
pub struct ArduinoTypeMapper;

impl ArduinoTypeMapper {
    pub const fn map_var_type(ty: VarType) -> &'static str {
        match ty {
            VarType::Number => "int",
            VarType::Boolean => "bool",
        }
    }

    pub const fn map_return_type(ty: ReturnType) -> &'static str {
        match ty {
            ReturnType::Number => "int",
            ReturnType::Boolean => "bool",
            ReturnType::Void => "void",
        }
    }

    /// Default initializer for a declaration without one.
    pub const fn default_value(ty: VarType) -> &'static str {
        match ty {
            VarType::Number => "0",
            VarType::Boolean => "false",
        }
    }

    /// Type of an untyped declaration, from its initializer.
    ///
    /// Anything not visibly boolean is a number.
    pub fn infer(ctx: &EmitContext<'_>, id: ExprId) -> VarType {
        match &ctx.program.arena.get_expr(id).kind {
            ExprKind::Bool(_)
            | ExprKind::Comparison { .. }
            | ExprKind::Unary {
                op: UnaryOp::Not, ..
            } => VarType::Boolean,
            ExprKind::Ident(name) => ctx.local_type(*name).unwrap_or(VarType::Number),
            ExprKind::Call { func, .. } => ctx
                .program
                .find_function(*func)
                .and_then(|f| f.return_type.value_type())
                .unwrap_or(VarType::Number),
            _ => VarType::Number,
        }
    }
}
