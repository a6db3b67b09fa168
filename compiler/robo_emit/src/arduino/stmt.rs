//! Statement lowering.

use robo_ir::{MoveDirection, RotateDirection, StmtId, StmtKind, StmtRange, VarType};
use robo_stack::ensure_sufficient_stack;

use super::expr::{emit_call, emit_expr, emit_length, scale};
use super::types::ArduinoTypeMapper;
use crate::{EmitContext, EmitError, EmitResult};

/// Emit every statement of a block at the current indentation.
pub fn emit_block(ctx: &mut EmitContext<'_>, block: StmtRange) -> EmitResult<()> {
    let program = ctx.program;
    for &stmt in program.block(block) {
        emit_stmt(ctx, stmt)?;
    }
    Ok(())
}

/// Emit a block one level deeper.
fn emit_nested(ctx: &mut EmitContext<'_>, block: StmtRange) -> EmitResult<()> {
    ctx.indent();
    let result = emit_block(ctx, block);
    ctx.dedent();
    result
}

pub fn emit_stmt(ctx: &mut EmitContext<'_>, id: StmtId) -> EmitResult<()> {
    ensure_sufficient_stack(|| emit_stmt_inner(ctx, id))
}

fn emit_stmt_inner(ctx: &mut EmitContext<'_>, id: StmtId) -> EmitResult<()> {
    let program = ctx.program;
    match &program.arena.get_stmt(id).kind {
        StmtKind::VarDecl { name, ty, init } => {
            let ty = match (ty, init) {
                (Some(ty), _) => *ty,
                (None, Some(init)) => ArduinoTypeMapper::infer(ctx, *init),
                (None, None) => VarType::Number,
            };
            let value = match init {
                Some(init) => emit_expr(ctx, *init),
                None => ArduinoTypeMapper::default_value(ty).to_string(),
            };
            ctx.declare_local(*name, ty);
            let line = format!(
                "{} {} = {value};",
                ArduinoTypeMapper::map_var_type(ty),
                ctx.mangle(*name)
            );
            ctx.writeln(&line);
        }
        StmtKind::Assign { target, value } => {
            let line = format!("{} = {};", ctx.mangle(*target), emit_expr(ctx, *value));
            ctx.writeln(&line);
        }
        StmtKind::Loop { cond, body } => {
            let line = format!("while ({}) {{", emit_expr(ctx, *cond));
            ctx.writeln(&line);
            emit_nested(ctx, *body)?;
            ctx.writeln("}");
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let line = format!("if ({}) {{", emit_expr(ctx, *cond));
            ctx.writeln(&line);
            emit_nested(ctx, *then_branch)?;
            if !else_branch.is_empty() {
                ctx.writeln("} else {");
                emit_nested(ctx, *else_branch)?;
            }
            ctx.writeln("}");
        }
        StmtKind::Movement {
            direction,
            distance,
            unit,
        } => {
            let direction = direction.ok_or(EmitError::MissingDirection { stmt: id })?;
            let unit = unit.ok_or(EmitError::MissingUnit { stmt: id })?;
            let command = match direction {
                MoveDirection::Forward => "setCarAdvance",
                MoveDirection::Backward => "setCarBackoff",
                MoveDirection::Left => "setCarLeft",
                MoveDirection::Right => "setCarRight",
            };
            let distance = emit_length(ctx, *distance, unit);
            emit_timed_command(ctx, command, &distance, "currentSpeed");
        }
        StmtKind::Rotation { direction, angle } => {
            let direction = direction.ok_or(EmitError::MissingDirection { stmt: id })?;
            let command = match direction {
                RotateDirection::Clock => "setCarRotateRight",
                RotateDirection::CounterClock => "setCarRotateLeft",
            };
            let angle = emit_expr(ctx, *angle);
            emit_timed_command(ctx, command, &angle, "angularRate");
        }
        StmtKind::SetSpeed { speed, unit } => {
            let unit = unit.ok_or(EmitError::MissingUnit { stmt: id })?;
            let speed = scale(emit_expr(ctx, *speed), unit.mm_per_sec_factor());
            // State only; the next movement drives at this speed.
            ctx.writeln(&format!("currentSpeed = {speed};"));
        }
        StmtKind::Call { func, args } => {
            let line = format!("{};", emit_call(ctx, *func, *args));
            ctx.writeln(&line);
        }
        StmtKind::Return(value) => {
            let line = match value {
                Some(value) => format!("return {};", emit_expr(ctx, *value)),
                None => "return;".to_string(),
            };
            ctx.writeln(&line);
        }
    }
    tracing::trace!(?id, "lowered statement");
    Ok(())
}

/// Start a motion, wait `magnitude / rate` seconds, then stop.
fn emit_timed_command(ctx: &mut EmitContext<'_>, command: &str, magnitude: &str, rate: &str) {
    ctx.writeln(&format!("robot.{command}(currentSpeed);"));
    ctx.writeln(&format!("robot.delayMS((({magnitude} * 1000) / {rate}));"));
    ctx.writeln("robot.setCarStop();");
}
