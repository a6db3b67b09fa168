//! Arduino sketch layout.
//!
//! The sketch targets the Omni4WD library. The entry function runs once in
//! `setup()`; `loop()` only idles. Named functions are forward-declared so
//! they may call each other in any order.

pub(crate) mod expr;
mod stmt;
mod types;

use robo_ir::Function;

use stmt::emit_block;
use types::ArduinoTypeMapper;

use crate::{EmitContext, EmitError, EmitResult};

const INCLUDES: &[&str] = &["Arduino.h", "MotorWheel.h", "Omni4WD.h", "PID_Beta6.h"];

/// Default speed in mm/s, matching the simulator.
const DEFAULT_SPEED: u32 = 100;

/// Rotation rate in degrees per second, matching the simulator.
const ANGULAR_RATE_DEG: u32 = 90;

pub fn emit_program(ctx: &mut EmitContext<'_>) -> EmitResult<()> {
    let program = ctx.program;
    let entry = program.entry.as_ref().ok_or(EmitError::MissingEntry)?;
    let named: Vec<&Function> = program.functions.iter().filter(|f| f.name.is_some()).collect();

    for header in INCLUDES {
        ctx.writeln(&format!("#include <{header}>"));
    }
    ctx.blank();
    ctx.writeln("Omni4WD robot;");
    ctx.blank();
    ctx.writeln(&format!("int currentSpeed = {DEFAULT_SPEED};"));
    ctx.writeln(&format!("const int angularRate = {ANGULAR_RATE_DEG};"));
    ctx.blank();

    if !named.is_empty() {
        for function in &named {
            let line = format!("{};", signature(ctx, function));
            ctx.writeln(&line);
        }
        ctx.blank();
    }

    ctx.writeln("void setup() {");
    ctx.indent();
    ctx.writeln("Serial.begin(9600);");
    ctx.writeln("robot.PIDEnable(0.31, 0.01, 0.0, 10);");
    ctx.clear_locals();
    emit_block(ctx, entry.body)?;
    ctx.dedent();
    ctx.writeln("}");
    ctx.blank();

    ctx.writeln("void loop() {");
    ctx.indent();
    ctx.writeln("delay(100);");
    ctx.dedent();
    ctx.writeln("}");

    for function in named {
        ctx.blank();
        emit_function(ctx, function)?;
    }
    Ok(())
}

/// `T name(T1 p1, T2 p2)`
fn signature(ctx: &EmitContext<'_>, function: &Function) -> String {
    let params: Vec<String> = ctx
        .program
        .params(function)
        .iter()
        .map(|p| format!("{} {}", ArduinoTypeMapper::map_var_type(p.ty), ctx.mangle(p.name)))
        .collect();
    let name = function.name.map(|n| ctx.mangle(n)).unwrap_or_default();
    format!(
        "{} {name}({})",
        ArduinoTypeMapper::map_return_type(function.return_type),
        params.join(", ")
    )
}

fn emit_function(ctx: &mut EmitContext<'_>, function: &Function) -> EmitResult<()> {
    let program = ctx.program;
    ctx.clear_locals();
    for param in program.params(function) {
        ctx.declare_local(param.name, param.ty);
    }
    let line = format!("{} {{", signature(ctx, function));
    ctx.writeln(&line);
    ctx.indent();
    emit_block(ctx, function.body)?;
    ctx.dedent();
    ctx.writeln("}");
    Ok(())
}
