//! The `build` command: validate, then emit an Arduino sketch.

use std::path::Path;

use robo_diagnostic::emitter::DiagnosticEmitter;
use robo_emit::EmittedProgram;

use super::{load_program, validate_and_report};
use crate::CliError;

/// Validate and emit one file, writing the sketch to `output` if given.
///
/// Returns the sketch so the caller can print it when there is no output
/// path.
pub fn build_file(
    path: &Path,
    output: Option<&Path>,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<EmittedProgram, CliError> {
    let program = load_program(path)?;
    validate_and_report(path, &program, emitter)?;

    let sketch = robo_emit::emit(&program).map_err(|source| CliError::Emit {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(out) = output {
        std::fs::write(out, sketch.text()).map_err(|source| CliError::Write {
            path: out.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %out.display(), lines = sketch.lines().len(), "sketch written");
    }
    Ok(sketch)
}
