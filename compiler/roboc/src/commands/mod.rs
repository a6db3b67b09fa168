//! Driver commands.
//!
//! Every command loads one or more JSON program trees, validates them, and
//! renders diagnostics through the emitter it is given.

mod build;
mod check;
mod run;

pub use build::build_file;
pub use check::{check_files, CheckSummary};
pub use run::{run_file, RunOptions, RunSummary};

use std::path::Path;

use robo_diagnostic::emitter::DiagnosticEmitter;
use robo_diagnostic::{count, Diagnostic, ErrorCode};
use robo_ir::{NodeRef, Program, Span, StructureError};

use crate::CliError;

/// Read a JSON program tree and check its structure.
pub fn load_program(path: &Path) -> Result<Program, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let program: Program = serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    program
        .check_structure()
        .map_err(|source| CliError::Structure {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        functions = program.functions.len(),
        "loaded program tree"
    );
    Ok(program)
}

/// Diagnostic for a tree that failed the structure check.
pub fn structure_diagnostic(error: &StructureError) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("malformed program tree: {error}"))
        .at(NodeRef::Program, Span::DUMMY)
}

/// Validate a loaded program, rendering its diagnostics.
///
/// Fails with [`CliError::Invalid`] if any diagnostic is an error.
fn validate_and_report(
    path: &Path,
    program: &Program,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<(), CliError> {
    let diagnostics = robo_check::validate(program);
    report(path, &diagnostics, emitter);
    let (errors, _) = count(&diagnostics);
    if errors > 0 {
        return Err(CliError::Invalid {
            path: path.to_path_buf(),
            errors,
        });
    }
    Ok(())
}

/// Render one file's diagnostics followed by a summary line.
fn report(path: &Path, diagnostics: &[Diagnostic], emitter: &mut dyn DiagnosticEmitter) {
    if diagnostics.is_empty() {
        return;
    }
    emitter.set_origin(&path.display().to_string());
    emitter.emit_all(diagnostics);
    let (errors, warnings) = count(diagnostics);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
}
