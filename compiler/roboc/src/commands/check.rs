//! The `check` command: validate program trees without running them.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use robo_diagnostic::emitter::DiagnosticEmitter;
use robo_diagnostic::{count, Diagnostic};

use super::{load_program, report, structure_diagnostic};
use crate::CliError;

/// Outcome of checking a set of files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Result of checking one file.
enum FileOutcome {
    Checked(Vec<Diagnostic>),
    Unreadable(CliError),
}

fn check_one(path: &Path) -> FileOutcome {
    match load_program(path) {
        Ok(program) => FileOutcome::Checked(robo_check::validate(&program)),
        Err(CliError::Structure { source, .. }) => {
            FileOutcome::Checked(vec![structure_diagnostic(&source)])
        }
        Err(err) => FileOutcome::Unreadable(err),
    }
}

/// Validate every file, reporting all problems.
///
/// Files are validated in parallel and reported in the order given. Fails
/// with [`CliError::CheckFailed`] if any file has an error or cannot be
/// read.
pub fn check_files(
    paths: &[PathBuf],
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<CheckSummary, CliError> {
    let outcomes: Vec<FileOutcome> = paths.par_iter().map(|path| check_one(path)).collect();

    let mut summary = CheckSummary {
        files: paths.len(),
        ..CheckSummary::default()
    };
    for (path, outcome) in paths.iter().zip(outcomes) {
        match outcome {
            FileOutcome::Checked(diagnostics) => {
                let (errors, warnings) = count(&diagnostics);
                summary.errors += errors;
                summary.warnings += warnings;
                if errors > 0 {
                    summary.failed += 1;
                }
                report(path, &diagnostics, emitter);
                tracing::debug!(path = %path.display(), errors, warnings, "checked");
            }
            FileOutcome::Unreadable(err) => {
                summary.failed += 1;
                eprintln!("error: {err}");
            }
        }
    }

    if summary.failed > 0 {
        return Err(CliError::CheckFailed {
            failed: summary.failed,
            total: summary.files,
        });
    }
    Ok(summary)
}
