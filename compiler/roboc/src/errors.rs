//! Driver errors.

use std::io;
use std::path::PathBuf;

use robo_emit::EmitError;
use robo_ir::StructureError;

/// A failure of a driver command.
///
/// Variants marked as reported have already been rendered as diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("`{}` is not a program tree: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("`{}` is malformed: {source}", path.display())]
    Structure {
        path: PathBuf,
        source: StructureError,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Validation failed; diagnostics were reported.
    #[error("`{}` has {errors} error(s)", path.display())]
    Invalid { path: PathBuf, errors: usize },

    /// Evaluation failed; the runtime error was reported.
    #[error("running `{}` failed", path.display())]
    Eval { path: PathBuf },

    #[error("internal error while emitting `{}`: {source}", path.display())]
    Emit { path: PathBuf, source: EmitError },

    /// Some files failed `check`; their problems were reported.
    #[error("{failed} of {total} file(s) failed to check")]
    CheckFailed { failed: usize, total: usize },
}

impl CliError {
    /// Whether the failure has already been shown to the user.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            CliError::Invalid { .. } | CliError::Eval { .. } | CliError::CheckFailed { .. }
        )
    }
}
