//! Pipeline error taxonomy.
//!
//! Three conditions are terminal and map to distinct exit codes so CI
//! callers can branch on them. Asset fetch failure is deliberately not
//! represented here: it is absorbed as a warning (see `pipeline::assets`).

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The compiler is not on PATH and no candidate root matched.
    /// Unrecoverable without operator action.
    #[error("cross-compiler not found: `{0}` is not on PATH and no candidate toolchain root matched")]
    ToolchainNotFound(String),

    /// The build driver exited non-zero. Its diagnostics already went to
    /// the terminal verbatim; nothing is staged.
    #[error("build driver failed: {0}")]
    BuildFailed(ExitStatus),

    /// An expected build output is absent. Names the specific file.
    #[error("required build artifact missing: {0}")]
    MissingArtifact(String),
}

impl PipelineError {
    /// Exit code reported to the calling CI system.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolchainNotFound(_) => 2,
            Self::BuildFailed(_) => 3,
            Self::MissingArtifact(_) => 4,
        }
    }
}
