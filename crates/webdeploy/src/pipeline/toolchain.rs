//! Toolchain discovery.
//!
//! The compiler is either already on PATH or lives inside an emsdk
//! checkout under one of a fixed list of candidate roots. The first
//! matching candidate wins; no further candidates are tried. The
//! resolved path travels in `ToolchainHandle` and is handed to the
//! build stage explicitly; nothing here mutates the process
//! environment.

use crate::config::Config;
use crate::error::PipelineError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Location of the compiler binary inside an emsdk checkout.
const COMPILER_SUBPATH: &str = "upstream/emscripten";

#[derive(Clone, Debug)]
pub struct ToolchainHandle {
    /// Resolved compiler path.
    pub command: PathBuf,
    /// True when the compiler came from a candidate root rather than PATH.
    pub activated: bool,
}

/// Resolve the cross-compiler, or fail with `ToolchainNotFound`.
pub fn resolve(config: &Config) -> Result<ToolchainHandle> {
    if let Ok(path) = which::which(&config.toolchain_cmd) {
        println!("  Found {} on PATH: {}", config.toolchain_cmd, path.display());
        return Ok(ToolchainHandle {
            command: path,
            activated: false,
        });
    }

    for root in candidate_roots(config) {
        let candidate = root.join(COMPILER_SUBPATH).join(&config.toolchain_cmd);
        if candidate.is_file() {
            println!("  Activated toolchain from {}", root.display());
            return Ok(ToolchainHandle {
                command: candidate,
                activated: true,
            });
        }
    }

    Err(PipelineError::ToolchainNotFound(config.toolchain_cmd.clone()).into())
}

/// Ordered candidate installation roots: explicit override first, then
/// the user-level checkout, then a project-local one.
fn candidate_roots(config: &Config) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(root) = &config.toolchain_root {
        roots.push(root.clone());
    }
    if let Some(home) = std::env::var_os("HOME") {
        roots.push(Path::new(&home).join("emsdk"));
    }
    roots.push(config.project_dir.join("emsdk"));
    roots
}
