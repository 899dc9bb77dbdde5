//! Build invocation.
//!
//! Runs the project's build driver against the web target. stdout and
//! stderr are inherited so compiler progress is visible during long
//! builds. A non-zero exit aborts the pipeline before anything is
//! staged.

use crate::config::Config;
use crate::error::PipelineError;
use crate::pipeline::toolchain::ToolchainHandle;
use anyhow::{Context, Result};
use std::process::Command;

/// Driver target that produces the browser artifact set.
const WEB_TARGET: &str = "web";

/// Run the build driver; fails with `BuildFailed` on a non-zero exit.
pub fn run(config: &Config, toolchain: &ToolchainHandle) -> Result<()> {
    println!(
        "  {} {} BUILD={}",
        config.build_driver,
        WEB_TARGET,
        config.mode.as_flag()
    );

    let status = Command::new(&config.build_driver)
        .current_dir(&config.project_dir)
        .arg(WEB_TARGET)
        .arg(format!("BUILD={}", config.mode.as_flag()))
        .env("EMCC", &toolchain.command)
        .status()
        .with_context(|| format!("Failed to run build driver `{}`", config.build_driver))?;

    if !status.success() {
        return Err(PipelineError::BuildFailed(status).into());
    }

    Ok(())
}

#[cfg(test)]
#[cfg(unix)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn write_driver(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-make");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn test_config(project_dir: &Path, driver: &Path) -> Config {
        Config {
            project_dir: project_dir.to_path_buf(),
            publish_dir: project_dir.join("publish"),
            mode: BuildMode::Release,
            toolchain_cmd: "emcc".to_string(),
            toolchain_root: None,
            build_driver: driver.to_string_lossy().into_owned(),
            asset_url: String::new(),
        }
    }

    fn fake_toolchain() -> ToolchainHandle {
        ToolchainHandle {
            command: PathBuf::from("/opt/emsdk/upstream/emscripten/emcc"),
            activated: true,
        }
    }

    #[test]
    fn test_successful_build() {
        let tmp = tempfile::tempdir().unwrap();
        let driver = write_driver(tmp.path(), "exit 0");
        let config = test_config(tmp.path(), &driver);

        run(&config, &fake_toolchain()).unwrap();
    }

    #[test]
    fn test_failing_build_is_build_failed() {
        let tmp = tempfile::tempdir().unwrap();
        let driver = write_driver(tmp.path(), "exit 1");
        let config = test_config(tmp.path(), &driver);

        let err = run(&config, &fake_toolchain()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::BuildFailed(_))
        ));
    }

    #[test]
    fn test_driver_sees_mode_and_toolchain() {
        let tmp = tempfile::tempdir().unwrap();
        // The driver records its arguments and the EMCC it was given.
        let driver = write_driver(tmp.path(), "echo \"$1 $2 $EMCC\" > seen.txt");
        let config = test_config(tmp.path(), &driver);

        run(&config, &fake_toolchain()).unwrap();

        let seen = fs::read_to_string(tmp.path().join("seen.txt")).unwrap();
        assert!(seen.contains("web BUILD=release"));
        assert!(seen.contains("emcc"));
    }
}
