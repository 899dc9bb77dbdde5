//! Pipeline configuration.
//!
//! Resolved once in `main` from CLI flags and environment overrides,
//! then passed down explicitly. No stage mutates the process
//! environment; the resolved compiler travels in `ToolchainHandle`.

use std::path::PathBuf;

/// Compiler command probed on PATH.
pub const DEFAULT_TOOLCHAIN_CMD: &str = "emcc";

/// Build driver invoked in the project directory.
pub const DEFAULT_BUILD_DRIVER: &str = "make";

/// Remote origin for the optional runtime asset bundle. No auth.
pub const DEFAULT_ASSET_URL: &str = "https://assets.gamecdn.io/web/game.data";

/// Environment override for the toolchain installation root.
pub const ENV_TOOLCHAIN_ROOT: &str = "EMSDK";

/// Environment override for the asset origin URL.
pub const ENV_ASSET_URL: &str = "WEBDEPLOY_ASSET_URL";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Value passed to the build driver as `BUILD=<flag>`.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Source tree containing the build entry point.
    pub project_dir: PathBuf,
    /// Staged output tree handed to the hosting provider.
    pub publish_dir: PathBuf,
    pub mode: BuildMode,
    /// Compiler command name (resolved against PATH first).
    pub toolchain_cmd: String,
    /// Explicit toolchain root, tried before the built-in candidates.
    pub toolchain_root: Option<PathBuf>,
    /// Build driver command.
    pub build_driver: String,
    /// Origin URL for the runtime asset bundle.
    pub asset_url: String,
}

impl Config {
    /// Defaults plus environment overrides (`EMSDK`, `WEBDEPLOY_ASSET_URL`).
    pub fn new(project_dir: PathBuf, publish_dir: PathBuf, mode: BuildMode) -> Self {
        Self {
            project_dir,
            publish_dir,
            mode,
            toolchain_cmd: DEFAULT_TOOLCHAIN_CMD.to_string(),
            toolchain_root: std::env::var_os(ENV_TOOLCHAIN_ROOT).map(PathBuf::from),
            build_driver: DEFAULT_BUILD_DRIVER.to_string(),
            asset_url: std::env::var(ENV_ASSET_URL)
                .unwrap_or_else(|_| DEFAULT_ASSET_URL.to_string()),
        }
    }

    /// Nested static-assets subdirectory of the publish tree.
    pub fn static_dir(&self) -> PathBuf {
        self.publish_dir.join("static")
    }

    /// Staged glue file inside the publish tree.
    pub fn glue_path(&self) -> PathBuf {
        self.static_dir().join("game.js")
    }

    /// Destination of the runtime asset bundle.
    pub fn asset_dest(&self) -> PathBuf {
        self.static_dir().join("game.data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mode_flags() {
        assert_eq!(BuildMode::Debug.as_flag(), "debug");
        assert_eq!(BuildMode::Release.as_flag(), "release");
    }

    #[test]
    fn test_publish_tree_paths() {
        let config = Config::new(
            PathBuf::from("/proj"),
            PathBuf::from("/proj/publish"),
            BuildMode::Debug,
        );
        assert_eq!(config.static_dir(), PathBuf::from("/proj/publish/static"));
        assert_eq!(config.glue_path(), PathBuf::from("/proj/publish/static/game.js"));
        assert_eq!(config.asset_dest(), PathBuf::from("/proj/publish/static/game.data"));
    }
}
