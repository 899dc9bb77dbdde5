//! CLI entry point.
//!
//! Exit codes (CI systems branch on these):
//! 0 success, including a degraded asset fetch;
//! 2 toolchain not found; 3 build failed; 4 missing artifact;
//! 1 anything else.

use clap::Parser;
use std::path::PathBuf;
use webdeploy::{pipeline, BuildMode, Config, PipelineError};

#[derive(Parser)]
#[command(name = "webdeploy", about = "Web client build-and-deploy pipeline")]
struct Cli {
    /// Build the release configuration instead of debug.
    #[arg(long)]
    release: bool,

    /// Project source tree containing the build entry point.
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Publish directory handed to the hosting provider.
    #[arg(long, default_value = "publish")]
    publish_dir: PathBuf,

    /// Toolchain installation root (overrides $EMSDK).
    #[arg(long)]
    toolchain_root: Option<PathBuf>,

    /// Origin URL for the runtime asset bundle (overrides $WEBDEPLOY_ASSET_URL).
    #[arg(long)]
    asset_url: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let mode = if cli.release {
        BuildMode::Release
    } else {
        BuildMode::Debug
    };

    let mut config = Config::new(cli.project_dir, cli.publish_dir, mode);
    if let Some(root) = cli.toolchain_root {
        config.toolchain_root = Some(root);
    }
    if let Some(url) = cli.asset_url {
        config.asset_url = url;
    }

    if let Err(err) = pipeline::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<PipelineError>()
            .map_or(1, PipelineError::exit_code);
        std::process::exit(code);
    }
}
