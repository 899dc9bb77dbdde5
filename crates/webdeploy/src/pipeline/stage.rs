//! Artifact staging.
//!
//! Verifies the expected build outputs and copies them into the publish
//! tree. Every source is checked before any copy happens, so a partial
//! build never leaves a half-populated publish directory. A zero exit
//! from the build driver is not trusted to mean the files exist.

use crate::config::Config;
use crate::error::PipelineError;
use crate::hosting::HostingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Expected build outputs: (source relative to the project dir,
/// destination relative to the publish dir).
pub const EXPECTED_ARTIFACTS: &[(&str, &str)] = &[
    ("build/web/game.wasm", "static/game.wasm"),
    ("build/web/game.js", "static/game.js"),
];

/// Routing/header config consumed by the hosting provider.
const HOSTING_CONFIG_FILE: &str = "vercel.json";

/// Stage the expected artifacts and emit the hosting config.
pub fn run(config: &Config) -> Result<()> {
    stage_artifacts(config, EXPECTED_ARTIFACTS)?;
    write_hosting_config(&config.publish_dir)
}

pub(crate) fn stage_artifacts(config: &Config, artifacts: &[(&str, &str)]) -> Result<()> {
    fs::create_dir_all(config.static_dir()).with_context(|| {
        format!(
            "Failed to create publish tree at {}",
            config.publish_dir.display()
        )
    })?;

    // Verify everything first; copy nothing from a partial build.
    for (src, _) in artifacts {
        if !config.project_dir.join(src).is_file() {
            return Err(PipelineError::MissingArtifact((*src).to_string()).into());
        }
    }

    for (src, dest) in artifacts {
        let src_path = config.project_dir.join(src);
        let dest_path = config.publish_dir.join(dest);
        fs::copy(&src_path, &dest_path).with_context(|| {
            format!(
                "Failed to copy {} -> {}",
                src_path.display(),
                dest_path.display()
            )
        })?;
        println!("  Copied: {src} -> {dest}");
    }

    Ok(())
}

fn write_hosting_config(publish_dir: &Path) -> Result<()> {
    let path = publish_dir.join(HOSTING_CONFIG_FILE);
    let json = serde_json::to_string_pretty(&HostingConfig::for_publish_tree())?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  Wrote {HOSTING_CONFIG_FILE}");
    Ok(())
}
