//! Auxiliary asset acquisition.
//!
//! The runtime asset bundle is optional: when it is already staged no
//! network call happens, and when every transport fails the pipeline
//! keeps going with a warning. This is the one place the pipeline
//! tolerates partial failure. Everything before it fails fast, because
//! those failures are environment or build misconfiguration that a
//! retry cannot fix, while a missing bundle only degrades the deployed
//! client at runtime.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Clone, Debug)]
pub struct AssetDescriptor {
    /// Remote origin URL.
    pub url: String,
    /// Local destination inside the publish tree.
    pub dest: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; no network attempt was made.
    AlreadyPresent,
    /// One of the transports retrieved the asset.
    Fetched,
    /// Every transport failed; the pipeline continues without the asset.
    Degraded,
}

/// One way of retrieving a URL to a local path.
pub trait Transport {
    fn name(&self) -> &str;
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Primary transport.
pub struct Curl;

/// Secondary transport, tried when curl fails or is absent.
pub struct Wget;

impl Transport for Curl {
    fn name(&self) -> &str {
        "curl"
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_str = dest
            .to_str()
            .context("Destination path contains invalid UTF-8")?;
        let status = Command::new("curl")
            .args(["-L", "-f", "-s", "-S", "-o", dest_str, url])
            .status()
            .context("Failed to run curl")?;
        if !status.success() {
            bail!("curl exited with {status}");
        }
        Ok(())
    }
}

impl Transport for Wget {
    fn name(&self) -> &str {
        "wget"
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_str = dest
            .to_str()
            .context("Destination path contains invalid UTF-8")?;
        let status = Command::new("wget")
            .args(["-q", "-O", dest_str, url])
            .status()
            .context("Failed to run wget")?;
        if !status.success() {
            bail!("wget exited with {status}");
        }
        Ok(())
    }
}

/// Ensure the asset exists at its destination, fetching it if absent.
pub fn ensure(asset: &AssetDescriptor) -> Result<FetchOutcome> {
    ensure_with(asset, &[&Curl, &Wget])
}

/// `ensure` with an explicit transport list, in priority order.
pub fn ensure_with(asset: &AssetDescriptor, transports: &[&dyn Transport]) -> Result<FetchOutcome> {
    if asset.dest.exists() {
        println!("  Asset already present: {}", asset.dest.display());
        return Ok(FetchOutcome::AlreadyPresent);
    }

    if let Some(parent) = asset.dest.parent() {
        fs::create_dir_all(parent)?;
    }

    for transport in transports {
        println!("  Fetching {} via {}...", asset.url, transport.name());
        match transport.fetch(&asset.url, &asset.dest) {
            Ok(()) => {
                println!("  Fetched: {}", asset.dest.display());
                return Ok(FetchOutcome::Fetched);
            }
            Err(err) => {
                eprintln!("  Warning: {} failed: {err:#}", transport.name());
                // Drop any partial download before the next attempt.
                if asset.dest.exists() {
                    let _ = fs::remove_file(&asset.dest);
                }
            }
        }
    }

    eprintln!(
        "  Warning: could not fetch {}; continuing without the optional asset",
        asset.url
    );
    Ok(FetchOutcome::Degraded)
}
