//! Publish tree report.
//!
//! Operator-facing summary of what gets handed to the hosting provider.
//! Purely informational: staging already enforced artifact presence, so
//! nothing here can fail the pipeline.

use std::path::{Path, PathBuf};

/// Print every file in the publish tree with its size.
pub fn run(publish_dir: &Path) {
    let entries = collect(publish_dir);
    if entries.is_empty() {
        println!("  (publish directory is empty)");
        return;
    }

    for (path, size) in &entries {
        let rel = path.strip_prefix(publish_dir).unwrap_or(path);
        println!("  {:>10}  {}", format_size(*size), rel.display());
    }

    let total: u64 = entries.iter().map(|(_, size)| size).sum();
    println!("  Total: {} files, {}", entries.len(), format_size(total));
}

/// Collect (path, size) for every file under `dir`, sorted by path.
/// Unreadable entries are skipped rather than reported as errors.
pub(crate) fn collect(dir: &Path) -> Vec<(PathBuf, u64)> {
    let mut out = Vec::new();
    walk(dir, &mut out);
    out.sort();
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, u64)>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if let Ok(meta) = entry.metadata() {
            out.push((path, meta.len()));
        }
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{bytes} B")
    }
}
