//! Glue patching.
//!
//! The generated glue loads its resources by bare filename; under the
//! hosting provider's routing scheme they live under `/static/`. The
//! rewrites are best effort: a rule that matches nothing is fine (the
//! generator may already emit the desired URL), and a failed rewrite is
//! a runtime concern for the deployed client, not a build failure.

use crate::config::Config;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Ordered textual rewrite rules applied to the staged glue file. The
/// quoted patterns cannot re-match their own replacements, so patching
/// is idempotent.
pub const REWRITE_RULES: &[(&str, &str)] = &[
    ("\"game.wasm\"", "\"/static/game.wasm\""),
    ("\"game.data\"", "\"/static/game.data\""),
];

/// Patch the staged glue file in place. Never fails the pipeline.
pub fn patch(config: &Config) -> Result<()> {
    patch_file(&config.glue_path(), REWRITE_RULES);
    Ok(())
}

pub(crate) fn patch_file(path: &Path, rules: &[(&str, &str)]) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!(
                "  Warning: could not read glue file {}: {err}",
                path.display()
            );
            return;
        }
    };

    let mut patched = contents.clone();
    for (pattern, replacement) in rules {
        patched = patched.replace(pattern, replacement);
    }

    if patched == contents {
        println!("  Glue already matches the deployment layout");
        return;
    }

    match fs::write(path, &patched) {
        Ok(()) => println!("  Patched: {}", path.display()),
        Err(err) => eprintln!(
            "  Warning: could not write patched glue {}: {err}",
            path.display()
        ),
    }
}
