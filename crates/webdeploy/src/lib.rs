//! # webdeploy
//!
//! Build-and-deploy pipeline for the web client.
//!
//! Drives the Emscripten toolchain to produce the browser artifact set,
//! stages it into a publish directory, patches the generated glue for
//! the hosting provider's routing scheme, ensures the optional runtime
//! asset bundle, and reports the staged tree.
//!
//! ## Usage
//!
//! ```bash
//! webdeploy                  # debug build, stage into ./publish
//! webdeploy --release        # release build
//! webdeploy --publish-dir out
//! ```
//!
//! ## Pipeline
//!
//! Strictly sequential, each stage gating the next:
//!
//! 1. Resolve the cross-compiler (PATH, then candidate emsdk roots)
//! 2. Run the project's build driver against the web target
//! 3. Verify and stage the expected artifacts
//! 4. Patch resource URLs in the generated glue
//! 5. Ensure the runtime asset bundle (idempotent, non-fatal)
//! 6. Report the publish tree

pub mod config;
pub mod error;
pub mod hosting;
pub mod pipeline;

pub use config::{BuildMode, Config};
pub use error::PipelineError;
