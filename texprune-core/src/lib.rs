//! texprune-core: prune unreferenced image assets from LaTeX projects.
//!
//! This library scans a set of LaTeX document trees for
//! `\includegraphics` references, builds the set of images actually in
//! use, and deletes the candidates that are not in it. An auxiliary pass
//! inlines simple single-line `\def\name{value}` macros into their use
//! sites so path-building macros do not hide references.
//!
//! The whole pipeline is a single sequential sweep: enumerate, extract,
//! decide, delete. No state survives between runs.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use texprune_core::prelude::*;
//!
//! let report = Pruner::new("/path/to/project")
//!     .fig_folders(["/path/to/project/figs"])
//!     .img_folders(["/path/to/project/img"])
//!     .dry_run(true)
//!     .run()?;
//!
//! println!("{}", report.prune.summary());
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: file discovery over the configured folders
//! - [`extract`]: `\includegraphics` usage extraction and graphics-path rewriting
//! - [`defs`]: `\def` macro inlining
//! - [`prune`]: keep/remove decisions and deletion
//! - [`builder`]: fluent API wiring the passes together
//! - [`config`]: texprune.toml loading
//! - [`report`]: plain and JSON output
//! - [`logging`]: structured audit logging
//! - [`error`]: typed error handling

pub mod builder;
pub mod config;
pub mod defs;
pub mod error;
pub mod extract;
pub mod logging;
pub mod prelude;
pub mod prune;
pub mod report;
pub mod scan;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, TexpruneError, TexpruneResult};

// Builder API
pub use builder::{Pruner, RunReport};

// Configuration
pub use config::{load_config, OutputConfig, TexpruneConfig};

// Def inlining
pub use defs::{inline_defs, DefsReport};

// Usage extraction
pub use extract::{find_used_images, GraphicsPathMap};

// Logging
pub use logging::init_structured_logging;

// Pruning
pub use prune::{prune_images, remove_file, PruneReport};

// Reporting
pub use report::{print_json, print_plain};

// File scanning
pub use scan::{gather_image_files, gather_tex_files};

#[cfg(test)]
mod tests;
