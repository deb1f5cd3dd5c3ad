//! Builder pattern API for a prune run.
//!
//! Provides a fluent interface for configuring and running the pipeline:
//!
//! ```rust,ignore
//! use texprune_core::prelude::*;
//!
//! let report = Pruner::new("/path/to/project")
//!     .fig_folders(["/path/to/project/figs"])
//!     .img_folders(["/path/to/project/img"])
//!     .recursive(true)
//!     .dry_run(true)
//!     .run()?;
//!
//! println!("{}", report.prune.summary());
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::defs::{inline_defs, DefsReport};
use crate::extract::{find_used_images, GraphicsPathMap};
use crate::prune::{prune_images, PruneReport};
use crate::scan::{gather_image_files, gather_tex_files};

/// Builder for configuring a prune run.
#[derive(Debug, Clone)]
pub struct Pruner {
    /// Project root used to compute root-relative paths
    main_folder: PathBuf,

    /// Folders searched for `.tex` sources
    fig_folders: Vec<PathBuf>,

    /// Folders searched for candidate images
    img_folders: Vec<PathBuf>,

    /// Whether folder searches descend into subdirectories
    recursive: bool,

    /// Dry-run mode (log decisions, touch nothing)
    dry_run: bool,

    /// Whether to run the def-inlining pass first
    replace_defs: bool,

    /// Extensions force-removed regardless of usage
    remove_ext: Vec<String>,

    /// Whether short folder-name references must be expanded
    using_graphicspath: bool,
}

impl Pruner {
    /// Create a new run builder rooted at the given main folder.
    pub fn new(main_folder: impl Into<PathBuf>) -> Self {
        Self {
            main_folder: main_folder.into(),
            fig_folders: Vec::new(),
            img_folders: Vec::new(),
            recursive: false,
            dry_run: false,
            replace_defs: false,
            remove_ext: vec!["svg".to_string()],
            using_graphicspath: false,
        }
    }

    /// Set the folders searched for `.tex` files.
    pub fn fig_folders(mut self, folders: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.fig_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Set the folders searched for image files.
    pub fn img_folders(mut self, folders: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.img_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Descend into subdirectories when searching.
    pub fn recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    /// Log decisions without deleting or rewriting anything.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Run the def-inlining pass before pruning.
    pub fn replace_defs(mut self, enabled: bool) -> Self {
        self.replace_defs = enabled;
        self
    }

    /// Replace the forced-removal extension list.
    pub fn remove_ext(mut self, exts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.remove_ext = exts.into_iter().map(Into::into).collect();
        self
    }

    /// Expand short folder-name references via the graphics-path map.
    pub fn using_graphicspath(mut self, enabled: bool) -> Self {
        self.using_graphicspath = enabled;
        self
    }

    /// Run the full pipeline: gather sources, optionally inline defs,
    /// gather candidates, extract usage, prune.
    pub fn run(&self) -> Result<RunReport> {
        let tex_files = gather_tex_files(&self.fig_folders, self.recursive)
            .context("Failed to gather .tex files")?;
        info!(count = tex_files.len(), "gathered tex files");

        let defs = if self.replace_defs {
            Some(inline_defs(&tex_files, self.dry_run).context("Def-inlining pass failed")?)
        } else {
            None
        };

        let img_files = gather_image_files(&self.img_folders, self.recursive)
            .context("Failed to gather image files")?;
        info!(count = img_files.len(), "gathered candidate images");

        let map = GraphicsPathMap::build(&self.main_folder, &self.img_folders);
        let used = find_used_images(&tex_files, &map, self.using_graphicspath)
            .context("Usage extraction failed")?;
        info!(count = used.len(), "usage set built");

        let prune = prune_images(
            &img_files,
            &self.main_folder,
            &used,
            &self.remove_ext,
            self.dry_run,
        )?;

        Ok(RunReport { defs, prune })
    }
}

/// Result of a full run: the optional def-inlining report plus the prune
/// report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Report of the def-inlining pass, when it ran.
    pub defs: Option<DefsReport>,
    /// Report of the prune pass.
    pub prune: PruneReport,
}
