//! Sequential, deterministic file discovery over the configured folders.
//!
//! Two enumerations feed the pipeline:
//! - `.tex` sources from the figure folders (usage extraction, def inlining)
//! - candidate image files from the image folders (pruning)
//!
//! The recursive flag bounds traversal depth: off means direct children
//! only, on means the full subtree. A missing folder is a hard error; an
//! empty folder is simply an empty list.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Gathers every `.tex` file under the given figure folders.
pub fn gather_tex_files(fig_folders: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    gather_files(fig_folders, recursive, |path| {
        path.extension().is_some_and(|ext| ext == "tex")
    })
}

/// Gathers every regular file under the given image folders.
///
/// No type filtering happens here; extension-based exclusion is the
/// deletion engine's job.
pub fn gather_image_files(img_folders: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    gather_files(img_folders, recursive, |_| true)
}

/// Walks each folder in turn, collecting files that pass the filter.
///
/// Output is sorted so repeated runs visit candidates in the same order.
fn gather_files(
    folders: &[PathBuf],
    recursive: bool,
    keep: impl Fn(&Path) -> bool,
) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for folder in folders {
        let mut walker = WalkDir::new(folder);
        if !recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to read directory: {}", folder.display()))?;
            let path = entry.path();
            if path.is_file() && keep(path) {
                out.push(path.to_path_buf());
            }
        }

        debug!(folder = %folder.display(), "scanned folder");
    }

    out.sort();
    Ok(out)
}
