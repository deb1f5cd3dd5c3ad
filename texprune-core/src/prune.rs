//! Deletion engine: decide keep/remove for every candidate image.
//!
//! A candidate is judged by its main-folder-relative path with the
//! extension stripped at the FIRST `.` — `fig.v2.png` therefore splits
//! into `fig` + `v2.png`, and a path with no `.` at all is a hard error.
//! Decision order:
//!
//! 1. extension in the forced-removal list: remove, regardless of usage
//! 2. extension-stripped path absent from the usage set: remove
//! 3. otherwise: keep
//!
//! Every decision is printed. Dry-run skips the actual deletion but still
//! logs and counts it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{IoResultExt, TexpruneError, TexpruneResult};

/// Result of a prune pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneReport {
    /// Paths removed (or that would be removed under dry-run).
    pub removed: Vec<String>,
    /// Paths left in place.
    pub kept: Vec<String>,
    /// Number of candidate files examined.
    pub total_candidates: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl PruneReport {
    /// The one-line removal summary.
    pub fn summary(&self) -> String {
        format!("Removed {}/{} images", self.removed.len(), self.total_candidates)
    }
}

/// Strips the main-folder prefix (and one following separator) to obtain
/// the root-relative candidate path.
fn root_relative(main_folder: &Path, img_path: &Path) -> String {
    img_path
        .strip_prefix(main_folder)
        .unwrap_or(img_path)
        .to_string_lossy()
        .to_string()
}

/// Splits a root-relative path into (stem, extension) on the first `.`.
fn split_stem_ext(rel: &str) -> TexpruneResult<(&str, &str)> {
    rel.split_once('.')
        .ok_or_else(|| TexpruneError::malformed_path(rel))
}

/// Safely remove a file.
///
/// Refuses symlinks and non-regular files with a warning instead of
/// following them; a file that vanished between enumeration and removal
/// is not an error.
pub fn remove_file(path: &Path) -> TexpruneResult<bool> {
    let metadata = match path.symlink_metadata() {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(TexpruneError::io(path, e)),
    };

    if metadata.file_type().is_symlink() {
        warn!(path = %path.display(), "refusing to delete symlink");
        return Ok(false);
    }

    if !metadata.is_file() {
        warn!(path = %path.display(), "not a regular file");
        return Ok(false);
    }

    fs::remove_file(path).with_path(path)?;
    Ok(true)
}

/// Judges every candidate image against the usage set and removes the
/// losers.
pub fn prune_images(
    img_files: &[PathBuf],
    main_folder: &Path,
    used: &HashSet<String>,
    remove_ext: &[String],
    dry_run: bool,
) -> TexpruneResult<PruneReport> {
    let mut report = PruneReport {
        removed: Vec::new(),
        kept: Vec::new(),
        total_candidates: img_files.len(),
        dry_run,
    };

    for img_path in img_files {
        let rel = root_relative(main_folder, img_path);
        let (stem, ext) = split_stem_ext(&rel)?;

        let forced = remove_ext.iter().any(|e| e == ext);
        if forced || !used.contains(stem) {
            println!("Remove: {}", img_path.display());
            if !dry_run {
                remove_file(img_path)?;
            }
            report.removed.push(img_path.display().to_string());
        } else {
            println!("Keep {}", img_path.display());
            report.kept.push(img_path.display().to_string());
        }
    }

    info!(
        removed = report.removed.len(),
        total = report.total_candidates,
        dry_run,
        "prune pass finished"
    );
    Ok(report)
}
