//! Usage extraction: which images do the LaTeX sources actually reference.
//!
//! Sources are read line by line and matched against the
//! `\includegraphics[...]{path}` pattern. At most one reference per line is
//! considered, and a reference split across lines is not detected.
//!
//! When a document relies on `\graphicspath` it may reference an image by
//! the basename of its folder alone (`plots/a` instead of `figs/plots/a`).
//! [`GraphicsPathMap`] reconstructs the full root-relative path in that
//! case so the usage set and the candidate list speak the same language.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Pre-compiled `\includegraphics[...]{path}` pattern.
///
/// The option block is matched greedily, the path capture non-greedily,
/// so `\includegraphics[width=1cm]{plots/a}` captures `plots/a`.
fn includegraphics_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\\includegraphics\[.*\]\{(.+?)\}").expect("Hardcoded regex pattern is valid")
    })
}

/// Ordered short-name to long-name folder rewrites.
///
/// One entry per image folder, in image-folder list order: the folder's
/// basename maps to its path relative to the main folder. Every entry is
/// attempted independently during a rewrite, so later entries see the
/// output of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct GraphicsPathMap {
    entries: Vec<(String, String)>,
}

impl GraphicsPathMap {
    /// Builds the rewrite map from the configured image folders.
    pub fn build(main_folder: &Path, img_folders: &[PathBuf]) -> Self {
        let mut entries = Vec::with_capacity(img_folders.len());

        for folder in img_folders {
            let long = folder
                .strip_prefix(main_folder)
                .unwrap_or(folder)
                .to_string_lossy()
                .to_string();
            let Some(short) = folder.file_name().map(|n| n.to_string_lossy().to_string())
            else {
                continue;
            };
            entries.push((short, long));
        }

        Self { entries }
    }

    /// Rewrites a reference that starts with a known short folder name
    /// into its root-relative long form.
    pub fn rewrite(&self, path: &str) -> String {
        let mut out = path.to_string();
        for (short, long) in &self.entries {
            if let Some(rest) = out.strip_prefix(short.as_str()) {
                out = format!("{}{}", long, rest);
            }
        }
        out
    }

    /// Number of configured rewrites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no rewrites are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes a reference to the extension-stripped form used as the
/// usage-set key.
///
/// References written with an explicit extension (`img/a.png`) must
/// protect the same file as references without one (`img/a`), and the
/// deletion engine compares extension-stripped candidate paths, so both
/// sides split on the first `.`.
fn usage_key(path: &str) -> &str {
    match path.split_once('.') {
        Some((stem, _)) => stem,
        None => path,
    }
}

/// Scans the LaTeX sources and returns the usage set.
///
/// Only key presence matters; the set holds every (possibly rewritten,
/// extension-stripped) image reference found across all files.
pub fn find_used_images(
    tex_files: &[PathBuf],
    map: &GraphicsPathMap,
    using_graphicspath: bool,
) -> Result<HashSet<String>> {
    let re = includegraphics_regex();
    let mut used = HashSet::new();

    for tex_file in tex_files {
        let content = fs::read_to_string(tex_file)
            .with_context(|| format!("Failed to read: {}", tex_file.display()))?;

        for line in content.lines() {
            let Some(caps) = re.captures(line) else {
                continue;
            };
            let mut img_path = caps[1].to_string();
            if using_graphicspath {
                img_path = map.rewrite(&img_path);
            }
            used.insert(usage_key(&img_path).to_string());
        }

        debug!(file = %tex_file.display(), "extracted references");
    }

    Ok(used)
}
