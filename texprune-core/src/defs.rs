//! Inline single-line `\def\name{value}` macros into their use sites.
//!
//! Each file is processed independently, top to bottom. A definition line
//! is recorded and never rewritten; every other line has all
//! currently-known macro names replaced by their values via plain literal
//! substring replacement. The replacement is not word-boundary aware, so a
//! macro name that prefixes a longer identifier is over-replaced — that is
//! the contract, not an accident to guard against.
//!
//! Definitions only apply to later lines in the same file; the table is
//! rebuilt from scratch for every file.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Pre-compiled `\def\name{value}` pattern (single line, non-greedy).
fn def_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\\def\\(.+?)\{(.+?)\}").expect("Hardcoded regex pattern is valid")
    })
}

/// Result of a def-inlining pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefsReport {
    /// Number of `.tex` files scanned.
    pub files_scanned: usize,
    /// Files where at least one line changed.
    pub files_rewritten: Vec<String>,
    /// Total number of lines that changed across all files.
    pub lines_changed: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Macro table for one file: `\name` to replacement text, insertion order
/// preserved. A redefinition updates the value in place.
#[derive(Debug, Default)]
struct MacroTable {
    entries: Vec<(String, String)>,
}

impl MacroTable {
    fn record(&mut self, name: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for (name, value) in &self.entries {
            out = out.replace(name, value);
        }
        out
    }
}

/// Runs the def-inlining pass over the given files.
///
/// Changed lines are logged as `- old` / `+ new` pairs. Unless dry-run,
/// each changed file is rewritten in place.
pub fn inline_defs(tex_files: &[PathBuf], dry_run: bool) -> Result<DefsReport> {
    let mut report = DefsReport {
        dry_run,
        ..DefsReport::default()
    };

    for tex_file in tex_files {
        if dry_run {
            println!("File {}", tex_file.display());
        }

        let changed = inline_defs_in_file(tex_file, dry_run, &mut report.lines_changed)?;
        report.files_scanned += 1;
        if changed {
            report.files_rewritten.push(tex_file.display().to_string());
        }
    }

    Ok(report)
}

/// Processes one file; returns whether any line changed.
fn inline_defs_in_file(
    tex_file: &Path,
    dry_run: bool,
    lines_changed: &mut usize,
) -> Result<bool> {
    let re = def_regex();
    let content = fs::read_to_string(tex_file)
        .with_context(|| format!("Failed to read: {}", tex_file.display()))?;

    let mut table = MacroTable::default();
    let mut new_lines: Vec<String> = Vec::new();
    let mut changed = false;

    for line in content.lines() {
        if let Some(caps) = re.captures(line) {
            // Definition lines are recorded verbatim, never rewritten.
            let name = format!("\\{}", &caps[1]);
            let value = caps[2].to_string();
            table.record(name, value);
            new_lines.push(line.to_string());
            continue;
        }

        let new_line = table.apply(line);
        if new_line != line {
            println!("\t- {}", line);
            println!("\t+ {}\n", new_line);
            *lines_changed += 1;
            changed = true;
        }
        new_lines.push(new_line);
    }

    if changed && !dry_run {
        let mut new_content = new_lines.join("\n");
        if content.ends_with('\n') {
            new_content.push('\n');
        }
        fs::write(tex_file, &new_content)
            .with_context(|| format!("Failed to write: {}", tex_file.display()))?;
        println!("Updated file {}", tex_file.display());
    }

    debug!(file = %tex_file.display(), changed, "def pass");
    Ok(changed)
}
