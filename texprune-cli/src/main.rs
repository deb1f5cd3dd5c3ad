//! texprune CLI - prune unreferenced image assets from LaTeX projects.
//!
//! Scans the figure folders for `\includegraphics` references, then
//! deletes every image in the image folders that nothing references.
//! Optionally inlines single-line `\def` macros first so path-building
//! macros do not hide references.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use texprune_core::{
    init_structured_logging, load_config, print_json, print_plain, Pruner, TexpruneConfig,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prune image files not referenced by \\includegraphics in LaTeX sources"
)]
pub struct Cli {
    /// The top folder of the project
    #[arg(long = "main_folder")]
    main_folder: PathBuf,

    /// Folders searched for .tex files
    #[arg(long = "fig_folders", num_args = 1..)]
    fig_folders: Vec<PathBuf>,

    /// Folders where the images are stored
    #[arg(long = "img_folders", num_args = 1..)]
    img_folders: Vec<PathBuf>,

    /// Do not edit or remove anything, only print the intended actions
    #[arg(long = "dry_run")]
    dry_run: bool,

    /// Search fig_folders and img_folders recursively
    #[arg(long)]
    recursive: bool,

    /// Replace \def\name{value} macros in the tex files with their values
    #[arg(long = "replace_defs")]
    replace_defs: bool,

    /// Remove files with these extensions regardless of whether they are used
    /// [default: svg]
    #[arg(long = "remove_ext", num_args = 1..)]
    remove_ext: Option<Vec<String>>,

    /// Assume \graphicspath is in use, so references may omit the folder
    /// prefix of any img_folder
    #[arg(long = "using_graphicspath")]
    using_graphicspath: bool,

    /// Output the final report in JSON format
    #[arg(long)]
    json: bool,
}

/// Resolves the effective forced-removal extensions and output format
/// from CLI values and the optional texprune.toml. CLI flags win.
fn merge_config(
    remove_ext: Option<Vec<String>>,
    json: bool,
    config: Option<TexpruneConfig>,
) -> (Vec<String>, bool) {
    let mut remove_ext = remove_ext;
    let mut json = json;

    if let Some(cfg) = config {
        if remove_ext.is_none() {
            remove_ext = cfg.remove_ext;
        }
        if let Some(output) = cfg.output {
            if output.format.as_deref() == Some("json") {
                json = true;
            }
        }
    }

    (
        remove_ext.unwrap_or_else(|| vec!["svg".to_string()]),
        json,
    )
}

fn main() -> Result<()> {
    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // Load texprune.toml if present (safe - don't fail on config errors)
    let config = match load_config(&cli.main_folder) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[WARN] config load failed: {}", e);
            None
        }
    };
    let (remove_ext, json) = merge_config(cli.remove_ext, cli.json, config);

    let report = Pruner::new(&cli.main_folder)
        .fig_folders(cli.fig_folders)
        .img_folders(cli.img_folders)
        .recursive(cli.recursive)
        .dry_run(cli.dry_run)
        .replace_defs(cli.replace_defs)
        .remove_ext(remove_ext)
        .using_graphicspath(cli.using_graphicspath)
        .run()?;

    if json {
        print_json(&report);
    } else {
        print_plain(&report);
    }

    Ok(())
}
