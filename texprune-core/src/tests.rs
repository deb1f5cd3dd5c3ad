//! End-to-end test suite for texprune-core.

use crate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_file(file: &Path, content: &str) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

fn setup_temp_project() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("texprune_tests")
        .join(format!("{}_{}", timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

// Core Test 1: referenced images survive, unreferenced images go
#[test]
fn test_end_to_end_prune() {
    let proj = setup_temp_project();
    write_file(
        &proj.join("figs/main.tex"),
        "\\begin{figure}\n\\includegraphics[scale=1]{img/a.png}\n\\end{figure}\n",
    );
    write_file(&proj.join("img/a.png"), "a");
    write_file(&proj.join("img/b.png"), "b");

    let report = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .run()
        .unwrap();

    assert!(proj.join("img/a.png").exists(), "referenced image kept");
    assert!(!proj.join("img/b.png").exists(), "unreferenced image removed");
    assert_eq!(report.prune.summary(), "Removed 1/2 images");

    fs::remove_dir_all(&proj).ok();
}

// Core Test 2: dry-run makes the same decisions but touches nothing
#[test]
fn test_dry_run_is_decision_identical_and_side_effect_free() {
    let proj = setup_temp_project();
    let tex = "\\def\\x{hello}\nSay \\x now.\n\\includegraphics[scale=1]{img/a.png}\n";
    write_file(&proj.join("figs/main.tex"), tex);
    write_file(&proj.join("img/a.png"), "a");
    write_file(&proj.join("img/b.png"), "b");

    let dry = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .replace_defs(true)
        .dry_run(true)
        .run()
        .unwrap();

    // Nothing on disk changed.
    assert!(proj.join("img/a.png").exists());
    assert!(proj.join("img/b.png").exists());
    assert_eq!(fs::read_to_string(proj.join("figs/main.tex")).unwrap(), tex);

    // The decisions match those of a real run.
    let real = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .replace_defs(true)
        .run()
        .unwrap();

    assert_eq!(dry.prune.removed, real.prune.removed);
    assert_eq!(dry.prune.kept, real.prune.kept);
    assert_eq!(
        dry.defs.as_ref().unwrap().lines_changed,
        real.defs.as_ref().unwrap().lines_changed
    );
    assert!(!proj.join("img/b.png").exists());

    fs::remove_dir_all(&proj).ok();
}

// Core Test 3: forced-removal extensions beat usage
#[test]
fn test_forced_extension_removed_even_when_referenced() {
    let proj = setup_temp_project();
    write_file(
        &proj.join("figs/main.tex"),
        "\\includegraphics[width=1cm]{img/plot.svg}\n",
    );
    write_file(&proj.join("img/plot.svg"), "svg");

    let report = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .run()
        .unwrap();

    assert!(!proj.join("img/plot.svg").exists());
    assert_eq!(report.prune.summary(), "Removed 1/1 images");

    fs::remove_dir_all(&proj).ok();
}

// Core Test 4: graphics-path rewriting protects short references
#[test]
fn test_graphicspath_end_to_end() {
    let proj = setup_temp_project();
    write_file(
        &proj.join("figs/main.tex"),
        "\\includegraphics[width=1cm]{plots/a}\n",
    );
    write_file(&proj.join("figs/plots/a.png"), "a");
    write_file(&proj.join("figs/plots/b.png"), "b");
    write_file(&proj.join("figs/tables/t1.png"), "t");

    let report = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("figs/plots"), proj.join("figs/tables")])
        .using_graphicspath(true)
        .run()
        .unwrap();

    assert!(proj.join("figs/plots/a.png").exists());
    assert!(!proj.join("figs/plots/b.png").exists());
    assert!(!proj.join("figs/tables/t1.png").exists());
    assert_eq!(report.prune.summary(), "Removed 2/3 images");

    fs::remove_dir_all(&proj).ok();
}

// Core Test 5: def inlining rewrites use sites, leaves def lines alone
#[test]
fn test_def_inlining_end_to_end() {
    let proj = setup_temp_project();
    let tex_path = proj.join("figs/doc.tex");
    write_file(&tex_path, "\\def\\x{hello}\nSay \\x now.\n");

    let tex_files = gather_tex_files(&[proj.join("figs")], false).unwrap();
    inline_defs(&tex_files, false).unwrap();

    let content = fs::read_to_string(&tex_path).unwrap();
    assert!(content.contains("\\def\\x{hello}"));
    assert!(content.contains("Say hello now."));

    fs::remove_dir_all(&proj).ok();
}

// Core Test 6: the recursive flag controls traversal depth
#[test]
fn test_recursive_flag() {
    let proj = setup_temp_project();
    write_file(
        &proj.join("figs/main.tex"),
        "\\includegraphics[scale=1]{img/sub/deep.png}\n",
    );
    write_file(&proj.join("img/top.png"), "t");
    write_file(&proj.join("img/sub/deep.png"), "d");

    // Non-recursive: the nested candidate is never enumerated, so it
    // survives even though only it is referenced.
    Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .run()
        .unwrap();
    assert!(!proj.join("img/top.png").exists());
    assert!(proj.join("img/sub/deep.png").exists());

    // Recursive: the nested candidate is found and kept by usage.
    write_file(&proj.join("img/top.png"), "t");
    let report = Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .recursive(true)
        .run()
        .unwrap();
    assert!(proj.join("img/sub/deep.png").exists());
    assert_eq!(report.prune.kept.len(), 1);

    fs::remove_dir_all(&proj).ok();
}

// Extended Test 1: references without extensions protect any-extension
// candidates with the same stem
#[test]
fn test_extensionless_reference_protects_candidate() {
    let proj = setup_temp_project();
    write_file(
        &proj.join("figs/main.tex"),
        "\\includegraphics[scale=1]{img/a}\n",
    );
    write_file(&proj.join("img/a.pdf"), "pdf");

    Pruner::new(&proj)
        .fig_folders([proj.join("figs")])
        .img_folders([proj.join("img")])
        .run()
        .unwrap();

    assert!(proj.join("img/a.pdf").exists());

    fs::remove_dir_all(&proj).ok();
}

// Extended Test 2: empty folder lists scan nothing and prune nothing
#[test]
fn test_empty_folder_lists_are_accepted() {
    let proj = setup_temp_project();

    let report = Pruner::new(&proj).run().unwrap();
    assert_eq!(report.prune.total_candidates, 0);
    assert_eq!(report.prune.summary(), "Removed 0/0 images");

    fs::remove_dir_all(&proj).ok();
}
