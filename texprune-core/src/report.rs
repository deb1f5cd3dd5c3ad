//! Output formatting - plaintext and JSON.

use crate::builder::RunReport;

/// Prints the removal summary in plain text format.
///
/// The per-file decision lines have already been streamed while the
/// passes ran; this is the closing summary only.
pub fn print_plain(report: &RunReport) {
    println!("{}", report.prune.summary());
}

/// Prints the full run report in JSON format.
///
/// Falls back to the plain summary if serialization fails (should never
/// happen with these types, but all cases are handled).
pub fn print_json(report: &RunReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{}", report.prune.summary());
        }
    }
}
