use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Result of walking a source tree.
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect every C-family source file under `base_dir`, sorted by path.
///
/// Unreadable entries are counted and skipped rather than aborting the walk;
/// with `verbose` they are reported to stderr.
pub fn scan_files(base_dir: &Path, verbose: bool) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_scannable_file(path) {
            files.push(path.to_path_buf());
        }
    }

    // Deterministic output order regardless of walk order.
    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(
            "c" | "h"
                | "cc"
                | "cpp"
                | "cxx"
                | "hh"
                | "hpp"
                | "java"
                | "js"
                | "jsx"
                | "ts"
                | "tsx"
                | "cs"
                | "go"
                | "rs"
                | "m"
                | "mm"
        )
    )
}
