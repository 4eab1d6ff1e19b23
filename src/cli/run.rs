use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

use super::args::Arguments;
use crate::comment::Comment;
use crate::error::ExtractError;
use crate::extract::extract_comments;
use crate::file_scanner;

/// Outcome of extracting one file.
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Vec<Comment>, ExtractError>,
}

/// Outcome of one CLI invocation.
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub skipped_count: usize,
}

impl RunResult {
    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_err()).count()
    }

    pub fn comment_count(&self) -> usize {
        self.reports
            .iter()
            .filter_map(|r| r.result.as_ref().ok())
            .map(Vec::len)
            .sum()
    }
}

/// Extract comments from the path the CLI was given.
///
/// A directory is walked and its source files extracted in parallel; each
/// file carries its own scan state, so per-file failures (unterminated
/// comments, unreadable files) are reported individually instead of aborting
/// the run. A single file that cannot be read is a hard error.
pub fn run(args: &Arguments) -> Result<RunResult> {
    if args.path.is_dir() {
        let scan = file_scanner::scan_files(&args.path, args.verbose);
        let reports: Vec<FileReport> = scan
            .files
            .par_iter()
            .map(|path| FileReport {
                path: path.clone(),
                result: extract_comments(path),
            })
            .collect();

        return Ok(RunResult {
            reports,
            skipped_count: scan.skipped_count,
        });
    }

    match extract_comments(&args.path) {
        Err(err @ ExtractError::File { .. }) => Err(err.into()),
        result => Ok(RunResult {
            reports: vec![FileReport {
                path: args.path.clone(),
                result,
            }],
            skipped_count: 0,
        }),
    }
}
