//! Report formatting and printing utilities.
//!
//! Separate from the extraction logic so cmt can be used as a library
//! without printing side effects.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::{Arguments, OutputFormat};
use super::run::{FileReport, RunResult};
use crate::comment::Comment;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print extraction results to stdout in the requested format.
pub fn print(result: &RunResult, args: &Arguments) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => print_text(result, args, &mut stdout)?,
        OutputFormat::Json => print_json(result, args, &mut stdout)?,
    }
    Ok(())
}

/// Print a one-line summary to stderr.
pub fn print_summary(result: &RunResult, verbose: bool) {
    if !verbose {
        return;
    }

    let failed = result.failed_count();
    if failed > 0 {
        eprintln!(
            "{} {} of {} files failed",
            FAILURE_MARK.red(),
            failed,
            result.reports.len()
        );
    } else {
        eprintln!(
            "{} {} comments in {} files",
            SUCCESS_MARK.green(),
            result.comment_count(),
            result.reports.len()
        );
    }
    if result.skipped_count > 0 {
        eprintln!("  {} paths skipped", result.skipped_count);
    }
}

/// Text mode: one record per comment with a `path:line:` prefix, errors in
/// cargo style. Multi-line comment bodies keep their embedded newlines.
fn print_text<W: Write>(result: &RunResult, args: &Arguments, writer: &mut W) -> io::Result<()> {
    for report in &result.reports {
        match &report.result {
            Ok(comments) => {
                for comment in comments.iter().filter(|c| args.wants(c)) {
                    writeln!(
                        writer,
                        "{} {}",
                        format!("{}:{}:", report.path.display(), comment.line).blue(),
                        comment
                    )?;
                }
            }
            Err(err) => {
                writeln!(writer, "{}: {}", "error".bold().red(), err)?;
                writeln!(writer, "  {} {}", "-->".blue(), report.path.display())?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<Vec<&'a Comment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> JsonFile<'a> {
    fn from_report(report: &'a FileReport, args: &Arguments) -> Self {
        let path = report.path.display().to_string();
        match &report.result {
            Ok(comments) => Self {
                path,
                comments: Some(comments.iter().filter(|c| args.wants(c)).collect()),
                error: None,
            },
            Err(err) => Self {
                path,
                comments: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn print_json<W: Write>(result: &RunResult, args: &Arguments, writer: &mut W) -> Result<()> {
    let files: Vec<JsonFile> = result
        .reports
        .iter()
        .map(|r| JsonFile::from_report(r, args))
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &files)?;
    writeln!(writer)?;
    Ok(())
}
