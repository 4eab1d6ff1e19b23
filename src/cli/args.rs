//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::comment::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One comment per record, cargo-style `path:line:` prefixes
    Text,
    /// JSON array of per-file results
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source file or directory to extract comments from
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only report multi-line (/* */) comments
    #[arg(long, conflicts_with = "line_only")]
    pub multiline_only: bool,

    /// Only report single-line (//) comments
    #[arg(long)]
    pub line_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Whether a comment passes the `--multiline-only`/`--line-only` filter.
    pub fn wants(&self, comment: &Comment) -> bool {
        if self.multiline_only {
            comment.multiline
        } else if self.line_only {
            !comment.multiline
        } else {
            true
        }
    }
}
