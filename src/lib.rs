//! Cmt - comment extraction for C-family source files
//!
//! Cmt is a CLI tool and library for pulling every comment out of a source
//! file. It handles both single-line (`//`) and multi-line (`/* */`) comments,
//! ignores comment-looking text inside string literals, and reports the line
//! each comment starts on.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `comment`: The extracted comment record type
//! - `error`: Typed extraction errors
//! - `extract`: File-level entry point (read a file, run the scanner)
//! - `file_scanner`: Source-tree walking for directory mode
//! - `scanner`: The character-level state machine

pub mod cli;
pub mod comment;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod scanner;

pub use comment::Comment;
pub use error::ExtractError;
pub use extract::extract_comments;
