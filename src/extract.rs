use std::{fs, path::Path};

use crate::comment::Comment;
use crate::error::ExtractError;
use crate::scanner;

/// Extract all comments from the source file at `path`, in file order.
///
/// The file is decoded as UTF-8 and handed to the scanner. I/O failures map
/// to [`ExtractError::File`]; an unterminated `/* */` comment maps to
/// [`ExtractError::UnterminatedComment`].
///
/// # Example
/// ```ignore
/// let comments = cmt::extract_comments("src/main.c")?;
/// for c in &comments {
///     println!("{}: {}", c.line, c.text);
/// }
/// ```
pub fn extract_comments(path: impl AsRef<Path>) -> Result<Vec<Comment>, ExtractError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ExtractError::File {
        path: path.to_path_buf(),
        source,
    })?;
    scanner::scan(&source)
}
