use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while extracting comments from a file.
///
/// Both variants are terminal: an error aborts the scan and no partial
/// comment list is returned. Unterminated *string literals* are not errors;
/// the scanner simply reaches end of input still inside the string state and
/// returns whatever comments it found.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// End of input was reached inside a `/* */` comment.
    #[error("unterminated multi-line comment starting on line {start_line}")]
    UnterminatedComment { start_line: usize },
}

impl ExtractError {
    pub fn is_unterminated_comment(&self) -> bool {
        matches!(self, ExtractError::UnterminatedComment { .. })
    }
}
