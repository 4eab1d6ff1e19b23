use std::fmt;

use serde::Serialize;

/// A single comment extracted from a source file.
///
/// The text is the comment body without its delimiters: everything after
/// `//` up to (not including) the newline, or everything between `/*` and
/// `*/`. Multi-line comments report the line the `/*` appeared on, not the
/// line of the closing `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Comment body, delimiters stripped.
    pub text: String,
    /// 1-based line number the comment starts on.
    pub line: usize,
    /// True for `/* */` comments, false for `//` comments.
    pub multiline: bool,
}

impl Comment {
    pub fn single_line(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
            multiline: false,
        }
    }

    pub fn multi_line(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
            multiline: true,
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multiline {
            write!(f, "/*{}*/", self.text)
        } else {
            write!(f, "//{}", self.text)
        }
    }
}
