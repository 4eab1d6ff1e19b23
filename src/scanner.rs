//! Character-level comment scanner.
//!
//! A deterministic state machine that walks the decoded source text one
//! character at a time. String literals suppress comment recognition, so
//! `"// not a comment"` produces nothing, and the line counter advances on
//! every newline no matter which state consumes it.

use crate::comment::Comment;
use crate::error::ExtractError;

/// Scanner state, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    /// Plain code, waiting for a `/` or an opening `"`.
    #[default]
    Normal,
    /// Saw a `/`; the next character decides whether a comment starts.
    SawSlash,
    /// Inside a `//` comment, consuming until end of line.
    LineComment,
    /// Inside a `/* */` comment, consuming until a `*` shows up.
    BlockComment,
    /// Saw a `*` inside a block comment; a `/` now closes it.
    BlockCommentStar,
    /// Inside a double-quoted string literal.
    StringLiteral,
    /// Inside a string literal, the previous character was a backslash.
    StringEscape,
}

/// One scan's working state: position, buffer, and the comments found so far.
///
/// Callers that already hold the whole source should use [`scan`]; the
/// push-style [`step`](Scanner::step)/[`finish`](Scanner::finish) API exists
/// for feeding characters as they arrive.
#[derive(Debug)]
pub struct Scanner {
    state: ScanState,
    comments: Vec<Comment>,
    buffer: String,
    /// 1-based, incremented after every consumed newline regardless of state.
    line: usize,
    /// Line the current block comment opened on.
    block_start_line: usize,
}

/// Extract all comments from `source`, in document order.
///
/// Returns [`ExtractError::UnterminatedComment`] if the input ends inside a
/// `/* */` comment. A trailing `//` comment with no final newline is still
/// emitted. Unbalanced string literals are not an error.
pub fn scan(source: &str) -> Result<Vec<Comment>, ExtractError> {
    let mut scanner = Scanner::new();
    for ch in source.chars() {
        scanner.step(ch);
    }
    scanner.finish()
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Normal,
            comments: Vec::new(),
            buffer: String::new(),
            line: 1,
            block_start_line: 1,
        }
    }

    /// Consume one character, possibly emitting a completed comment.
    pub fn step(&mut self, ch: char) {
        match self.state {
            ScanState::Normal => match ch {
                '/' => self.state = ScanState::SawSlash,
                '"' => self.state = ScanState::StringLiteral,
                _ => {}
            },
            ScanState::SawSlash => match ch {
                '/' => self.state = ScanState::LineComment,
                '*' => {
                    self.block_start_line = self.line;
                    self.state = ScanState::BlockComment;
                }
                // Stray slash: drop it and resume. The character after it is
                // consumed here too, so `/"` does not open a string.
                _ => self.state = ScanState::Normal,
            },
            ScanState::LineComment => {
                if ch == '\n' {
                    self.emit(false, self.line);
                } else {
                    self.buffer.push(ch);
                }
            }
            ScanState::BlockComment => {
                if ch == '*' {
                    self.state = ScanState::BlockCommentStar;
                } else {
                    self.buffer.push(ch);
                }
            }
            ScanState::BlockCommentStar => match ch {
                '/' => self.emit(true, self.block_start_line),
                // A run of `*` stays here; each absorbed one is a literal
                // asterisk except the one that ends up closing the comment.
                '*' => self.buffer.push('*'),
                _ => {
                    self.buffer.push('*');
                    self.buffer.push(ch);
                    self.state = ScanState::BlockComment;
                }
            },
            ScanState::StringLiteral => match ch {
                '"' => self.state = ScanState::Normal,
                '\\' => self.state = ScanState::StringEscape,
                _ => {}
            },
            ScanState::StringEscape => self.state = ScanState::StringLiteral,
        }

        // Line accounting is state-independent.
        if ch == '\n' {
            self.line += 1;
        }
    }

    /// Finish the scan at end of input, returning the collected comments.
    pub fn finish(mut self) -> Result<Vec<Comment>, ExtractError> {
        match self.state {
            ScanState::BlockComment | ScanState::BlockCommentStar => {
                Err(ExtractError::UnterminatedComment {
                    start_line: self.block_start_line,
                })
            }
            ScanState::LineComment => {
                self.emit(false, self.line);
                Ok(self.comments)
            }
            // A pending lone `/` (SawSlash) is silently dropped, and an
            // unterminated string is not a fault.
            _ => Ok(self.comments),
        }
    }

    fn emit(&mut self, multiline: bool, line: usize) {
        let text = std::mem::take(&mut self.buffer);
        self.comments.push(Comment {
            text,
            line,
            multiline,
        });
        self.state = ScanState::Normal;
    }
}
