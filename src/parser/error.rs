//! Parse error types.

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message naming the expected
/// token and the token index where parsing stopped, plus the source line
/// for diagnostics. The parser does not attempt error recovery; the first
/// structural violation aborts the parse.
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based source line where the error occurred.
    pub line: usize,
}

impl ParseError {
    /// Creates a new error with a message and source line.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        ParseError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
