use std::fmt;

//===========================================================================//

/// A location within a source file.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SrcLoc {
    /// The 1-based line number.
    pub line: u32,
    /// The 0-based byte offset within the line.
    pub column: usize,
}

impl fmt::Display for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

//===========================================================================//

/// A specialized `Result` type for parsing operations.
pub type ParseResult<V> = Result<V, Vec<ParseError>>;

//===========================================================================//

/// An error encountered while parsing a source file.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{location}: {message}")]
pub struct ParseError {
    /// The location in the file where the error occurred.
    pub location: SrcLoc,
    /// The error message to report to the user.
    pub message: String,
}

impl ParseError {
    /// Constructs a parse error with the given location and message.
    pub fn new(location: SrcLoc, message: String) -> ParseError {
        ParseError { location, message }
    }
}

//===========================================================================//


//===========================================================================//
