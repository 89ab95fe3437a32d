use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    #[error("Error on line {line}, column {column}: expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The text of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while the grammar required more tokens.
    #[error("Error on line {line}, column {column}: expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A keyword that cannot start a statement, such as `case`.
    #[error("Error on line {line}, column {column}: unexpected keyword '{keyword}'.")]
    UnexpectedKeyword {
        /// The keyword found.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A statement was expected but the token is not a keyword.
    #[error("Error on line {line}, column {column}: expected a statement, found {found}.")]
    ExpectedStatement {
        /// Description of the token found.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::UnexpectedKeyword { line, .. }
            | Self::ExpectedStatement { line, .. } => *line,
        }
    }
}
