use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
///
/// Undeclared variables, non-integer comparisons and unknown operators are
/// not errors; they fall back to identity substitution or `false`.
pub enum RuntimeError {
    /// A statement whose contents cannot be executed, such as a declaration
    /// whose name is not an identifier.
    #[error("Error on line {line}: Invalid variable declaration: {details}.")]
    MalformedStatement {
        /// Details about what is malformed.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
