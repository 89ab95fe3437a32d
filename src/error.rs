/// Parsing errors.
///
/// Defines all error types that can occur while turning a line of source into
/// a statement tree: unexpected tokens, unexpected keywords and premature end
/// of input. Parsing stops at the first error and yields no partial tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a statement
/// tree. Most anomalies at runtime have a defined fallback instead of an error.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the tokenize, parse and execute pipeline for one line.
#[derive(Error, Debug)]
pub enum Error {
    /// The line did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Executing the parsed line failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
