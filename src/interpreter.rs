/// The evaluator module executes statement trees.
///
/// The evaluator walks the tree depth-first, maintains the flat variable
/// store, evaluates conditions and emits one output event per executed
/// statement.
///
/// # Responsibilities
/// - Executes declarations, prints, conditionals and unconditional blocks.
/// - Resolves operand text against the variable store.
/// - Reports the few runtime errors the language has.
pub mod evaluator;
/// The lexer module tokenizes one line of source.
///
/// The lexer reads the raw source text and produces tokens one at a time on
/// demand, each classified as keyword, operator, identifier, number, string,
/// end of input or error, with the line and column of its first character.
///
/// # Responsibilities
/// - Skips whitespace and tracks source positions.
/// - Recognizes keywords, operators, identifiers, numbers and strings.
/// - Turns unrecognized characters into error tokens instead of failing.
pub mod lexer;
/// The parser module builds the statement tree from tokens.
///
/// The parser is a single-pass recursive-descent consumer with one lookahead
/// token. It produces a root block for the whole line or fails at the first
/// mismatch.
///
/// # Responsibilities
/// - Converts tokens into typed statement nodes.
/// - Validates the grammar, reporting expected and actual tokens with their
///   position.
pub mod parser;
