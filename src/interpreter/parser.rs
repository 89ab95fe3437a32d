/// Parser state and the program entry point.
///
/// Holds the single lookahead token, advances the lexer on demand and parses
/// a whole line into a root block.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading keyword and parses declarations and print
/// statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited bodies and the compound `if case` and `otherwise`
/// statements that own them.
pub mod block;

/// Condition parsing.
///
/// Parses the three-token comparison following `if case`.
pub mod condition;

/// Utility functions for the parser.
///
/// Provides token matching helpers and uniform error construction.
pub mod utils;
