//! # ksm
//!
//! ksm is an interpreter for a small line-oriented scripting language with
//! variable declarations, printing and integer comparisons.
//!
//! Every line goes through the same pipeline: a [`Lexer`] produces tokens on
//! demand, a recursive-descent parser turns them into a [`Block`] of
//! statements, and a [`Context`] executes the block, emitting one output
//! event per executed statement. The variable store lives in the context and
//! persists from line to line.
//!
//! ```
//! use ksm::{interpreter::evaluator::core::Context, run_line};
//!
//! let mut ctx = Context::with_output(Vec::new());
//! run_line(&mut ctx, "declare greeting = \"hello\"").unwrap();
//! run_line(&mut ctx, "displayln(greeting)").unwrap();
//!
//! assert_eq!(ctx.output()[1].to_string(), "Print Statement: hello");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Block,
    interpreter::{
        evaluator::{core::Context, event::Output},
        lexer::Lexer,
        parser::core::{ParseResult, Parser},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that represent
/// the syntactic structure of a line as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines typed statement, block and condition nodes.
/// - Carries operand tokens with their source positions.
/// - Renders nodes back to canonical source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// executing a line. Each error carries the source position and a message
/// describing what went wrong.
///
/// # Responsibilities
/// - Defines error enums for each failing phase (parser, evaluator).
/// - Wraps both in a single [`error::Error`] for callers running whole lines.
pub mod error;
/// Orchestrates the tokenize, parse and execute pipeline.
///
/// This module ties together the lexer, parser and evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages.
/// - Exposes each stage for callers that drive them separately.
pub mod interpreter;

/// Creates a lexer over one line of source.
///
/// A lexer cannot be reset; call this once per line.
#[must_use]
pub fn tokenize(line: &str) -> Lexer<'_> {
    Lexer::new(line)
}

/// Parses all tokens produced by `lexer` into the root block.
///
/// # Errors
/// Returns the first syntax error encountered; no partial tree is returned.
pub fn parse(lexer: Lexer<'_>) -> ParseResult<Block> {
    Parser::new(lexer).parse()
}

/// Tokenizes, parses and executes one line of source in `context`.
///
/// A syntax error prevents the whole line from running. A runtime error stops
/// the line at the failing statement. In both cases the variable store is
/// kept, so later lines are unaffected.
///
/// # Errors
/// Returns [`error::Error::Parse`] or [`error::Error::Runtime`].
///
/// # Examples
/// ```
/// use ksm::{error::Error, interpreter::evaluator::core::Context, run_line};
///
/// let mut ctx = Context::with_output(Vec::new());
/// assert!(run_line(&mut ctx, "declare x = 5").is_ok());
///
/// // `declare` needs an identifier before `=`.
/// assert!(matches!(run_line(&mut ctx, "declare 5 = x"), Err(Error::Parse(_))));
/// assert_eq!(ctx.variable("x"), Some("5"));
/// ```
pub fn run_line<O: Output>(context: &mut Context<O>, line: &str) -> Result<(), error::Error> {
    let block = parse(tokenize(line))?;
    context.execute(&block)?;
    Ok(())
}
