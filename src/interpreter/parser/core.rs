use crate::{
    ast::Block,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A single-pass recursive-descent parser over one line of source.
///
/// The parser pulls tokens from its [`Lexer`] one at a time and holds exactly
/// one lookahead token. The first mismatch aborts the parse.
///
/// # Example
/// ```
/// use ksm::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let block = Parser::new(Lexer::new("declare x = 5 displayln(x)")).parse()
///                                                                  .unwrap();
/// assert_eq!(block.statements.len(), 2);
///
/// assert!(Parser::new(Lexer::new("declare = 5")).parse().is_err());
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and loads the first lookahead token.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses the whole input into the root block.
    ///
    /// Grammar: `program := statement* EndOfInput`
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered. No partial tree is
    /// returned.
    pub fn parse(mut self) -> ParseResult<Block> {
        let mut block = Block::default();

        while !self.current.is_end() {
            block.statements.push(self.parse_statement()?);
        }

        tracing::debug!(statements = block.statements.len(), "parsed line");
        Ok(block)
    }

    /// Returns the lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the lookahead token, returning it, and loads the next one.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }
}
