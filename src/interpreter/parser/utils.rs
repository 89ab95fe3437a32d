use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Consumes the lookahead token if its text is exactly `literal`.
    ///
    /// Structural tokens are matched by text, not by kind, so a string token
    /// whose text is `}` also matches `"}"`.
    ///
    /// # Errors
    /// Returns a `ParseError` naming `literal` as the expected token.
    pub(in crate::interpreter::parser) fn expect_literal(&mut self,
                                                         literal: &str)
                                                         -> ParseResult<Token> {
        if self.current().is(literal) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("'{literal}'")))
        }
    }

    /// Consumes the lookahead token if its kind is one of `kinds`.
    ///
    /// # Errors
    /// Returns a `ParseError` with `expected` as the description of what was
    /// required.
    pub(in crate::interpreter::parser) fn expect_kind(&mut self,
                                                      kinds: &[TokenKind],
                                                      expected: &str)
                                                      -> ParseResult<Token> {
        if kinds.contains(&self.current().kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for a lookahead token that does not match `expected`.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        if token.is_end() {
            ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                               line:     token.line,
                                               column:   token.column, }
        } else {
            ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    describe(token),
                                          line:     token.line,
                                          column:   token.column, }
        }
    }
}

/// Describes a token by kind and text, e.g. `identifier 'x'`.
pub(in crate::interpreter::parser) fn describe(token: &Token) -> String {
    format!("{} '{}'", token.kind, token.text)
}
