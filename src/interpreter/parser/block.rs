use crate::{
    ast::{Block, Statement},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses statements until the lookahead is `}` or the end of input.
    ///
    /// The terminator itself is not consumed.
    ///
    /// Grammar: `block := statement*`
    fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        while !self.current().is_end() && !self.current().is("}") {
            statements.push(self.parse_statement()?);
        }

        Ok(Block { statements })
    }

    /// Parses a brace-delimited body: `"{" block "}"`.
    fn parse_body(&mut self) -> ParseResult<Block> {
        self.expect_literal("{")?;
        let body = self.parse_block()?;
        self.expect_literal("}")?;
        Ok(body)
    }

    /// Parses a conditional statement.
    ///
    /// Grammar: `if "case" condition "{" statement* "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if `case` is missing, the condition is
    /// malformed, or the body is not properly braced.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.advance().line;

        self.expect_literal("case")?;
        let condition = self.parse_condition()?;
        let body = self.parse_body()?;

        Ok(Statement::If { condition,
                           body,
                           line })
    }

    /// Parses an unconditional block.
    ///
    /// Grammar: `otherwise "{" statement* "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if the body is not properly braced.
    pub(in crate::interpreter::parser) fn parse_otherwise(&mut self) -> ParseResult<Statement> {
        let line = self.advance().line;

        let body = self.parse_body()?;

        Ok(Statement::Otherwise { body, line })
    }
}
