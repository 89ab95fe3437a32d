use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::describe,
        },
    },
};

/// Token kinds accepted as the single operand of a declaration or print.
const OPERAND_KINDS: &[TokenKind] = &[TokenKind::Number, TokenKind::Identifier, TokenKind::String];

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement always starts with a keyword, which selects one of:
    /// - a variable declaration (`declare`),
    /// - a print statement (`displayln`),
    /// - a conditional (`if`),
    /// - an unconditional block (`otherwise`).
    ///
    /// # Errors
    /// Returns a `ParseError` if the lookahead is not a keyword, is a keyword
    /// that cannot start a statement, or the statement itself is malformed.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.current();
        if token.kind != TokenKind::Keyword {
            return Err(ParseError::ExpectedStatement { found:  describe(token),
                                                       line:   token.line,
                                                       column: token.column, });
        }

        let (keyword, line, column) = (token.text.clone(), token.line, token.column);
        let statement = match keyword.as_str() {
            "declare" => self.parse_var_decl()?,
            "displayln" => self.parse_print()?,
            "if" => self.parse_if()?,
            "otherwise" => self.parse_otherwise()?,
            _ => return Err(ParseError::UnexpectedKeyword { keyword, line, column }),
        };

        tracing::debug!(line = statement.line(), "parsed statement: {statement}");
        Ok(statement)
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `declare Identifier "=" (Number | Identifier | String)`
    ///
    /// The right-hand side is exactly one token; there are no expressions.
    ///
    /// # Errors
    /// Returns a `ParseError` if the name is not an identifier, `=` is
    /// missing, or the value is not a number, identifier, or string.
    fn parse_var_decl(&mut self) -> ParseResult<Statement> {
        let line = self.advance().line;

        let name = self.expect_kind(&[TokenKind::Identifier], "an identifier")?.text;
        self.expect_literal("=")?;
        let value = self.expect_kind(OPERAND_KINDS, "a number, identifier, or string")?;

        Ok(Statement::VarDecl { name, value, line })
    }

    /// Parses a print statement.
    ///
    /// Grammar: `displayln "(" (Identifier | Number | String) ")"`
    ///
    /// # Errors
    /// Returns a `ParseError` if either parenthesis is missing or the argument
    /// is not a single identifier, number, or string.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.advance().line;

        self.expect_literal("(")?;
        let value = self.expect_kind(OPERAND_KINDS, "an identifier, number, or string")?;
        self.expect_literal(")")?;

        Ok(Statement::Print { value, line })
    }
}
