use crate::{
    ast::{Comparison, Condition},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a condition of exactly three tokens.
    ///
    /// Grammar: `condition := operand Operator operand`
    ///
    /// Either operand may be any token at all; only the middle token is
    /// checked, and it must be of operator kind. There is no grouping and no
    /// boolean connective.
    ///
    /// # Errors
    /// Returns a `ParseError` if the middle token is not an operator.
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> ParseResult<Condition> {
        let left = self.advance();
        let op = self.expect_kind(&[TokenKind::Operator], "an operator")?;
        let right = self.advance();

        Ok(Condition { left,
                       op: Comparison::from(op.text.as_str()),
                       right })
    }
}
