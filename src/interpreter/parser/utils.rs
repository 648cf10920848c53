use crate::{
    ast::Identifier,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a comma-separated list of parameter names up to the closing
    /// parenthesis.
    ///
    /// The current token must be the opening `(`; on success the closing `)`
    /// is the current token. An immediately encountered `)` produces an empty
    /// list.
    ///
    /// # Errors
    /// `UnexpectedToken` if a name, comma or the closing `)` is missing.
    ///
    /// Grammar: `parameters := "(" (identifier ("," identifier)*)? ")"`
    pub(in crate::interpreter::parser) fn parse_function_parameters(
        &mut self)
        -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.literal.clone()));

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.literal.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }
}
