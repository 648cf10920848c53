use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// On return the current token is the last token of the statement, which
    /// is its `;` when one was written.
    ///
    /// # Errors
    /// The first error met inside the statement. Callers record it and
    /// resume at the next token.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `return <expression>;` or a bare `return;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        if matches!(self.peek.kind,
                    TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof)
        {
            self.skip_semicolon();
            return Ok(Statement::Return { value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value: Some(value) })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        self.traced("parse_expression_statement", |parser| {
                let expression = parser.parse_expression(Precedence::Lowest)?;
                parser.skip_semicolon();
                Ok(Statement::Expression(expression))
            })
    }
}
