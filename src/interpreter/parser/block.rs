use crate::{
    ast::{BlockStatement, Expression},
    error::ParseError,
    interpreter::{
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a block delimited by braces.
    ///
    /// The current token must be the opening `{`. Statements are parsed until
    /// the matching `}`, which is left as the current token. Malformed
    /// statements inside the block are recorded and dropped like at the top
    /// level.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// `UnexpectedToken` if the input ends before the closing brace.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> ParseResult<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.current_token_is(TokenKind::RBrace) {
            if self.current_token_is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                         found:    TokenKind::Eof,
                                                         line:     self.current.line, });
            }
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(e) => self.errors.push(e),
            }
            self.next_token();
        }

        Ok(block)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    /// The `else` is only consumed when it is the very next token after the
    /// consequence's closing brace.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis or brace is missing.
    /// - Propagates any errors from the condition and both blocks.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self)
                                                              -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses a function literal: `fn(<parameters>) { <body> }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self)
                                                                 -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters, body })
    }
}
