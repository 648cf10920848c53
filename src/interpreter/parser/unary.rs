use crate::{
    ast::{Expression, Identifier, PrefixOperator},
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
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.current.literal.clone())))
    }

    /// Converts the current `Int` token's text into an integer literal.
    ///
    /// # Errors
    /// `InvalidInteger` if the text does not fit in an `i64`.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self)
                                                                -> ParseResult<Expression> {
        self.traced("parse_integer_literal", |parser| {
                let Token { literal, line, .. } = &parser.current;
                literal.parse::<i64>()
                       .map(Expression::IntegerLiteral)
                       .map_err(|_| ParseError::InvalidInteger { literal: literal.clone(),
                                                                 line:    *line, })
            })
    }

    pub(in crate::interpreter::parser) fn parse_boolean(&mut self) -> ParseResult<Expression> {
        match self.current.literal.as_str() {
            "true" => Ok(Expression::Boolean(true)),
            "false" => Ok(Expression::Boolean(false)),
            literal => Err(ParseError::InvalidBoolean { literal: literal.to_string(),
                                                        line:    self.current.line, }),
        }
    }

    /// Parses `!operand` or `-operand`.
    ///
    /// The operand binds at prefix precedence, so `-a * b` is `(-a) * b`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self)
                                                                  -> ParseResult<Expression> {
        self.traced("parse_prefix_expression", |parser| {
                let operator = match parser.current.kind {
                    TokenKind::Bang => PrefixOperator::Bang,
                    TokenKind::Minus => PrefixOperator::Minus,
                    kind => {
                        return Err(ParseError::NoPrefixParseFunction { kind,
                                                                       line: parser.current.line });
                    },
                };
                parser.next_token();
                let operand = parser.parse_expression(Precedence::Prefix)?;

                Ok(Expression::Prefix { operator,
                                        operand: Box::new(operand) })
            })
    }

    /// Parses `( expression )`, resetting the precedence floor.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self)
                                                                   -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expression)
    }
}
